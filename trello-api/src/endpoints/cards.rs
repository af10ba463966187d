//! Card endpoints.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use trello_core::constants::DEFAULT_CARD_POSITION;
use trello_core::error::{TrelloError, TrelloResult};
use trello_models::Card;

use crate::client::ApiClient;
use crate::params::{resource_path, QueryParams};

/// Selects whose cards to list.
///
/// When several selectors are set, the first one in the order
/// board, list, member wins.
#[derive(Debug, Clone, Default)]
pub struct CardsFilter {
    pub board: Option<String>,
    pub list: Option<String>,
    pub member: Option<String>,
}

impl CardsFilter {
    pub fn board(id: impl Into<String>) -> Self {
        Self {
            board: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn list(id: impl Into<String>) -> Self {
        Self {
            list: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn member(id: impl Into<String>) -> Self {
        Self {
            member: Some(id.into()),
            ..Self::default()
        }
    }

    /// Resolve the endpoint path. Fails if no selector is set.
    pub fn path(&self) -> TrelloResult<String> {
        if let Some(board) = &self.board {
            resource_path(&["boards", board.as_str(), "cards"])
        } else if let Some(list) = &self.list {
            resource_path(&["lists", list.as_str(), "cards"])
        } else if let Some(member) = &self.member {
            resource_path(&["members", member.as_str(), "cards"])
        } else {
            Err(TrelloError::InvalidArgument(
                "one of board, list or member is required to list cards".into(),
            ))
        }
    }
}

/// Position of a card within its list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
    /// Explicit sort key; cards are ordered by ascending value.
    At(f64),
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Position::Top => serializer.serialize_str(DEFAULT_CARD_POSITION),
            Position::Bottom => serializer.serialize_str("bottom"),
            Position::At(pos) => serializer.serialize_f64(*pos),
        }
    }
}

/// Body of a card creation request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub id_list: String,
    pub name: String,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "pos")]
    pub position: Position,
    #[serde(rename = "due", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "start", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_complete: Option<bool>,
    #[serde(rename = "idMembers", skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    #[serde(rename = "idLabels", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// URL to attach to the new card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Id of a card to copy into the new one.
    #[serde(rename = "idCardSource", skip_serializing_if = "Option::is_none")]
    pub card_source: Option<String>,
    /// Properties to copy from `card_source`: `all`, or a comma list such as `due,labels`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_from_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// `latitude,longitude`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl NewCard {
    /// A card named `name` at the top of `list`.
    pub fn new(list: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id_list: list.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Changes to apply to an existing card. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Archive (`true`) or restore (`false`) the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(rename = "idMembers", skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    /// Attachment id to use as the cover image.
    #[serde(rename = "idAttachmentCover", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(rename = "idList", skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    #[serde(rename = "idLabels", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(rename = "idBoard", skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(rename = "due", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "start", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<CardCover>,
}

/// Card cover settings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// `dark` or `light`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_attachment: Option<String>,
    /// `normal` or `full`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ApiClient {
    /// List the cards of a board, a list or a member.
    ///
    /// Fails with [`TrelloError::InvalidArgument`] before any request is
    /// made if the filter selects nothing.
    pub async fn get_cards(&self, filter: &CardsFilter) -> TrelloResult<Vec<Card>> {
        let path = filter.path()?;
        self.get_json(&path, &QueryParams::new()).await
    }

    /// Get a single card.
    pub async fn get_card(&self, card: &str) -> TrelloResult<Card> {
        self.get_json(&resource_path(&["cards", card])?, &QueryParams::new())
            .await
    }

    /// Create a card.
    pub async fn create_card(&self, card: &NewCard) -> TrelloResult<Card> {
        self.post_json("cards", card).await
    }

    /// Apply `update` to an existing card.
    pub async fn update_card(&self, card: &str, update: &CardUpdate) -> TrelloResult<Card> {
        self.put_json(&resource_path(&["cards", card])?, update).await
    }
}
