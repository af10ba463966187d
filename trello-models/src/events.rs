//! Inbound webhook delivery types.
//!
//! A delivery is a JSON document with an `action` describing what happened
//! and a `model` holding the watched entity. Two unrelated vocabularies
//! describe the action: the coarse `action.type` names ([`ActionType`]) and
//! the fine-grained `action.display.translationKey` values
//! ([`TranslationKey`]). Their value sets do not map onto each other, so the
//! caller picks whichever matches its webhook setup.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// Decoded body of a webhook delivery.
///
/// The full document is kept in `raw`. `action` and `model` are typed views
/// over it; a delivery whose action does not fit [`Action`] still decodes,
/// with `action` left empty and the accessors reading from `raw`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookEvent {
    pub action: Option<Action>,
    /// The watched model (board, list, card or member) after the change.
    pub model: Option<serde_json::Value>,
    pub raw: serde_json::Value,
}

/// The change that triggered a delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(default)]
    pub id: Option<String>,
    /// Raw action name, e.g. `updateCard`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_member_creator: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_creator: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ActionDisplay>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Rendering hints attached to an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDisplay {
    #[serde(default)]
    pub translation_key: Option<String>,
    #[serde(default)]
    pub entities: serde_json::Value,
}

impl From<serde_json::Value> for WebhookEvent {
    fn from(raw: serde_json::Value) -> Self {
        let action = raw
            .get("action")
            .filter(|a| a.is_object())
            .and_then(|a| Action::deserialize(a).ok());
        let model = raw.get("model").filter(|m| !m.is_null()).cloned();
        Self { action, model, raw }
    }
}

impl Serialize for WebhookEvent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WebhookEvent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl WebhookEvent {
    /// Raw `action.type`, if the delivery carries one.
    pub fn action_type(&self) -> Option<&str> {
        self.raw
            .pointer("/action/type")
            .and_then(serde_json::Value::as_str)
    }

    /// `action.type` matched against the coarse vocabulary.
    pub fn coarse_action(&self) -> Option<ActionType> {
        self.action_type().and_then(ActionType::parse)
    }

    /// Raw `action.display.translationKey`, if present.
    pub fn translation_key_str(&self) -> Option<&str> {
        self.raw
            .pointer("/action/display/translationKey")
            .and_then(serde_json::Value::as_str)
    }

    /// `action.display.translationKey` matched against the fine-grained vocabulary.
    pub fn translation_key(&self) -> Option<TranslationKey> {
        self.translation_key_str().and_then(TranslationKey::parse)
    }
}

/// Coarse action names found in `action.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// A member was added to a card (`addMemberToCard`).
    #[serde(rename = "addMemberToCard")]
    CardMemberAdd,
    /// A member was removed from a card (`removeMemberFromCard`).
    #[serde(rename = "removeMemberFromCard")]
    CardMemberDel,
    /// Any other card field changed (`updateCard`).
    #[serde(rename = "updateCard")]
    CardUpdated,
}

impl ActionType {
    /// Every variant, in declaration order.
    pub const ALL: [ActionType; 3] = [Self::CardMemberAdd, Self::CardMemberDel, Self::CardUpdated];

    /// Parse a wire name. Names outside the vocabulary yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "addMemberToCard" => Some(Self::CardMemberAdd),
            "removeMemberFromCard" => Some(Self::CardMemberDel),
            "updateCard" => Some(Self::CardUpdated),
            _ => None,
        }
    }

    /// The wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CardMemberAdd => "addMemberToCard",
            Self::CardMemberDel => "removeMemberFromCard",
            Self::CardUpdated => "updateCard",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained translation keys found in `action.display.translationKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranslationKey {
    #[serde(rename = "action_archived_card")]
    ArchivedCard,
    #[serde(rename = "action_changed_description_of_card")]
    ChangedDescriptionOfCard,
    #[serde(rename = "action_create_card")]
    CreateCard,
    #[serde(rename = "action_add_attachment_to_card")]
    AddAttachmentToCard,
    #[serde(rename = "action_delete_card")]
    DeleteCard,
    #[serde(rename = "action_add_label_to_card")]
    AddLabelToCard,
    #[serde(rename = "action_added_member_to_card")]
    AddedMemberToCard,
    #[serde(rename = "action_removed_member_from_card")]
    RemovedMemberFromCard,
    #[serde(rename = "action_move_card_from_list_to_list")]
    MoveCardFromListToList,
    #[serde(rename = "action_renamed_card")]
    RenamedCard,
}

impl TranslationKey {
    /// Every variant, in declaration order.
    pub const ALL: [TranslationKey; 10] = [
        Self::ArchivedCard,
        Self::ChangedDescriptionOfCard,
        Self::CreateCard,
        Self::AddAttachmentToCard,
        Self::DeleteCard,
        Self::AddLabelToCard,
        Self::AddedMemberToCard,
        Self::RemovedMemberFromCard,
        Self::MoveCardFromListToList,
        Self::RenamedCard,
    ];

    /// Parse a wire key. Keys outside the vocabulary yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// The wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArchivedCard => "action_archived_card",
            Self::ChangedDescriptionOfCard => "action_changed_description_of_card",
            Self::CreateCard => "action_create_card",
            Self::AddAttachmentToCard => "action_add_attachment_to_card",
            Self::DeleteCard => "action_delete_card",
            Self::AddLabelToCard => "action_add_label_to_card",
            Self::AddedMemberToCard => "action_added_member_to_card",
            Self::RemovedMemberFromCard => "action_removed_member_from_card",
            Self::MoveCardFromListToList => "action_move_card_from_list_to_list",
            Self::RenamedCard => "action_renamed_card",
        }
    }

    /// Whether the action changed who is on the card.
    pub fn is_membership_change(&self) -> bool {
        matches!(self, Self::AddedMemberToCard | Self::RemovedMemberFromCard)
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
