//! Card entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Extra;

/// The atomic task unit. Belongs to exactly one list at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_board: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_list: Option<String>,
    #[serde(default)]
    pub id_members: Vec<String>,
    #[serde(default)]
    pub id_labels: Vec<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_activity: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<serde_json::Value>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Card {
    /// Whether the card has a due date in the past and is not marked complete.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.due_complete && self.due.is_some_and(|due| due < now)
    }
}

/// A colored label attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_board: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}
