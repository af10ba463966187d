//! Token metadata model.

use serde::{Deserialize, Serialize};

use super::webhook::Webhook;
use crate::Extra;

/// Metadata describing an API token, as listed under `members/{id}/tokens`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_expires: Option<String>,
    #[serde(default)]
    pub permissions: Vec<serde_json::Value>,
    /// Only populated when requested with `webhooks=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,

    #[serde(flatten)]
    pub extra: Extra,
}
