//! Webhook entity model.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// A subscription that POSTs change notifications for one model to a callback URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_model: Option<String>,
    #[serde(rename = "callbackURL", default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_failures: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_consecutive_fail_date: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_uses_wire_casing() {
        let json = serde_json::json!({
            "id": "w1",
            "description": "card feed",
            "idModel": "b1",
            "callbackURL": "https://example.com/hook",
            "active": true
        });
        let hook: Webhook = serde_json::from_value(json).unwrap();
        assert_eq!(hook.callback_url.as_deref(), Some("https://example.com/hook"));

        let back = serde_json::to_value(&hook).unwrap();
        assert_eq!(back["callbackURL"], "https://example.com/hook");
        assert!(back.get("consecutiveFailures").is_none());
    }
}
