//! Inbound webhook delivery decoding.
//!
//! Routing, signature checks and the HTTP status returned to Trello belong
//! to the hosting server. This module only decodes and records the body.

use tracing::{debug, warn};

use trello_models::WebhookEvent;

use crate::log::ExchangeLog;

/// Decode the raw body of a webhook delivery and record it in `log`.
///
/// Returns `None` only for an empty body or invalid JSON. Any other JSON
/// document decodes, even when it does not look like a delivery envelope.
/// A malformed delivery is still logged as received and never raises: the
/// receiving endpoint must keep running.
pub fn decode_webhook_payload(raw: &str, log: &ExchangeLog) -> Option<WebhookEvent> {
    log.record_webhook(raw);

    if raw.trim().is_empty() {
        debug!("empty webhook body");
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => {
            let event = WebhookEvent::from(value);
            debug!(
                "webhook delivery: action={}",
                event.action_type().unwrap_or("<none>")
            );
            Some(event)
        }
        Err(e) => {
            warn!("undecodable webhook body: {e}");
            None
        }
    }
}
