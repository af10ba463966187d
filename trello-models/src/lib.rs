//! Trello Models - typed entities returned by the REST API and
//! the envelope of inbound webhook deliveries.
//!
//! Every entity keeps fields it does not model in a flattened `extra` map,
//! so payloads pass through to callers without loss.

pub mod events;
pub mod models;

// Re-export key types
pub use events::{Action, ActionDisplay, ActionType, TranslationKey, WebhookEvent};
pub use models::board::Board;
pub use models::card::{Card, Label};
pub use models::list::List;
pub use models::member::Member;
pub use models::token::Token;
pub use models::webhook::Webhook;

/// Unmodelled JSON fields carried alongside a typed entity.
pub type Extra = serde_json::Map<String, serde_json::Value>;
