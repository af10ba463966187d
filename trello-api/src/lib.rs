//! Trello API - HTTP client for the Trello REST API.
//!
//! This crate provides a typed client for boards, lists, cards, members and
//! webhooks. Every call is a single authenticated round trip: the key/token
//! pair is appended to the query string, write operations carry a JSON
//! body, and anything but `200 OK` becomes [`TrelloError::Api`] holding the
//! raw response body. Requests, responses and inbound webhook deliveries are
//! recorded in an append-only [`ExchangeLog`].
//!
//! [`TrelloError::Api`]: trello_core::TrelloError::Api

pub mod client;
pub mod endpoints;
pub mod log;
pub mod params;
pub mod webhook;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::boards::BoardsQuery;
pub use endpoints::cards::{CardCover, CardUpdate, CardsFilter, NewCard, Position};
pub use endpoints::webhooks::NewWebhook;
pub use log::ExchangeLog;
pub use params::{resource_path, QueryParams};
pub use webhook::decode_webhook_payload;
