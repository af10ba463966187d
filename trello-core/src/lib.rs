//! Trello Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other Trello crates:
//! - Client configuration (credentials, log directory, timeouts)
//! - A single error type covering every failure the client can surface
//! - Structured logging setup with tracing
//! - Default data/config directories and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::ClientConfig;
pub use error::{TrelloError, TrelloResult};
pub use logging::init_logging;
