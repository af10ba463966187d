//! Client-wide constants.

/// Library name, used in the default User-Agent and data directories.
pub const APP_NAME: &str = "Trello";

/// Library version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the Trello REST API. Paths are appended directly to it.
pub const API_BASE_URL: &str = "https://api.trello.com/1/";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default TCP/TLS connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Log file receiving outbound requests and their responses.
pub const SEND_LOG_FILE: &str = "send.log";

/// Log file receiving inbound webhook deliveries.
pub const WEBHOOK_LOG_FILE: &str = "webhook.log";

/// Default position for newly created cards.
pub const DEFAULT_CARD_POSITION: &str = "top";

/// Member id that resolves to the owner of the token.
pub const CURRENT_MEMBER: &str = "me";

/// Default User-Agent header value.
pub fn default_user_agent() -> String {
    format!("trello-rs/{APP_VERSION}")
}
