//! Error types for the Trello client.
//!
//! Every failure the client can surface is folded into the single
//! `TrelloError` enum, with conversions from the underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using TrelloError.
pub type TrelloResult<T> = Result<T, TrelloError>;

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum TrelloError {
    // -- Remote errors --
    /// The API answered with anything other than 200 OK.
    ///
    /// `message` holds the raw response body, unmodified.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// A reply decoded fine but did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    // -- Caller errors --
    /// The caller supplied an unusable combination of arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Configuration errors --
    /// Configuration could not be loaded, or the log directory is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Network errors --
    /// HTTP transport failure (connect, TLS, DNS, body read).
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Data errors --
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrelloError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote service rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

impl From<serde_json::Error> for TrelloError {
    fn from(e: serde_json::Error) -> Self {
        TrelloError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for TrelloError {
    fn from(e: toml::de::Error) -> Self {
        TrelloError::Config(e.to_string())
    }
}
