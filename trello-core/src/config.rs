//! Client configuration.
//!
//! Holds the credential pair, the log directory and the network settings
//! used by the API client. Configuration can be built in code or persisted
//! as TOML on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{TrelloError, TrelloResult};
use crate::platform;

/// Configuration for a Trello API client.
///
/// `Debug` output redacts the key and token.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key from the Trello developer portal.
    #[serde(default)]
    pub key: String,

    /// API token authorizing the key against a member account.
    #[serde(default)]
    pub token: String,

    /// Directory for the request and webhook logs. If empty, uses default location.
    #[serde(default)]
    pub log_dir: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// REST API root. Only changed when pointing at a mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions for serde

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_base_url() -> String {
    constants::API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    constants::default_user_agent()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            token: String::new(),
            log_dir: String::new(),
            api_timeout_ms: default_api_timeout(),
            connect_timeout_ms: default_connect_timeout(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("key", &redact(&self.key))
            .field("token", &redact(&self.token))
            .field("log_dir", &self.log_dir)
            .field("api_timeout_ms", &self.api_timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl ClientConfig {
    /// Build a configuration from the three required inputs.
    pub fn new(
        key: impl Into<String>,
        token: impl Into<String>,
        log_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
            log_dir: log_dir.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from the default config file path.
    pub fn load_default() -> TrelloResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> TrelloResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> TrelloResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TrelloError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> TrelloResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> TrelloResult<PathBuf> {
        if self.log_dir.is_empty() {
            Ok(platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.log_dir))
        }
    }

    /// Check whether both halves of the credential pair are present.
    pub fn is_configured(&self) -> bool {
        !self.key.is_empty() && !self.token.is_empty()
    }

    /// The API root with exactly one trailing slash, so paths can be appended.
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return constants::API_BASE_URL.to_string();
        }
        format!("{}/", trimmed.trim_end_matches('/'))
    }

    /// Request timeout as a Duration.
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    /// Connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
