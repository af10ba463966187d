//! Platform directory lookup.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{TrelloError, TrelloResult};

/// Platform-specific data directory, home of the default log directory.
///
/// - Windows: `%APPDATA%/Trello`
/// - macOS: `~/Library/Application Support/Trello`
/// - Linux: `~/.local/share/Trello`
pub fn data_dir() -> TrelloResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| TrelloError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Platform-specific configuration directory, home of `config.toml`.
pub fn config_dir() -> TrelloResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| TrelloError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}
