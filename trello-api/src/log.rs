//! Append-only exchange log.
//!
//! Keeps a human-readable record of every request, response and inbound
//! webhook delivery, one file per channel. Each entry opens the file in
//! append mode, writes one block and closes it again. Entries are
//! timestamped but otherwise unstructured; nothing is rotated or pruned.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use trello_core::constants::{SEND_LOG_FILE, WEBHOOK_LOG_FILE};
use trello_core::error::{TrelloError, TrelloResult};

/// File-backed log sink for the client and the webhook decoder.
#[derive(Debug, Clone)]
pub struct ExchangeLog {
    dir: PathBuf,
}

impl ExchangeLog {
    /// Open the log directory, creating it if needed.
    ///
    /// Fails with [`TrelloError::Config`] when the path cannot be created,
    /// is not a directory, or does not accept new files.
    pub fn open(dir: impl AsRef<Path>) -> TrelloResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            TrelloError::Config(format!("cannot create log directory {}: {e}", dir.display()))
        })?;

        let meta = fs::metadata(dir).map_err(|e| {
            TrelloError::Config(format!("cannot inspect log directory {}: {e}", dir.display()))
        })?;
        if !meta.is_dir() {
            return Err(TrelloError::Config(format!(
                "log path {} is not a directory",
                dir.display()
            )));
        }

        // Check writability using the file the first request will append to anyway.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(SEND_LOG_FILE))
            .map_err(|e| {
                TrelloError::Config(format!("log directory {} is not writable: {e}", dir.display()))
            })?;

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the outbound request/response log.
    pub fn send_log_path(&self) -> PathBuf {
        self.dir.join(SEND_LOG_FILE)
    }

    /// Path of the inbound webhook log.
    pub fn webhook_log_path(&self) -> PathBuf {
        self.dir.join(WEBHOOK_LOG_FILE)
    }

    /// Record an outbound request line, with its JSON body if any.
    pub fn record_request(&self, method: &str, url: &str, body: Option<&serde_json::Value>) {
        let mut entry = format!("{} {method}: {url}\n", timestamp());
        if let Some(body) = body {
            entry.push_str(&pretty_value(body));
            entry.push('\n');
        }
        self.append(&self.send_log_path(), &entry);
    }

    /// Record the body of a response, closing the exchange with a blank line.
    pub fn record_response(&self, body: &str) {
        let entry = format!("Response: \n{}\n\n", pretty_text(body));
        self.append(&self.send_log_path(), &entry);
    }

    /// Record an inbound webhook delivery as received.
    pub fn record_webhook(&self, raw: &str) {
        let entry = format!("{} Webhook\n{}\n\n", timestamp(), pretty_text(raw));
        self.append(&self.webhook_log_path(), &entry);
    }

    /// Write one block. Failures are reported and swallowed so that the
    /// caller's result is never replaced by a logging error.
    fn append(&self, path: &Path, entry: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(entry.as_bytes()));
        if let Err(e) = result {
            warn!("failed to append to {}: {e}", path.display());
        }
    }
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

fn pretty_value(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pretty-print text that holds JSON; anything else is written verbatim.
fn pretty_text(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => pretty_value(&value),
        Err(_) => raw.to_string(),
    }
}
