//! Shared test utilities for integration tests.

use tempfile::TempDir;
use trello_api::ApiClient;
use trello_core::config::ClientConfig;
use wiremock::MockServer;

/// A client pointed at a fresh mock server, with key `K` and token `T`.
/// The TempDir holds the log files and must stay alive for the test.
pub struct TestHarness {
    pub server: MockServer,
    pub client: ApiClient,
    pub log_dir: TempDir,
}

pub async fn harness() -> TestHarness {
    trello_core::logging::init_console_logging("trello_api=debug");
    let server = MockServer::start().await;
    let log_dir = TempDir::new().expect("failed to create temp dir");
    let config =
        ClientConfig::new("K", "T", log_dir.path()).with_base_url(format!("{}/1/", server.uri()));
    let client = ApiClient::new(&config).expect("failed to build client");
    TestHarness {
        server,
        client,
        log_dir,
    }
}

/// Contents of the outbound request log.
pub fn send_log(h: &TestHarness) -> String {
    std::fs::read_to_string(h.client.exchange_log().send_log_path()).unwrap_or_default()
}
