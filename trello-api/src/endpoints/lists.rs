//! List endpoints.

use trello_core::error::TrelloResult;
use trello_models::List;

use crate::client::ApiClient;
use crate::params::{resource_path, QueryParams};

impl ApiClient {
    /// Get the lists of a board.
    pub async fn get_lists(&self, board: &str) -> TrelloResult<Vec<List>> {
        self.get_json(&resource_path(&["boards", board, "lists"])?, &QueryParams::new())
            .await
    }
}
