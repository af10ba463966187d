//! Member endpoints.

use trello_core::constants::CURRENT_MEMBER;
use trello_core::error::TrelloResult;
use trello_models::Member;

use crate::client::ApiClient;
use crate::params::{resource_path, QueryParams};

impl ApiClient {
    /// Get the member who owns the token.
    pub async fn get_me(&self) -> TrelloResult<Member> {
        self.get_member(CURRENT_MEMBER).await
    }

    /// Get a member by id or username.
    pub async fn get_member(&self, id: &str) -> TrelloResult<Member> {
        self.get_json(&resource_path(&["members", id])?, &QueryParams::new())
            .await
    }

    /// Get the members of a board.
    pub async fn get_board_members(&self, board: &str) -> TrelloResult<Vec<Member>> {
        self.get_json(&resource_path(&["boards", board, "members"])?, &QueryParams::new())
            .await
    }
}
