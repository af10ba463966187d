//! Board endpoints.

use trello_core::constants::CURRENT_MEMBER;
use trello_core::error::TrelloResult;
use trello_models::Board;

use crate::client::ApiClient;
use crate::params::{resource_path, QueryParams};

/// Options for listing a member's boards.
#[derive(Debug, Clone, Default)]
pub struct BoardsQuery {
    /// Member id or username. Defaults to `me`.
    pub member: Option<String>,
    /// `all`, `closed`, `members`, `open`, `organization`, `public`, `starred`.
    pub filter: Option<String>,
    /// Board fields to return.
    pub fields: Option<Vec<String>>,
    /// Which nested lists to include: `all`, `closed`, `none`, `open`.
    pub lists: Option<String>,
    /// Include the owning organization.
    pub organization: Option<bool>,
    /// Organization fields to return when `organization` is set.
    pub organization_fields: Option<Vec<String>>,
}

impl BoardsQuery {
    /// Boards of a specific member.
    pub fn for_member(member: impl Into<String>) -> Self {
        Self {
            member: Some(member.into()),
            ..Self::default()
        }
    }

    pub fn member(&self) -> &str {
        self.member.as_deref().unwrap_or(CURRENT_MEMBER)
    }

    fn path(&self) -> TrelloResult<String> {
        resource_path(&["members", self.member(), "boards"])
    }

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("filter", self.filter.as_deref())
            .push_opt_list("fields", self.fields.as_deref())
            .push_opt("lists", self.lists.as_deref())
            .push_opt_bool("organization", self.organization)
            .push_opt_list("organization_fields", self.organization_fields.as_deref());
        params
    }
}

impl ApiClient {
    /// List the boards a member belongs to.
    pub async fn get_boards(&self, query: &BoardsQuery) -> TrelloResult<Vec<Board>> {
        self.get_json(&query.path()?, &query.to_params()).await
    }
}
