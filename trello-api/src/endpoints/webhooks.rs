//! Webhook endpoints.

use serde::Serialize;
use tracing::debug;

use trello_core::error::{TrelloError, TrelloResult};
use trello_models::{Token, Webhook};

use crate::client::ApiClient;
use crate::params::{resource_path, QueryParams};

/// Parameters for registering a webhook.
#[derive(Debug, Clone, Serialize)]
pub struct NewWebhook {
    pub description: String,
    /// Publicly reachable URL that will receive HEAD and POST requests.
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
    /// Id of the board, list, card or member to watch.
    #[serde(rename = "idModel")]
    pub model_id: String,
}

impl ApiClient {
    /// Get a webhook by id.
    pub async fn get_webhook(&self, id: &str) -> TrelloResult<Webhook> {
        self.get_json(&resource_path(&["webhooks", id])?, &QueryParams::new())
            .await
    }

    /// List the webhooks registered under this client's token.
    ///
    /// Looks up the token metadata with `webhooks=true`, which must yield
    /// exactly one token record carrying a `webhooks` field.
    pub async fn list_webhooks(&self) -> TrelloResult<Vec<Webhook>> {
        let mut query = QueryParams::new();
        query.push_bool("webhooks", true);
        let tokens: Vec<Token> = self.get_json("members/me/tokens", &query).await?;
        debug!("token lookup returned {} record(s)", tokens.len());
        single_token_webhooks(tokens)
    }

    /// Register a webhook under this client's token.
    pub async fn create_webhook(&self, webhook: &NewWebhook) -> TrelloResult<Webhook> {
        let path = resource_path(&["tokens", self.token(), "webhooks"])?;
        self.post_json(&path, webhook).await
    }

    /// Delete a webhook.
    pub async fn delete_webhook(&self, id: &str) -> TrelloResult<()> {
        self.delete(&resource_path(&["webhooks", id])?).await
    }
}

fn single_token_webhooks(tokens: Vec<Token>) -> TrelloResult<Vec<Webhook>> {
    let count = tokens.len();
    let mut tokens = tokens.into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.webhooks.ok_or_else(|| {
            TrelloError::UnexpectedResponseShape(format!(
                "token {} has no webhooks field",
                token.id
            ))
        }),
        _ => Err(TrelloError::UnexpectedResponseShape(format!(
            "expected exactly one token record, got {count}"
        ))),
    }
}
