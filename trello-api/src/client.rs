//! HTTP client for the Trello REST API.
//!
//! Handles authentication, URL assembly, request/response logging and the
//! uniform success contract: only `200 OK` is a success, everything else is
//! returned as [`TrelloError::Api`] carrying the raw body.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use trello_core::config::ClientConfig;
use trello_core::error::{TrelloError, TrelloResult};
use trello_models::WebhookEvent;

use crate::log::ExchangeLog;
use crate::params::QueryParams;

/// HTTP client for communicating with Trello.
///
/// Wraps a pooled `reqwest::Client`, built once per instance and shared by
/// clones. The credential pair and the log sink are fixed at construction.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// API root, always ending in `/`.
    base_url: String,
    key: String,
    token: String,
    log: ExchangeLog,
}

impl ApiClient {
    /// Create a new ApiClient from configuration.
    ///
    /// Fails with [`TrelloError::Config`] if the log directory is unusable.
    pub fn new(config: &ClientConfig) -> TrelloResult<Self> {
        let log = ExchangeLog::open(config.effective_log_dir()?)?;

        let inner = Client::builder()
            .timeout(config.api_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| TrelloError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.normalized_base_url(),
            key: config.key.clone(),
            token: config.token.clone(),
            log,
        })
    }

    /// Create a client from the credential pair and a log directory, with
    /// default network settings.
    pub fn from_credentials(
        key: impl Into<String>,
        token: impl Into<String>,
        log_dir: impl AsRef<Path>,
    ) -> TrelloResult<Self> {
        Self::new(&ClientConfig::new(key, token, log_dir))
    }

    /// Get the API root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token this client authenticates with.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The log sink shared by requests and webhook decoding.
    pub fn exchange_log(&self) -> &ExchangeLog {
        &self.log
    }

    /// Build the absolute URL for `path`.
    ///
    /// Caller parameters come first; `key` and `token` are always appended
    /// last, even if the caller supplied parameters with the same names.
    pub fn build_url(&self, path: &str, query: &QueryParams) -> TrelloResult<Url> {
        let joined = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| TrelloError::InvalidArgument(format!("invalid path {path:?}: {e}")))?;

        url.query_pairs_mut()
            .extend_pairs(query.iter())
            .append_pair("key", &self.key)
            .append_pair("token", &self.token);

        Ok(url)
    }

    /// Issue one request and return the raw body of a `200 OK` reply.
    ///
    /// `body`, when present, is sent as JSON with
    /// `Content-Type: application/json`. `method` defaults to GET; the verb
    /// is never inferred from the presence of a body.
    pub async fn request(
        &self,
        path: &str,
        query: &QueryParams,
        body: Option<&serde_json::Value>,
        method: Option<Method>,
    ) -> TrelloResult<String> {
        let url = self.build_url(path, query)?;
        let method = method.unwrap_or(Method::GET);

        debug!("{} {}", method, path);
        self.log.record_request(method.as_str(), url.as_str(), body);

        let mut builder = self.inner.request(method.clone(), url);
        if let Some(b) = body {
            builder = builder.json(b);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status();
        let text = response.text().await.map_err(Self::classify_error)?;

        trace!("{} {} -> {}: {}", method, path, status.as_u16(), text);
        self.log.record_response(&text);

        Self::check_status(status, text, &method, path)
    }

    /// Request and decode a JSON reply into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
        body: Option<&serde_json::Value>,
        method: Option<Method>,
    ) -> TrelloResult<T> {
        let text = self.request(path, query, body, method).await?;
        Self::parse_body(&text)
    }

    // --- Convenience wrappers ---

    /// GET + decode.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> TrelloResult<T> {
        self.request_json(path, query, None, None).await
    }

    /// POST a JSON body + decode.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TrelloResult<T> {
        let body = Self::encode_body(body)?;
        self.request_json(path, &QueryParams::new(), Some(&body), Some(Method::POST))
            .await
    }

    /// PUT a JSON body + decode.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TrelloResult<T> {
        let body = Self::encode_body(body)?;
        self.request_json(path, &QueryParams::new(), Some(&body), Some(Method::PUT))
            .await
    }

    /// DELETE, discarding the reply body.
    pub async fn delete(&self, path: &str) -> TrelloResult<()> {
        self.request(path, &QueryParams::new(), None, Some(Method::DELETE))
            .await?;
        Ok(())
    }

    /// Decode an inbound webhook body using this client's log sink.
    pub fn decode_webhook_payload(&self, raw: &str) -> Option<WebhookEvent> {
        crate::webhook::decode_webhook_payload(raw, &self.log)
    }

    // --- Response helpers ---

    /// Only `200 OK` succeeds. Other statuses carry the body verbatim.
    fn check_status(
        status: StatusCode,
        body: String,
        method: &Method,
        path: &str,
    ) -> TrelloResult<String> {
        if status == StatusCode::OK {
            return Ok(body);
        }
        warn!("{} {} failed with status {}", method, path, status.as_u16());
        Err(TrelloError::Api {
            status: status.as_u16(),
            message: body,
        })
    }

    fn parse_body<T: DeserializeOwned>(text: &str) -> TrelloResult<T> {
        serde_json::from_str(text)
            .map_err(|e| TrelloError::Serialization(format!("failed to parse response: {e}")))
    }

    fn encode_body<B: Serialize>(body: &B) -> TrelloResult<serde_json::Value> {
        serde_json::to_value(body)
            .map_err(|e| TrelloError::Serialization(format!("failed to encode body: {e}")))
    }

    /// Classify a reqwest error into a TrelloError variant.
    fn classify_error(e: reqwest::Error) -> TrelloError {
        if e.is_timeout() {
            TrelloError::Timeout(e.to_string())
        } else if e.is_connect() {
            TrelloError::Http(format!("connection failed: {e}"))
        } else {
            TrelloError::Http(e.to_string())
        }
    }
}
