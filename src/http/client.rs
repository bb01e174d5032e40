//! HTTP client for the management API
//!
//! Provides the request executor that:
//! - Attaches the API key and `Accept: application/json`
//! - Places parameters in the query string or a JSON body by method
//! - Normalizes every answered request into an [`ApiResponse`]
//!
//! Unsuccessful statuses are NOT errors at this level; callers decide
//! whether to soft-fail (listings) or raise (single resources).

use super::response::ApiResponse;
use crate::auth::{AuthConfig, Authenticator};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{JsonObject, JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::debug;

/// Executes a single request against the API
///
/// Implemented by [`HttpClient`]; tests and embedders can supply their own
/// transport to the endpoint services.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `method` to `path` with `params`, returning the normalized outcome
    async fn request(&self, method: Method, path: &str, params: &JsonObject)
        -> Result<ApiResponse>;
}

/// HTTP client for the management API
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client authenticating with the configured API key
    pub fn new(config: ClientConfig) -> Result<Self> {
        let auth = AuthConfig::api_key(config.api_key.clone());
        Self::with_auth(config, auth)
    }

    /// Create a client with an explicit auth configuration
    pub fn with_auth(config: ClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::new(auth_config),
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &JsonObject,
    ) -> Result<ApiResponse> {
        let url = self.config.url(path);

        let mut req = self
            .client
            .request(method.into(), &url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        req = self.authenticator.apply(req)?;

        if !params.is_empty() {
            req = if method.sends_body() {
                req.json(params)
            } else {
                req.query(&query_pairs(params))
            };
        }

        let response = req.send().await?;
        let response = ApiResponse::from_reqwest(response).await?;

        debug!("{} {} -> {}", method, url, response.status());
        Ok(response)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .finish_non_exhaustive()
    }
}

/// Flatten parameters into query-string pairs
///
/// Nulls are dropped, booleans become `1`/`0`, and nested arrays or objects
/// use bracket notation (`terms[0]=month`, `filter[status]=active`).
pub fn query_pairs(params: &JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_pairs(pairs: &mut Vec<(String, String)>, key: String, value: &JsonValue) {
    match value {
        JsonValue::Null => {}
        JsonValue::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        JsonValue::Number(n) => pairs.push((key, n.to_string())),
        JsonValue::String(s) => pairs.push((key, s.clone())),
        JsonValue::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                push_pairs(pairs, format!("{key}[{i}]"), item);
            }
        }
        JsonValue::Object(map) => {
            for (k, item) in map {
                push_pairs(pairs, format!("{key}[{k}]"), item);
            }
        }
    }
}
