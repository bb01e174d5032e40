//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::AuthConfig;
use crate::error::{Error, Result};
use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match self.config.header() {
            None => Ok(req),
            Some((name, value)) => {
                let mut value = HeaderValue::from_str(&value)
                    .map_err(|_| Error::invalid_input("API key contains invalid header characters"))?;
                value.set_sensitive(true);
                Ok(req.header(name, value))
            }
        }
    }

    /// Get the auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
