//! Client configuration
//!
//! A [`ClientConfig`] identifies the caller on the API server: where the
//! management API lives, which API key to present and how long to wait for
//! each request. It can be built in code, read from the environment, or
//! loaded from a YAML file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "LICENSEJET_API_URL";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "LICENSEJET_API_KEY";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "LICENSEJET_TIMEOUT_SECS";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the LicenseJet client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the management API (e.g. `https://example.com/management/v1`)
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with the default timeout and user agent
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("licensejet-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read the configuration from `LICENSEJET_*` environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_API_URL).map_err(|_| Error::missing_field(ENV_API_URL))?;
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| Error::missing_field(ENV_API_KEY))?;

        let mut config = Self::new(base_url, api_key);
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse the configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("Timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Build the URL of an endpoint path on the API server
    ///
    /// Duplicate slashes inside `path` are collapsed.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = normalize_path(path);
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Collapse repeated `/` characters
fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' && prev_slash {
            continue;
        }
        prev_slash = c == '/';
        out.push(c);
    }
    out
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = self.base_url.ok_or_else(|| Error::missing_field("base_url"))?;
        let api_key = self.api_key.ok_or_else(|| Error::missing_field("api_key"))?;

        let mut config = ClientConfig::new(base_url, api_key);
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }

        config.validate()?;
        Ok(config)
    }
}

/// On-disk representation of the client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Base URL of the management API
    pub api_url: String,

    /// API key
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional user agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ConfigFile {
    /// Convert into a runtime client config
    pub fn into_config(self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api_url, self.api_key);
        config.timeout = Duration::from_secs(self.timeout_secs);
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }
        config
    }
}
