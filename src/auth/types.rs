//! Auth configuration types

use std::fmt;

/// Header carrying the API key
pub const DEFAULT_HEADER: &str = "Authorization";

/// Scheme prefix placed before the API key
pub const DEFAULT_PREFIX: &str = "APIKEY ";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API Key sent in a request header
    ApiKey {
        /// Header name (defaults to `Authorization`)
        header_name: Option<String>,
        /// Prefix to add before the value (defaults to `APIKEY `)
        prefix: Option<String>,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// API key auth with the LicenseJet header and scheme
    pub fn api_key(value: impl Into<String>) -> Self {
        Self::ApiKey {
            header_name: None,
            prefix: None,
            value: value.into(),
        }
    }

    /// The header name and value this config attaches, if any
    pub fn header(&self) -> Option<(&str, String)> {
        match self {
            AuthConfig::None => None,
            AuthConfig::ApiKey {
                header_name,
                prefix,
                value,
            } => Some((
                header_name.as_deref().unwrap_or(DEFAULT_HEADER),
                format!("{}{}", prefix.as_deref().unwrap_or(DEFAULT_PREFIX), value),
            )),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::ApiKey {
                header_name,
                prefix,
                ..
            } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("prefix", prefix)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}
