//! Common types used throughout the LicenseJet client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
}

impl Method {
    /// Whether parameters travel as a JSON body rather than a query string
    pub fn sends_body(self) -> bool {
        matches!(self, Method::POST | Method::PUT)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Page Size
// ============================================================================

/// Number of resources requested per listing call
///
/// On the wire this is the `limit` query parameter, where `-1` asks the API
/// for every matching resource in a single response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// Every matching resource in one response
    #[default]
    All,
    /// At most this many resources
    Limited(NonZeroU32),
}

impl PageSize {
    /// Build a bounded page size, rejecting zero
    pub fn limited(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(Self::Limited)
    }

    /// The `limit` parameter value sent to the API
    pub fn as_param(self) -> i64 {
        match self {
            PageSize::All => -1,
            PageSize::Limited(n) => i64::from(n.get()),
        }
    }

    /// Interpret a raw `limit` value; anything below 1 means all
    pub fn from_param(limit: i64) -> Self {
        u32::try_from(limit)
            .ok()
            .and_then(Self::limited)
            .unwrap_or(PageSize::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_body_placement() {
        assert!(Method::POST.sends_body());
        assert!(Method::PUT.sends_body());
        assert!(!Method::GET.sends_body());
        assert!(!Method::DELETE.sends_body());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::DELETE.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(Method::PUT), reqwest::Method::PUT);
    }

    #[test]
    fn test_page_size_param() {
        assert_eq!(PageSize::All.as_param(), -1);
        assert_eq!(PageSize::limited(25).unwrap().as_param(), 25);
        assert!(PageSize::limited(0).is_none());
    }

    #[test]
    fn test_page_size_from_param() {
        assert_eq!(PageSize::from_param(-1), PageSize::All);
        assert_eq!(PageSize::from_param(0), PageSize::All);
        assert_eq!(PageSize::from_param(10), PageSize::limited(10).unwrap());
    }
}
