//! Normalized API responses

use crate::error::{Error, Result};
use crate::types::{json_kind, JsonObject, JsonValue};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Body of an API response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body decoded from `application/json`
    Json(JsonValue),
    /// Body kept as text (other content types or undecodable JSON)
    Text(String),
}

/// Outcome of a single request against the API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    payload: Payload,
    reason: Option<String>,
}

impl ApiResponse {
    /// Create a response from its parts
    pub fn new(status: u16, payload: Payload) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(String::from);
        Self {
            status,
            payload,
            reason,
        }
    }

    /// Create a response with a JSON body
    pub fn json(status: u16, body: JsonValue) -> Self {
        Self::new(status, Payload::Json(body))
    }

    /// Read a `reqwest` response into its normalized form
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let text = response.text().await?;
        let payload = if is_json {
            serde_json::from_str(&text).map_or(Payload::Text(text), Payload::Json)
        } else {
            Payload::Text(text)
        };

        Ok(Self::new(status, payload))
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase of the status code
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Response body
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Decoded JSON body, if the response carried one
    pub fn json_body(&self) -> Option<&JsonValue> {
        match &self.payload {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Whether the request succeeded (200 OK or 304 Not Modified)
    pub fn is_successful(&self) -> bool {
        matches!(self.status, 200 | 304)
    }

    /// Human-readable error text, `None` for successful responses
    ///
    /// An `error` field in a JSON body takes precedence over the reason phrase.
    pub fn error_message(&self) -> Option<String> {
        if self.is_successful() {
            return None;
        }

        let from_body = self.json_body().and_then(|body| body.get("error")).map(|e| {
            e.as_str()
                .map_or_else(|| e.to_string(), String::from)
        });

        Some(
            from_body
                .or_else(|| self.reason.clone())
                .unwrap_or_else(|| format!("HTTP {}", self.status)),
        )
    }

    /// Convert an unsuccessful response into a `Remote` error
    pub fn error_for_status(self) -> Result<Self> {
        match self.error_message() {
            None => Ok(self),
            Some(message) => Err(Error::remote(self.status, message)),
        }
    }

    /// The body as an attribute mapping, for single-resource responses
    pub fn into_object(self) -> Result<JsonObject> {
        match self.payload {
            Payload::Json(JsonValue::Object(map)) => Ok(map),
            Payload::Json(other) => Err(Error::decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Payload::Text(_) => Err(Error::decode("expected a JSON body")),
        }
    }
}
