//! API root service

use super::Endpoint;
use crate::error::Result;
use crate::types::{JsonObject, JsonValue, Method};
use tracing::debug;

/// Service for the API root document
#[derive(Clone)]
pub struct RootService {
    endpoint: Endpoint,
}

impl RootService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Permissions granted to the API key
    ///
    /// `None` when the root document carries no `permissions` list or map.
    pub async fn permissions(&self) -> Result<Option<JsonValue>> {
        let response = self
            .endpoint
            .call(
                Method::GET,
                "/",
                &JsonObject::new(),
                "Failed to retrieve permissions",
            )
            .await?;

        let permissions = response
            .json_body()
            .and_then(|body| body.get("permissions"))
            .filter(|value| value.is_array() || value.is_object())
            .cloned();

        if permissions.is_none() {
            debug!("API root returned no permissions");
        }
        Ok(permissions)
    }
}
