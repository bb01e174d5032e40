//! One-call helpers for the most common lookups
//!
//! Each call builds a throwaway client with default settings.

use crate::client::LicenseJetClient;
use crate::error::Result;
use crate::pagination::Collection;
use crate::resource::Project;
use crate::types::{JsonObject, JsonValue};

/// Every project visible to `api_key`
///
/// Like any listing, an unsuccessful response gives an empty collection.
pub async fn get_projects(api_url: &str, api_key: &str) -> Result<Collection<Project>> {
    LicenseJetClient::connect(api_url, api_key)?
        .projects()
        .list()
        .get(&JsonObject::new())
        .await
}

/// Permissions granted to `api_key`
pub async fn get_permissions(api_url: &str, api_key: &str) -> Result<Option<JsonValue>> {
    LicenseJetClient::connect(api_url, api_key)?
        .root()
        .permissions()
        .await
}
