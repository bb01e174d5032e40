//! Licenses service

use super::{params, require_id, Endpoint};
use crate::error::Result;
use crate::pagination::CollectionRequest;
use crate::resource::{License, Resource};
use crate::types::{JsonObject, Method};
use serde_json::json;

/// Service for license operations
///
/// # Example
///
/// ```rust,ignore
/// let license = client.licenses().get(12).await?;
/// if license.is_expired() {
///     client.licenses().renew(12, Some("year"), Some(1)).await?;
/// }
/// ```
#[derive(Clone)]
pub struct LicensesService {
    endpoint: Endpoint,
}

impl LicensesService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// List licenses
    pub fn list(&self) -> CollectionRequest<License> {
        self.endpoint.list("licenses")
    }

    pub async fn get(&self, license_id: i64) -> Result<License> {
        self.endpoint
            .fetch(
                Method::GET,
                &format!("licenses/{license_id}"),
                &JsonObject::new(),
                "Failed to retrieve resource",
            )
            .await
    }

    /// Create a license from the given attributes
    pub async fn create(&self, license: &License) -> Result<License> {
        self.endpoint
            .fetch(
                Method::POST,
                "licenses",
                license.attributes().as_map(),
                "Failed to create resource",
            )
            .await
    }

    /// Save a license; it must have an id
    pub async fn update(&self, license: &License) -> Result<License> {
        let id = require_id(license, "license")?;
        self.endpoint
            .fetch(
                Method::POST,
                &format!("licenses/{id}"),
                license.attributes().as_map(),
                "Failed to update resource",
            )
            .await
    }

    /// Renew a subscription license
    ///
    /// Without a term and length the license's own subscription term is used.
    pub async fn renew(
        &self,
        license_id: i64,
        term: Option<&str>,
        length: Option<i64>,
    ) -> Result<License> {
        self.endpoint
            .fetch(
                Method::PUT,
                &format!("licenses/{license_id}/renewals"),
                &params([("term", json!(term)), ("length", json!(length))]),
                "Failed to process renewal",
            )
            .await
    }

    /// Extend update access by a term
    pub async fn renew_update_access_term(
        &self,
        license_id: i64,
        term: &str,
        length: i64,
    ) -> Result<License> {
        self.endpoint
            .fetch(
                Method::PUT,
                &format!("licenses/{license_id}/update_access/term/renewals"),
                &params([("term", json!(term)), ("length", json!(length))]),
                "Failed to process update access renewal",
            )
            .await
    }

    /// Extend update access up to a version
    pub async fn renew_update_access_version(
        &self,
        license_id: i64,
        version: &str,
    ) -> Result<License> {
        self.endpoint
            .fetch(
                Method::PUT,
                &format!("licenses/{license_id}/update_access/version/renewals"),
                &params([("version", json!(version))]),
                "Failed to process update access renewal",
            )
            .await
    }

    pub async fn delete(&self, license: &License) -> Result<()> {
        let id = require_id(license, "license")?;
        self.endpoint
            .call(
                Method::DELETE,
                &format!("licenses/{id}"),
                &JsonObject::new(),
                "Failed to delete resource",
            )
            .await
            .map(|_| ())
    }

    /// Transfer a license to another user, or detach it with `None`
    pub async fn transfer(
        &self,
        license: &License,
        recipient_user_id: Option<i64>,
    ) -> Result<License> {
        let id = require_id(license, "license")?;
        self.endpoint
            .fetch(
                Method::PUT,
                &format!("licenses/{id}/transfers"),
                &params([("user_id", json!(recipient_user_id))]),
                "Failed to update resource",
            )
            .await
    }
}
