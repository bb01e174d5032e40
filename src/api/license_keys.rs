//! License keys service

use super::Endpoint;
use crate::error::{Error, Result};
use crate::pagination::CollectionRequest;
use crate::resource::{LicenseKey, Resource};
use crate::types::{JsonObject, Method};

/// Service for license key operations
#[derive(Clone)]
pub struct LicenseKeysService {
    endpoint: Endpoint,
}

impl LicenseKeysService {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn list(&self) -> CollectionRequest<LicenseKey> {
        self.endpoint.list("license_keys")
    }

    pub async fn get(&self, license_key_id: i64) -> Result<LicenseKey> {
        self.endpoint
            .fetch(
                Method::GET,
                &format!("license_keys/{license_key_id}"),
                &JsonObject::new(),
                "Failed to retrieve resource",
            )
            .await
    }

    /// Activate a license key (`license_id` and `host` attributes)
    pub async fn create(&self, license_key: &LicenseKey) -> Result<LicenseKey> {
        self.endpoint
            .fetch(
                Method::POST,
                "license_keys",
                license_key.attributes().as_map(),
                "Failed to create resource",
            )
            .await
    }

    /// Deactivate a license key; keys are addressed by their key string
    pub async fn delete(&self, license_key: &LicenseKey) -> Result<()> {
        let key = license_key
            .key()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::invalid_input("license key has no key"))?;

        self.endpoint
            .call(
                Method::DELETE,
                &format!("license_keys/{key}"),
                &JsonObject::new(),
                "Failed to delete resource",
            )
            .await
            .map(|_| ())
    }
}
