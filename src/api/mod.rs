//! Endpoint services
//!
//! One service per API resource, obtained from
//! [`LicenseJetClient`](crate::LicenseJetClient):
//!
//! - [`LicensesService`] - `licenses`
//! - [`LicenseKeysService`] - `license_keys`
//! - [`LicensingPlansService`] - `licensing_plans`
//! - [`ProjectsService`] and [`ProjectOptionsService`]
//! - [`UsersService`] - `users`
//! - [`TermsService`] - `terms`
//! - [`RootService`] - the API root
//!
//! Listing operations return a [`CollectionRequest`] and never fail on an
//! unsuccessful status. Single-resource operations fail with
//! [`Error::Remote`](crate::Error::Remote) wrapped in a message naming the
//! operation.

mod license_keys;
mod licenses;
mod licensing_plans;
mod projects;
mod root;
mod terms;
mod users;

pub use license_keys::LicenseKeysService;
pub use licenses::LicensesService;
pub use licensing_plans::LicensingPlansService;
pub use projects::{ProjectOptionsService, ProjectsService};
pub use root::RootService;
pub use terms::TermsService;
pub use users::UsersService;

use crate::error::{Error, Result, ResultExt};
use crate::http::{ApiResponse, Transport};
use crate::pagination::CollectionRequest;
use crate::resource::{Attributes, Resource};
use crate::types::{JsonObject, JsonValue, Method};
use std::sync::Arc;

// ============================================================================
// Shared Request Handling
// ============================================================================

/// Transport handle shared by every service
#[derive(Clone)]
pub(crate) struct Endpoint {
    transport: Arc<dyn Transport>,
}

impl Endpoint {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Listing request for `path` decoding elements into `R`
    pub(crate) fn list<R: Resource + 'static>(&self, path: &str) -> CollectionRequest<R> {
        CollectionRequest::for_resource(Arc::clone(&self.transport), path)
    }

    /// Send a request that must succeed; failures are wrapped in `failure`
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        params: &JsonObject,
        failure: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .request(method, path, params)
            .await
            .context("Request failed")
            .and_then(ApiResponse::error_for_status)
            .context(failure)
    }

    /// Send a request that must succeed and decode the resource it returns
    pub(crate) async fn fetch<R: Resource>(
        &self,
        method: Method,
        path: &str,
        params: &JsonObject,
        failure: &str,
    ) -> Result<R> {
        let response = self.call(method, path, params, failure).await?;
        Attributes::from_response(response)
            .map(R::from_attributes)
            .context(failure)
    }
}

/// Identifier of a resource that must already exist remotely
pub(crate) fn require_id<R: Resource>(resource: &R, kind: &str) -> Result<i64> {
    resource
        .id()
        .ok_or_else(|| Error::invalid_input(format!("{kind} has no id")))
}

/// Parameters object from key/value pairs
pub(crate) fn params<const N: usize>(pairs: [(&str, JsonValue); N]) -> JsonObject {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests;
