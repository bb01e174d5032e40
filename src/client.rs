//! Entry point for the LicenseJet management API
//!
//! ```rust,ignore
//! use licensejet::{ClientConfig, LicenseJetClient};
//!
//! let client = LicenseJetClient::new(ClientConfig::from_env()?)?;
//! let projects = client.projects().list().get(&Default::default()).await?;
//! ```

use crate::api::{
    Endpoint, LicenseKeysService, LicensesService, LicensingPlansService,
    ProjectOptionsService, ProjectsService, RootService, TermsService, UsersService,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use std::fmt;
use std::sync::Arc;

/// Client for the management API
///
/// Cheap to clone; clones share one HTTP connection pool.
#[derive(Clone)]
pub struct LicenseJetClient {
    endpoint: Endpoint,
    base_url: Option<String>,
}

impl LicenseJetClient {
    /// Create a client over HTTP; the configuration is validated first
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url.clone();
        let transport = HttpClient::new(config)?;
        Ok(Self {
            endpoint: Endpoint::new(Arc::new(transport)),
            base_url: Some(base_url),
        })
    }

    /// Create a client from an API URL and key with default settings
    pub fn connect(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_url, api_key))
    }

    /// Create a client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport),
            base_url: None,
        }
    }

    pub fn licenses(&self) -> LicensesService {
        LicensesService::new(self.endpoint.clone())
    }

    pub fn license_keys(&self) -> LicenseKeysService {
        LicenseKeysService::new(self.endpoint.clone())
    }

    pub fn licensing_plans(&self) -> LicensingPlansService {
        LicensingPlansService::new(self.endpoint.clone())
    }

    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.endpoint.clone())
    }

    pub fn project_options(&self) -> ProjectOptionsService {
        ProjectOptionsService::new(self.endpoint.clone())
    }

    pub fn users(&self) -> UsersService {
        UsersService::new(self.endpoint.clone())
    }

    pub fn terms(&self) -> TermsService {
        TermsService::new(self.endpoint.clone())
    }

    /// The API root (permissions)
    pub fn root(&self) -> RootService {
        RootService::new(self.endpoint.clone())
    }
}

impl fmt::Debug for LicenseJetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseJetClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
