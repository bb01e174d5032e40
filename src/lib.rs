// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # LicenseJet
//!
//! Rust client for the LicenseJet license management API.
//!
//! ## Features
//!
//! - **Typed Resources**: Licenses, license keys, licensing plans, projects,
//!   users and terms over a dynamic attribute mapping
//! - **Lazy Pagination**: Walk large listings page by page, fetching only
//!   when the cursor needs the next page
//! - **Configuration**: Builder, environment variables or a YAML file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use licensejet::{ClientConfig, JsonObject, LicenseJetClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = LicenseJetClient::new(ClientConfig::from_env()?)?;
//!
//!     // One license
//!     let license = client.licenses().get(12).await?;
//!
//!     // Every license, 50 per request
//!     let mut licenses = client.licenses().list().iter(50, JsonObject::new())?;
//!     while let Some(license) = licenses.next_item().await? {
//!         println!("{:?} {:?}", license.id(), license.status());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       LicenseJetClient                          │
//! │  licenses()  license_keys()  licensing_plans()  projects() ...  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────┬──────────────────────────┐
//! │   Resources   │      Pagination      │         HTTP             │
//! ├───────────────┼──────────────────────┼──────────────────────────┤
//! │ Attributes    │ CollectionRequest    │ Transport / HttpClient   │
//! │ License ...   │ PagedSequence        │ ApiResponse              │
//! │ Term          │ Collection           │ API key auth             │
//! └───────────────┴──────────────────────┴──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// API key authentication
pub mod auth;

/// HTTP transport and response normalization
pub mod http;

/// Client configuration
pub mod config;

/// Typed resources
pub mod resource;

/// Listing requests, collections and paged iteration
pub mod pagination;

/// Endpoint services
pub mod api;

/// Client entry point
pub mod client;

/// One-call helpers
pub mod shortcuts;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::LicenseJetClient;
pub use config::ClientConfig;
pub use error::{Error, Result, ResultExt};
pub use pagination::{Collection, CollectionRequest, PagedSequence};
pub use resource::{
    Attributes, License, LicenseKey, LicensingPlan, Project, ProjectOption, Resource, Term, User,
};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
