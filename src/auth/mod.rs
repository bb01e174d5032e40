//! Authentication module
//!
//! Every request to the management API carries the caller's API key in the
//! `Authorization` header, formatted as `APIKEY <key>`.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, DEFAULT_HEADER, DEFAULT_PREFIX};
