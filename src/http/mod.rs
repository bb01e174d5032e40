//! HTTP module
//!
//! The request executor of the client: issues one request against the
//! management API and normalizes the outcome into an [`ApiResponse`].
//!
//! # Features
//!
//! - **API key authentication** on every request
//! - **Parameter placement**: query string for GET/DELETE, JSON body for POST/PUT
//! - **Response normalization**: status, decoded JSON or raw body, error text
//! - **Pluggable transport** through the [`Transport`] trait

mod client;
mod response;

pub use client::{query_pairs, HttpClient, Transport};
pub use response::{ApiResponse, Payload};
