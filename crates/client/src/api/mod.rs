//! Config API access
//!
//! # Architecture
//!
//! - [`ApiClient`] executes one authenticated request per call and maps the
//!   response status onto [`ApiError`]
//! - Tokens come from an [`AccessTokenProvider`]; [`StaticToken`] covers the
//!   common single-token case
//! - [`paths`] builds the hierarchical resource paths
//! - No retries and no caching: every call is a fresh round trip

pub mod auth;
pub mod client;
pub mod errors;
pub mod paths;

pub use auth::{AccessTokenProvider, StaticToken};
pub use client::{decode_body, ApiClient, ApiClientBuilder};
pub use errors::{ApiError, ApiErrorCategory};
