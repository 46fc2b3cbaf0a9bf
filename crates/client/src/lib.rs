//! # Segment Config Client
//!
//! Async client for the Segment Config API (`v1beta`).
//!
//! This crate contains:
//! - The request executor with bearer authentication and status mapping
//! - Resource operations for workspaces, sources, destinations, destination
//!   filters and tracking plans
//! - The HTTP transport seam and its reqwest implementation
//! - Configuration loading from the environment or JSON/TOML files
//!
//! ## Architecture
//! - Wire types live in `segment-config-domain`, re-exported as [`domain`]
//! - All I/O goes through [`http::HttpTransport`]
//! - Logging uses `tracing`; the crate never installs a subscriber
//!
//! ```no_run
//! # async fn run() -> Result<(), segment_config_client::ApiError> {
//! use segment_config_client::ApiClient;
//!
//! let client = ApiClient::new("access-token", "myworkspace")?;
//! for filter in client.list_destination_filters("js", "google-analytics").await? {
//!     println!("{}: {} actions", filter.title, filter.actions.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiClient, ApiClientBuilder, ApiError, ApiErrorCategory, StaticToken,
};
pub use config::ClientConfig;
pub use reqwest::Method;
pub use segment_config_domain as domain;
