//! HTTP transport
//!
//! [`HttpTransport`] is the seam between the request executor and the
//! network; [`HttpClient`] is the reqwest implementation used by default.

pub mod client;
pub mod transport;

pub use client::{HttpClient, HttpClientBuilder};
pub use transport::{HttpTransport, TransportRequest, TransportResponse};
