//! Transport seam
//!
//! The executor only needs "send this request, give me status, headers and
//! body". Anything that can do that implements [`HttpTransport`]; tests and
//! embedders can substitute their own implementation.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::api::ApiError;

/// A fully resolved outgoing request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// Raw response, body fully read
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs a single HTTP exchange
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` once and return whatever the server answered.
    ///
    /// Non-success statuses are not errors at this layer; only failures that
    /// prevent a response (connect, TLS, timeout, body read) are.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError>;
}
