//! Access token providers
//!
//! The Config API authenticates with a workspace access token sent as a
//! bearer credential. The token is resolved per request through
//! [`AccessTokenProvider`], so callers can plug in rotation or a secret store.

use std::fmt;

use async_trait::async_trait;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the token to send with the next request
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// A fixed access token supplied at construction
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

// Keeps the credential out of `{:?}` output and therefore out of logs.
impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticToken").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::Config("access token is empty".to_string()));
        }
        Ok(self.token.clone())
    }
}
