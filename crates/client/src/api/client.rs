//! Request executor
//!
//! [`ApiClient`] turns a method, a relative path and an optional JSON body
//! into exactly one authenticated HTTP exchange, then maps the status code
//! onto [`ApiError`]. Resource methods in [`crate::resources`] are thin
//! wrappers over the typed helpers defined here.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use segment_config_domain::constants::{API_VERSION, MEDIA_TYPE};
use segment_config_domain::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::{AccessTokenProvider, StaticToken};
use super::errors::ApiError;
use crate::config::ClientConfig;
use crate::http::{HttpClient, HttpTransport, TransportRequest};

/// Config API client bound to one workspace
///
/// Cheap to clone; clones share the transport and token provider.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
    workspace: String,
}

impl ApiClient {
    /// Client for `workspace` on the production endpoint
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the token or workspace is empty or the
    /// HTTP client cannot be created
    pub fn new(
        access_token: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::builder().config(ClientConfig::new(access_token, workspace)).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Workspace slug every resource path is built under
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// API origin without a trailing `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the versioned API root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_VERSION, path.trim_matches('/'))
    }

    /// Perform one request and return the raw body of a 200/201 response
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] mapped from a non-success status, or a
    /// transport/encoding error if no response was obtained
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let body = body
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let token = self.auth.access_token().await?;
        let request =
            TransportRequest { method, url: self.url(path), headers: Self::headers(&token)?, body };

        let response = self.transport.send(request).await.map_err(|err| {
            warn!(error = err.label(), "request failed before a response");
            err
        })?;

        let status = response.status;
        match Self::map_status(status, &response.body) {
            Ok(()) => {
                debug!(status = status.as_u16(), bytes = response.body.len(), "request succeeded");
                Ok(response.body)
            }
            Err(err) => {
                warn!(status = status.as_u16(), error = err.label(), "request rejected");
                Err(err)
            }
        }
    }

    /// GET `path` and decode the body as `R`
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let bytes = self.execute(Method::GET, path, None).await?;
        decode_body(&bytes)
    }

    /// POST `body` to `path` and decode the response as `R`
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    /// PATCH `body` to `path` and decode the response as `R`
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    /// PUT `body` to `path` and decode the response as `R`
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body).await
    }

    /// DELETE `path`, returning the raw body for callers that inspect it
    pub async fn delete(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let bytes = self.execute(method, path, Some(value)).await?;
        decode_body(&bytes)
    }

    fn headers(token: &str) -> Result<HeaderMap, ApiError> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ApiError::Config("access token contains characters not allowed in a header".into())
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        Ok(headers)
    }

    fn map_status(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ApiError::Auth("invalid access token".to_string())),
            StatusCode::FORBIDDEN => {
                Err(ApiError::Auth("unauthorized access to endpoint".to_string()))
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimit),
            StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR => {
                Err(Self::error_from_body(body))
            }
            other => Err(ApiError::BadResponse { code: other.as_u16() }),
        }
    }

    fn error_from_body(body: &[u8]) -> ApiError {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => ApiError::Api { code: parsed.code, message: parsed.message },
            Err(_) => ApiError::InvalidRequest,
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("workspace", &self.workspace)
            .finish_non_exhaustive()
    }
}

/// Decode a successful response body
///
/// # Errors
///
/// Returns `ApiError::Decode` naming the target type
pub fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::decode(std::any::type_name::<R>(), e))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ApiClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the token provider, replacing the configured access token
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the transport, replacing the default reqwest client
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if no configuration was given, it fails
    /// validation, or the default transport cannot be created
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config =
            self.config.ok_or_else(|| ApiError::Config("client configuration not set".into()))?;

        let auth: Arc<dyn AccessTokenProvider> = match self.auth {
            Some(auth) => {
                config.validate_endpoint()?;
                auth
            }
            None => {
                config.validate()?;
                Arc::new(StaticToken::new(config.access_token.clone()))
            }
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::builder().timeout(config.timeout()).build()?),
        };

        Ok(ApiClient {
            transport,
            auth,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            workspace: config.workspace,
        })
    }
}
