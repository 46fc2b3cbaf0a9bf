//! API-specific error types
//!
//! Every failure surfaced by the client is an [`ApiError`]. Status-derived
//! variants carry the exact messages the Config API contract defines, so a
//! caller matching on `to_string()` sees stable text.

use segment_config_domain::DomainError;
use thiserror::Error;

/// Coarse classification of API errors, used for log fields and caller-side
/// retry decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// The addressed resource does not exist (404)
    NotFound,
    /// Rate limiting errors (429)
    RateLimit,
    /// The API rejected the request (400, 500 and unmapped statuses)
    Server,
    /// A successful response whose body could not be used
    Response,
    /// Network/connection errors before any response arrived
    Network,
    /// Problems on the caller's side: bad configuration or input
    Client,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 or 403; the message names which one
    #[error("{0}")]
    Auth(String),

    #[error("the requested uri does not exist")]
    NotFound,

    #[error("too many requests to API")]
    RateLimit,

    /// Structured error body returned with a 400 or 500 status
    #[error("Segment Error {code}: {message}")]
    Api { code: i64, message: String },

    /// 400 or 500 whose body is not a structured error
    #[error("the request is invalid")]
    InvalidRequest,

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("bad response code: {code}")]
    BadResponse { code: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied argument that cannot address or describe a resource
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::NotFound => ApiErrorCategory::NotFound,
            Self::RateLimit => ApiErrorCategory::RateLimit,
            Self::Api { .. } | Self::InvalidRequest | Self::BadResponse { .. } => {
                ApiErrorCategory::Server
            }
            Self::Decode { .. } | Self::UnexpectedBody(_) => ApiErrorCategory::Response,
            Self::Transport(_) => ApiErrorCategory::Network,
            Self::Encode(_) | Self::Config(_) | Self::InvalidInput(_) | Self::Domain(_) => {
                ApiErrorCategory::Client
            }
        }
    }

    /// Whether repeating the same call could reasonably succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::RateLimit | ApiErrorCategory::Network)
    }

    /// Stable snake_case name of the variant, for structured log fields
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::NotFound => "not_found",
            Self::RateLimit => "rate_limit",
            Self::Api { .. } => "api",
            Self::InvalidRequest => "invalid_request",
            Self::Decode { .. } => "decode",
            Self::UnexpectedBody(_) => "unexpected_body",
            Self::BadResponse { .. } => "bad_response",
            Self::Transport(_) => "transport",
            Self::Encode(_) => "encode",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Domain(_) => "domain",
        }
    }

    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode { context: context.into(), source }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages_are_exact() {
        assert_eq!(ApiError::Auth("invalid access token".into()).to_string(), "invalid access token");
        assert_eq!(ApiError::NotFound.to_string(), "the requested uri does not exist");
        assert_eq!(ApiError::RateLimit.to_string(), "too many requests to API");
        assert_eq!(ApiError::InvalidRequest.to_string(), "the request is invalid");
        assert_eq!(
            ApiError::Api { code: 5, message: "foo".into() }.to_string(),
            "Segment Error 5: foo"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ApiError::Auth("test".to_string()).category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(ApiError::NotFound.category(), ApiErrorCategory::NotFound);
        assert_eq!(ApiError::RateLimit.category(), ApiErrorCategory::RateLimit);
        assert_eq!(ApiError::BadResponse { code: 502 }.category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::Transport("reset".into()).category(), ApiErrorCategory::Network);
        assert_eq!(
            ApiError::UnexpectedBody("nope".into()).category(),
            ApiErrorCategory::Response
        );
        assert_eq!(
            ApiError::from(DomainError::InvalidSamplePercent(2.0)).category(),
            ApiErrorCategory::Client
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(ApiError::RateLimit.is_retryable());
        assert!(ApiError::Transport("connection refused".into()).is_retryable());
        assert!(!ApiError::Auth("invalid access token".into()).is_retryable());
        assert!(!ApiError::NotFound.is_retryable());
        assert!(!ApiError::InvalidRequest.is_retryable());
        assert!(!ApiError::Config("missing token".into()).is_retryable());
        assert!(!ApiError::InvalidInput("no id".into()).is_retryable());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = ApiError::decode("source response", source);

        assert_eq!(err.label(), "decode");
        assert!(err.to_string().starts_with("failed to decode source response"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: ApiError = DomainError::UnknownActionKind("rename".into()).into();
        assert_eq!(err.to_string(), DomainError::UnknownActionKind("rename".into()).to_string());
        assert_eq!(err.label(), "domain");
    }
}
