use std::fmt;
use std::time::Duration;

use segment_config_domain::constants::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`ApiClient`](crate::ApiClient)
///
/// `access_token` is accepted when deserializing but never written back out.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, skip_serializing)]
    pub access_token: String,
    /// Workspace slug, e.g. `myworkspace`
    pub workspace: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Production endpoint with the default timeout
    pub fn new(access_token: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            workspace: workspace.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the settings a client cannot work without.
    ///
    /// # Errors
    /// Returns `ApiError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.access_token.trim().is_empty() {
            return Err(ApiError::Config("access token is required".to_string()));
        }
        self.validate_endpoint()
    }

    /// Everything except the token, for clients given their own token provider
    pub(crate) fn validate_endpoint(&self) -> Result<(), ApiError> {
        if self.workspace.trim().is_empty() {
            return Err(ApiError::Config("workspace is required".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base url must be an http(s) url: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::Config("timeout must be at least one second".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("workspace", &self.workspace)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_production_defaults() {
        let config = ClientConfig::new("token", "myworkspace");

        assert_eq!(config.base_url, "https://platform.segmentapis.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(matches!(
            ClientConfig::new("", "ws").validate(),
            Err(ApiError::Config(msg)) if msg.contains("access token")
        ));
        assert!(matches!(
            ClientConfig::new("token", " ").validate(),
            Err(ApiError::Config(msg)) if msg.contains("workspace")
        ));
        assert!(ClientConfig::new("token", "ws").with_base_url("ftp://x").validate().is_err());
        assert!(ClientConfig::new("token", "ws").with_timeout_secs(0).validate().is_err());
    }

    #[test]
    fn test_token_is_never_serialized_or_printed() {
        let config = ClientConfig::new("secret-token", "ws");

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(!format!("{config:?}").contains("secret-token"));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"workspace": "ws", "access_token": "t"}"#).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.access_token, "t");
    }
}
