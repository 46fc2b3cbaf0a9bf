//! Configuration loader
//!
//! Builds a [`ClientConfig`] from environment variables or from a file.
//! The client never calls these itself; applications opt in.
//!
//! ## Environment Variables
//! - `SEGMENT_ACCESS_TOKEN`: workspace access token (required)
//! - `SEGMENT_WORKSPACE`: workspace slug (required)
//! - `SEGMENT_BASE_URL`: API origin, defaults to the production endpoint
//! - `SEGMENT_TIMEOUT_SECS`: request timeout in seconds, defaults to 30
//!
//! ## Files
//! JSON or TOML, detected by extension. A file may omit `access_token`, in
//! which case `SEGMENT_ACCESS_TOKEN` supplies it.

use std::path::Path;

use super::settings::ClientConfig;
use crate::api::ApiError;

pub const ACCESS_TOKEN_VAR: &str = "SEGMENT_ACCESS_TOKEN";
pub const WORKSPACE_VAR: &str = "SEGMENT_WORKSPACE";
pub const BASE_URL_VAR: &str = "SEGMENT_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "SEGMENT_TIMEOUT_SECS";

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ApiError::Config` if a required variable is missing or a value
/// fails to parse or validate.
pub fn load_from_env() -> Result<ClientConfig, ApiError> {
    let mut config = ClientConfig::new(env_var(ACCESS_TOKEN_VAR)?, env_var(WORKSPACE_VAR)?);

    if let Some(base_url) = optional_env_var(BASE_URL_VAR) {
        config.base_url = base_url;
    }
    if let Some(timeout) = optional_env_var(TIMEOUT_SECS_VAR) {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("Invalid {TIMEOUT_SECS_VAR}: {e}")))?;
    }

    config.validate()?;
    tracing::debug!(workspace = %config.workspace, "Configuration loaded from environment");
    Ok(config)
}

/// Load configuration from a JSON or TOML file
///
/// # Errors
/// Returns `ApiError::Config` if the file is missing, its extension is not
/// `json` or `toml`, it fails to parse, or the result fails validation.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ClientConfig, ApiError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ApiError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ApiError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, path)?;
    if config.access_token.is_empty() {
        if let Some(token) = optional_env_var(ACCESS_TOKEN_VAR) {
            config.access_token = token;
        }
    }

    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig, ApiError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(ApiError::Config(format!("Unsupported config format: {other:?}"))),
    }
}

fn env_var(key: &str) -> Result<String, ApiError> {
    optional_env_var(key)
        .ok_or_else(|| ApiError::Config(format!("Missing required environment variable: {key}")))
}

/// Unset and empty are treated the same
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
