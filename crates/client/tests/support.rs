//! Shared fixtures for client integration tests

#![allow(dead_code)]

use segment_config_client::{ApiClient, ClientConfig};
use wiremock::MockServer;

pub const TEST_WORKSPACE: &str = "test-workspace";
pub const TEST_TOKEN: &str = "test-token";

/// Start a mock Config API and a client pointed at it
pub async fn setup() -> (MockServer, ApiClient) {
    init_tracing();

    let server = MockServer::start().await;
    let client = ApiClient::builder()
        .config(ClientConfig::new(TEST_TOKEN, TEST_WORKSPACE).with_base_url(server.uri()))
        .build()
        .expect("client should build against the mock server");

    (server, client)
}

/// Versioned request path for a resource path, as seen by the server
pub fn api_path(resource: &str) -> String {
    format!("/v1beta/{resource}")
}

/// Route client logs to the test output; harmless when called repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}
