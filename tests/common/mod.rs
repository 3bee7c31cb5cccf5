//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use travelbrief::{GeminiClient, RetryPolicy};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a Gemini response fixture.
pub fn response_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("responses").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// API key the mock server expects.
pub const TEST_API_KEY: &str = "test-key";

/// Create a Gemini client pointing to a mock server.
pub fn mock_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(TEST_API_KEY, Duration::from_secs(5))
        .expect("Failed to build client")
        .with_base_url(server.uri())
}

/// Path of the generateContent endpoint for `model`.
pub fn generate_path(model: &str) -> String {
    format!("/models/{}:generateContent", model)
}

/// Mount a fixture response for `model`.
pub async fn mount_fixture(server: &MockServer, model: &str, status: u16, fixture: &str) {
    Mock::given(method("POST"))
        .and(path(generate_path(model)))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_raw(read_fixture(response_fixture(fixture)), "application/json"),
        )
        .mount(server)
        .await;
}

/// Retry policy with short delays, trying `models` in order.
pub fn fast_policy(models: &[&str]) -> RetryPolicy {
    RetryPolicy {
        models: models.iter().map(|m| m.to_string()).collect(),
        attempts_per_model: 2,
        retry_delay: Duration::from_millis(10),
        quota_wait: Duration::from_millis(50),
        retry_unparseable: false,
    }
}
