//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::Path;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client as HttpClient;
#[allow(unused_imports)]
pub use securelog_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load a JSON fixture file from the `fixtures/` directory.
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// HTTP client configured like the one `SecurelogClient` builds.
#[allow(dead_code)]
pub fn http_client() -> HttpClient {
    HttpClient::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client")
}
