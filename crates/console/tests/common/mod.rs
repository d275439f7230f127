//! Shared test utilities for securelog-console integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the list endpoints on a mock server.
//!
//! Invariants / Assumptions:
//! - Every `SECURELOG_*` variable from the host is cleared.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `securelog-console` command for integration testing.
#[allow(dead_code)]
pub fn console_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("securelog-console");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("SECURELOG_BASE_URL")
        .env_remove("SECURELOG_USERNAME")
        .env_remove("SECURELOG_PASSWORD")
        .env_remove("SECURELOG_SESSION_COOKIE")
        .env_remove("SECURELOG_SKIP_VERIFY")
        .env_remove("SECURELOG_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `securelog-console` command pointed at `base_url`.
#[allow(dead_code)]
pub fn console_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = console_cmd();
    cmd.env("SECURELOG_BASE_URL", base_url);
    cmd
}

/// Answer `GET endpoint` with `body` and status 200.
#[allow(dead_code)]
pub async fn mount_json(server: &MockServer, endpoint: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(body.to_string()),
        )
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub const CLIENTS_JSON: &str =
    r#"[{"id":1,"name":"alice","enabled":true,"created":"2024-01-01","lastconnect":"2024-06-01"}]"#;

#[allow(dead_code)]
pub const SEARCH_RESULTS_JSON: &str =
    r#"[{"search_id":7,"search_name":"prod-logs","started":"t0","found":["a","b"]}]"#;

#[allow(dead_code)]
pub const SEARCHES_JSON: &str =
    r#"[{"id":3,"name":"ssh","stype":"Regex","search":"Failed password","locations":["us","eu"]}]"#;

#[allow(dead_code)]
pub const WEBHOOKS_JSON: &str =
    r#"[{"name":"ops","url":"https://hooks.example.org/ops","username":"alice"}]"#;
