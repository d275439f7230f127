//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests touching the process environment run under `serial_test` and
//!   hold the global test lock.

use std::time::Duration;

use proptest::prelude::*;
use secrecy::ExposeSecret;
use serial_test::serial;

use super::builder::validate_and_normalize_base_url;
use super::{ConfigError, ConfigLoader};
use crate::types::AuthStrategy;

fn env_lock() -> &'static std::sync::Mutex<()> {
    crate::test_util::global_test_lock()
}

const CLEARED: [(&str, Option<&str>); 6] = [
    ("SECURELOG_BASE_URL", None),
    ("SECURELOG_USERNAME", None),
    ("SECURELOG_PASSWORD", None),
    ("SECURELOG_SESSION_COOKIE", None),
    ("SECURELOG_SKIP_VERIFY", None),
    ("SECURELOG_TIMEOUT", None),
];

#[test]
fn test_build_requires_base_url() {
    let result = ConfigLoader::new().build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_blank_base_url_is_missing() {
    let result = ConfigLoader::new().with_base_url("   ".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_base_url_is_normalized() {
    let config = ConfigLoader::new()
        .with_base_url("https://securelog.local:8443/".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "https://securelog.local:8443");
}

#[test]
fn test_base_url_rejects_other_schemes() {
    let result = validate_and_normalize_base_url("ftp://securelog.local");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_base_url_rejects_relative_urls() {
    let result = validate_and_normalize_base_url("/api/user");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_no_auth_builds_anonymous() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .build()
        .unwrap();
    assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
}

#[test]
fn test_credentials_strategy() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::Credentials { username, password } => {
            assert_eq!(username, "admin");
            assert_eq!(password.expose_secret(), "secret");
        }
        other => panic!("Expected Credentials, got {:?}", other),
    }
}

#[test]
fn test_session_cookie_takes_precedence_over_credentials() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_session_cookie("cookie-value".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::SessionCookie { .. }
    ));
}

#[test]
fn test_username_without_password_is_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_username("admin".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::IncompleteCredentials {
            missing: "password"
        })
    ));
}

#[test]
fn test_password_without_username_is_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_password("secret".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::IncompleteCredentials {
            missing: "username"
        })
    ));
}

#[test]
fn test_timeout_defaults_to_none() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .build()
        .unwrap();
    assert!(config.connection.timeout.is_none());
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_excessive_timeout_is_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .with_timeout(Duration::from_secs(3601))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("SECURELOG_BASE_URL", Some("https://env.securelog.local/")),
            ("SECURELOG_USERNAME", Some("operator")),
            ("SECURELOG_PASSWORD", Some("pw")),
            ("SECURELOG_SESSION_COOKIE", None),
            ("SECURELOG_SKIP_VERIFY", Some("true")),
            ("SECURELOG_TIMEOUT", Some("15")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.base_url, "https://env.securelog.local");
            assert!(config.connection.skip_verify);
            assert_eq!(config.connection.timeout, Some(Duration::from_secs(15)));
            assert!(matches!(
                config.auth.strategy,
                AuthStrategy::Credentials { ref username, .. } if username == "operator"
            ));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("SECURELOG_BASE_URL", Some("https://env.securelog.local"))],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.securelog.local".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.securelog.local");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("SECURELOG_BASE_URL", Some("http://localhost:8080")),
            ("SECURELOG_USERNAME", Some("")),
            ("SECURELOG_PASSWORD", Some("  ")),
            ("SECURELOG_SESSION_COOKIE", Some("")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
        },
    );
}

#[test]
#[serial]
fn test_invalid_skip_verify_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("SECURELOG_BASE_URL", Some("http://localhost:8080")),
            ("SECURELOG_SKIP_VERIFY", Some("sometimes")),
        ],
        || {
            let result = ConfigLoader::new().from_env();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidValue { ref var, .. }) if var == "SECURELOG_SKIP_VERIFY"
            ));
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("SECURELOG_BASE_URL", Some("http://localhost:8080")),
            ("SECURELOG_TIMEOUT", Some("soon")),
        ],
        || {
            let result = ConfigLoader::new().from_env();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidValue { ref var, .. }) if var == "SECURELOG_TIMEOUT"
            ));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    let mut vars: Vec<(&str, Option<&str>)> = CLEARED.to_vec();
    vars.push(("DOTENV_DISABLED", Some("1")));

    temp_env::with_vars(vars, || {
        let loader = ConfigLoader::new().load_dotenv().unwrap();
        let result = loader.from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    });
}

#[test]
fn test_dotenv_parse_error_does_not_leak_content() {
    let err = ConfigError::DotenvParse { error_index: 12 };
    let message = err.to_string();
    assert!(message.contains("12"));
    assert!(message.contains("DOTENV_DISABLED"));
}

proptest! {
    #[test]
    fn prop_normalized_base_url_has_no_trailing_slash(
        host in "[a-z]{1,12}",
        port in 1u16..65535,
        slashes in 0usize..4,
    ) {
        let raw = format!("https://{}.local:{}{}", host, port, "/".repeat(slashes));
        let normalized = validate_and_normalize_base_url(&raw).unwrap();
        prop_assert!(!normalized.ends_with('/'));
        prop_assert!(normalized.starts_with("https://"));
    }
}
