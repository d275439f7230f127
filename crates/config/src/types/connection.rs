//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, optional timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - `timeout` is `None` unless explicitly configured; requests then wait
//!   for the server indefinitely.
//! - Durations are serialized as whole seconds.

use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serializes an optional Duration as seconds.
mod opt_duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Connection configuration for a securelog-server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the server (e.g., https://securelog.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Optional request timeout (serialized as seconds)
    #[serde(default, with = "opt_duration_seconds")]
    pub timeout: Option<Duration>,
}

impl ConnectionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config that sends requests without a session.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Anonymous,
            },
        }
    }

    /// Create a config that logs in with a username and password.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Credentials { username, password },
            },
        }
    }

    /// Create a config that reuses an existing session cookie.
    pub fn with_session_cookie(base_url: String, cookie: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::SessionCookie { cookie },
            },
        }
    }
}
