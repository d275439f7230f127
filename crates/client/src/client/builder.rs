//! Client builder for constructing [`SecurelogClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (cookie store, redirects, TLS, timeout)
//!
//! # Invariants
//! - Redirects are never followed; the server's login redirects are how an
//!   expired session is detected.
//! - No timeout is applied unless one is configured.
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use securelog_config::{AuthStrategy, Config, constants::SESSION_COOKIE_NAME};
use tokio::sync::OnceCell;

use crate::client::SecurelogClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SecurelogClient`].
pub struct SecurelogClientBuilder {
    base_url: Option<String>,
    auth_strategy: AuthStrategy,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl Default for SecurelogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: AuthStrategy::Anonymous,
            skip_verify: false,
            timeout: None,
        }
    }
}

impl SecurelogClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the server, e.g. `https://securelog.local`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a request timeout. Without one, a request waits indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = config.auth.strategy.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Turn a configured cookie into a `Cookie` header value.
    ///
    /// A bare value is sent under the server's session cookie name; a value
    /// that already contains `=` is sent as given.
    fn cookie_header(cookie: &SecretString) -> SecretString {
        let raw = cookie.expose_secret();
        if raw.contains('=') {
            cookie.clone()
        } else {
            SecretString::new(format!("{}={}", SESSION_COOKIE_NAME, raw).into())
        }
    }

    /// Build the [`SecurelogClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SecurelogClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none());

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        let cookie_header = match &self.auth_strategy {
            AuthStrategy::SessionCookie { cookie } => Some(Self::cookie_header(cookie)),
            _ => None,
        };

        Ok(SecurelogClient {
            http,
            base_url,
            auth_strategy: self.auth_strategy,
            cookie_header,
            session: OnceCell::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_credentials(
            "https://securelog.local".to_string(),
            "admin".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Some(Duration::from_secs(20));

        let builder = SecurelogClient::builder().from_config(&config);

        assert_eq!(builder.base_url, Some("https://securelog.local".to_string()));
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Some(Duration::from_secs(20)));
        assert!(matches!(
            builder.auth_strategy,
            AuthStrategy::Credentials { .. }
        ));
    }

    #[test]
    fn test_normalize_base_url_trailing_slashes() {
        assert_eq!(
            SecurelogClientBuilder::normalize_base_url("https://securelog.local//".to_string()),
            "https://securelog.local"
        );
        assert_eq!(
            SecurelogClientBuilder::normalize_base_url("https://securelog.local".to_string()),
            "https://securelog.local"
        );
    }

    #[test]
    fn test_skip_verify_with_http_url_still_builds() {
        let client = SecurelogClient::builder()
            .base_url("http://localhost:8080".to_string())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }
}
