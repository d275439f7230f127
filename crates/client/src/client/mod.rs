//! Main securelog-server client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login-once session handling
//! - `lists`: The console list endpoints
//!
//! # Invariants
//! - Every method takes `&self`, so several list fetches may run
//!   concurrently against one client.
//! - With credential auth the login request is sent at most once per client,
//!   before the first request that needs a session.
//! - Requests are never retried.

pub mod builder;
mod lists;
mod session;

use secrecy::{ExposeSecret, SecretString};
use securelog_config::AuthStrategy;
use tokio::sync::OnceCell;

/// securelog-server console API client.
///
/// ```rust,ignore
/// use securelog_client::SecurelogClient;
///
/// let client = SecurelogClient::builder()
///     .base_url("https://securelog.local".to_string())
///     .build()?;
/// let webhooks = client.fetch_webhooks().await?;
/// ```
#[derive(Debug)]
pub struct SecurelogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth_strategy: AuthStrategy,
    /// Pre-built `Cookie` header for session-cookie auth.
    pub(crate) cookie_header: Option<SecretString>,
    pub(crate) session: OnceCell<()>,
}

impl SecurelogClient {
    pub fn builder() -> builder::SecurelogClientBuilder {
        builder::SecurelogClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    pub(crate) fn cookie_header(&self) -> Option<&str> {
        self.cookie_header.as_ref().map(|c| c.expose_secret())
    }
}
