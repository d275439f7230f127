//! Session handling for [`SecurelogClient`].
//!
//! # What this module handles:
//! - Logging in once with credentials before the first request
//! - Explicit login, logout and whoami
//!
//! # What this module does NOT handle:
//! - Re-login after a session expires (requests are not retried)

use securelog_config::AuthStrategy;
use tracing::info;

use crate::client::SecurelogClient;
use crate::endpoints;
use crate::error::Result;

impl SecurelogClient {
    /// Make sure a session exists before a request that needs one.
    ///
    /// Only credential auth performs a request here; concurrent callers share
    /// the single login.
    pub(crate) async fn ensure_session(&self) -> Result<()> {
        if let AuthStrategy::Credentials { .. } = &self.auth_strategy {
            self.session.get_or_try_init(|| self.login()).await?;
        }
        Ok(())
    }

    /// Log in with the configured credentials.
    ///
    /// A no-op for session-cookie and anonymous auth.
    pub async fn login(&self) -> Result<()> {
        if let AuthStrategy::Credentials { username, password } = &self.auth_strategy {
            endpoints::login(&self.http, &self.base_url, username, password).await?;
            info!(username = %username, "Logged in to securelog-server");
        }
        Ok(())
    }

    /// End the current session on the server.
    pub async fn logout(&self) -> Result<()> {
        endpoints::logout(&self.http, &self.base_url, self.cookie_header()).await
    }

    /// Name of the logged-in user, or `None` if the server sees no session.
    pub async fn username(&self) -> Result<Option<String>> {
        self.ensure_session().await?;
        endpoints::current_username(&self.http, &self.base_url, self.cookie_header()).await
    }
}
