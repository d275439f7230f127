//! User session endpoints.
//!
//! The server answers the login form with a redirect either way: back to
//! `/login` when the credentials are wrong, anywhere else on success. The
//! session cookie arrives on that redirect and is kept by the HTTP client's
//! cookie store.

use reqwest::Client;
use reqwest::header::{COOKIE, LOCATION};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::request::send_request;
use crate::error::{ClientError, Result};

const LOGIN_PATH: &str = "/api/user/login";
const LOGOUT_PATH: &str = "/api/user/logout";
const USERNAME_PATH: &str = "/api/user/username";

/// Log in with a username and password.
///
/// # Errors
///
/// Returns `ClientError::AuthFailed` when the server sends the browser back
/// to its login page.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &SecretString,
) -> Result<()> {
    let url = format!("{}{}", base_url, LOGIN_PATH);
    debug!(endpoint = LOGIN_PATH, username, "Logging in");

    let response = client
        .post(&url)
        .form(&[("username", username), ("password", password.expose_secret())])
        .send()
        .await?;

    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    match (status.as_u16(), location.as_deref()) {
        (_, Some(loc)) if loc.starts_with("/login") => Err(ClientError::AuthFailed(format!(
            "server rejected credentials for '{}'",
            username
        ))),
        (code, _) if status.is_redirection() || status.is_success() => {
            debug!(status = code, "Login accepted");
            Ok(())
        }
        (code, _) => Err(ClientError::ApiError {
            status: code,
            url,
            message: response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string()),
        }),
    }
}

/// End the current session.
pub async fn logout(client: &Client, base_url: &str, session_cookie: Option<&str>) -> Result<()> {
    let url = format!("{}{}", base_url, LOGOUT_PATH);
    let mut builder = client.post(&url);
    if let Some(cookie) = session_cookie {
        builder = builder.header(COOKIE, cookie);
    }

    match send_request(builder, LOGOUT_PATH, "POST").await {
        Ok(_) => Ok(()),
        // The server redirects to `/` after forgetting the identity.
        Err(ClientError::ApiError { status, .. }) if (300..400).contains(&status) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Name of the logged-in user, or `None` when there is no session.
pub async fn current_username(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
) -> Result<Option<String>> {
    let url = format!("{}{}", base_url, USERNAME_PATH);
    let mut builder = client.get(&url);
    if let Some(cookie) = session_cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let response = send_request(builder, USERNAME_PATH, "GET").await?;
    let body = response.text().await?;
    let name = body.trim();

    if name.is_empty() || name == "Null" {
        Ok(None)
    } else {
        Ok(Some(name.to_string()))
    }
}
