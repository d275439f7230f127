//! Single-shot request execution and status classification.
//!
//! securelog-server answers an unauthenticated console request either with
//! 401 or with a 302 to its login page, depending on the route. Both are
//! reported as `ClientError::Unauthorized`.

use reqwest::header::LOCATION;
use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Sends a request once and maps non-success statuses to typed errors.
///
/// # Errors
///
/// - `ClientError::HttpError` for transport failures.
/// - `ClientError::Unauthorized` for 401 or a redirect to `/login`.
/// - `ClientError::NotFound` for 404.
/// - `ClientError::ApiError` for any other non-2xx status.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    debug!(endpoint, method, "Sending request");

    let response = builder.send().await?;
    let status = response.status();

    debug!(endpoint, status = status.as_u16(), "Received response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();

    if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if location.starts_with("/login") {
            return Err(ClientError::Unauthorized(format!(
                "{} redirected to the login page",
                endpoint
            )));
        }

        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: format!("unexpected redirect to '{}'", location),
        });
    }

    match status.as_u16() {
        401 => Err(ClientError::Unauthorized(format!(
            "{} requires a logged-in session",
            endpoint
        ))),
        404 => Err(ClientError::NotFound(url)),
        code => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string());
            Err(ClientError::ApiError {
                status: code,
                url,
                message,
            })
        }
    }
}
