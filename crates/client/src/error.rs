//! Error types for the securelog client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to securelog-server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login was rejected.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status from the server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The body was not the JSON shape the endpoint promises.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// No valid session; the server answered 401 or redirected to its login page.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ClientError {
    /// Check if this error indicates an authentication problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::Unauthorized(_))
    }

    /// Check if this error came from an unreadable or malformed response body.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized(_) => Some(401),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("bad password".to_string()).is_auth_error());
        assert!(ClientError::Unauthorized("no session".to_string()).is_auth_error());
        assert!(!ClientError::InvalidResponse("x".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_status() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/api/user/get_searches".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(ClientError::NotFound("x".to_string()).status(), Some(404));
        assert_eq!(ClientError::InvalidUrl("x".to_string()).status(), None);
    }

    #[test]
    fn test_api_error_display_includes_url_and_status() {
        let err = ClientError::ApiError {
            status: 503,
            url: "http://localhost/api/user/webhooks/fetch".to_string(),
            message: "maintenance".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("/api/user/webhooks/fetch"));
        assert!(message.contains("maintenance"));
    }
}
