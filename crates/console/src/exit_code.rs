//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` (directly or inside a `RenderError`) to an exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use securelog_client::ClientError;
use securelog_console::RenderError;

/// Structured exit codes for securelog-console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed and every view rendered.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected credentials or no session.
    ///
    /// Scripts should refresh the session cookie or credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Endpoint not found.
    NotFound = 4,

    /// Invalid response - the body was not the expected JSON array.
    InvalidResponse = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Authentication errors (exit code 2)
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::Unauthorized(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Not found (exit code 4)
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Invalid response (exit code 5)
            ClientError::InvalidResponse(_) => ExitCode::InvalidResponse,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&RenderError> for ExitCode {
    fn from(err: &RenderError) -> Self {
        match err.client_error() {
            Some(client_err) => ExitCode::from(client_err),
            None => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no client error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(render_err) = cause.downcast_ref::<RenderError>() {
                return ExitCode::from(render_err);
            }
        }

        ExitCode::GeneralError
    }
}
