//! Errors produced while rendering console views and pages.

use securelog_client::ClientError;
use thiserror::Error;

use crate::dom::DomError;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The fetch failed: transport, status or body.
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("document error: {0}")]
    Dom(#[from] DomError),

    /// A container the view appends into is not in the document.
    #[error("element '#{0}' not found in document")]
    MissingElement(String),
}

impl RenderError {
    /// The underlying client error, if the failure came from the fetch.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            RenderError::Client(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
