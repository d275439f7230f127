//! securelog-server console API client.
//!
//! This crate provides a typed async client for the list endpoints the
//! securelog administrative console reads from, plus the session login the
//! server requires before answering them.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

pub use client::SecurelogClient;
pub use client::builder::SecurelogClientBuilder;
pub use endpoints::ListEndpoint;
pub use error::{ClientError, Result};
pub use models::{
    Client, FieldValue, SearchDefinition, SearchResult, SearchResultFilter, SearchType, Webhook,
};
