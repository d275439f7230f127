//! Data models for securelog-server API responses.
//!
//! Records are response-shaped and transient: every field a view shows is
//! optional so that a record missing a field still renders (as an empty
//! cell) instead of failing the whole list.

mod clients;
mod common;
mod search_results;
mod searches;
mod webhooks;

pub use clients::Client;
pub use common::FieldValue;
pub use search_results::{SearchResult, SearchResultFilter};
pub use searches::{SearchDefinition, SearchType};
pub use webhooks::Webhook;
