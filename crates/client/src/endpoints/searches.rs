//! Search definition listing endpoint.

use reqwest::Client;

use super::{ListEndpoint, fetch_list};
use crate::error::Result;
use crate::models::SearchDefinition;

/// List every search definition.
pub async fn get_searches(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
) -> Result<Vec<SearchDefinition>> {
    fetch_list(client, base_url, session_cookie, ListEndpoint::Searches, None).await
}
