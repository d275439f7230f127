//! Client listing endpoint.

use reqwest::Client;

use super::{ListEndpoint, fetch_list};
use crate::error::Result;
use crate::models;

/// List every registered client.
pub async fn fetch_clients(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
) -> Result<Vec<models::Client>> {
    fetch_list(client, base_url, session_cookie, ListEndpoint::Clients, None).await
}
