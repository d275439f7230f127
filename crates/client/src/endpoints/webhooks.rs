//! Webhook listing endpoint.

use reqwest::Client;

use super::{ListEndpoint, fetch_list};
use crate::error::Result;
use crate::models::Webhook;

/// List every configured webhook.
pub async fn fetch_webhooks(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
) -> Result<Vec<Webhook>> {
    fetch_list(client, base_url, session_cookie, ListEndpoint::Webhooks, None).await
}
