//! Generic JSON-array list fetch shared by every list endpoint.

use reqwest::Client;
use reqwest::header::{ACCEPT, COOKIE};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ListEndpoint;
use super::request::send_request;
use crate::error::{ClientError, Result};

/// Fetch one list endpoint and parse its body as a JSON array of `T`.
///
/// Sends a single `GET` with `Accept: application/json`. `query` is
/// forwarded verbatim (see [`ListEndpoint::url`]). The whole body is parsed
/// before anything is returned, so a truncated or malformed body yields an
/// error and no records.
pub async fn fetch_list<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
    endpoint: ListEndpoint,
    query: Option<&str>,
) -> Result<Vec<T>> {
    let url = endpoint.url(base_url, query);

    let mut builder = client.get(&url).header(ACCEPT, "application/json");
    if let Some(cookie) = session_cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let response = send_request(builder, endpoint.path(), "GET").await?;
    let body = response.text().await?;

    let records = parse_json_array(&body, endpoint.path())?;
    debug!(
        endpoint = endpoint.path(),
        count = records.len(),
        "Parsed list response"
    );
    Ok(records)
}

/// Parse a response body as a JSON array of `T`.
pub fn parse_json_array<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "{} did not return a JSON array of records: {}",
            endpoint, e
        ))
    })
}
