//! Search results endpoint.

use reqwest::Client;

use super::{ListEndpoint, fetch_list};
use crate::error::Result;
use crate::models::SearchResult;

/// Fetch search results, forwarding `query` verbatim as the query string.
///
/// The server understands `client`, `before` and `after`; see
/// [`crate::models::SearchResultFilter`] for building them.
pub async fn get_search_results(
    client: &Client,
    base_url: &str,
    session_cookie: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<SearchResult>> {
    fetch_list(
        client,
        base_url,
        session_cookie,
        ListEndpoint::SearchResults,
        query,
    )
    .await
}
