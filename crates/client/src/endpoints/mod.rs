//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request. Nothing here retries,
//! pages, or caches; callers get the server's answer or a typed error.

mod auth;
mod clients;
mod list;
mod request;
mod search_results;
mod searches;
mod webhooks;

pub use auth::{current_username, login, logout};
pub use clients::fetch_clients;
pub use list::{fetch_list, parse_json_array};
pub use request::send_request;
pub use search_results::get_search_results;
pub use searches::get_searches;
pub use webhooks::fetch_webhooks;

/// The list endpoints the console renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEndpoint {
    Clients,
    SearchResults,
    Searches,
    Webhooks,
}

impl ListEndpoint {
    /// Path of the endpoint relative to the server root.
    pub const fn path(self) -> &'static str {
        match self {
            ListEndpoint::Clients => "/api/user/client/fetch_all",
            ListEndpoint::SearchResults => "/api/user/get_search_results",
            ListEndpoint::Searches => "/api/user/get_searches",
            ListEndpoint::Webhooks => "/api/user/webhooks/fetch",
        }
    }

    /// Full URL for the endpoint, with `query` appended verbatim.
    ///
    /// A leading `?` on `query` is accepted, so a page's raw location search
    /// string can be passed straight through. An empty query adds nothing.
    pub fn url(self, base_url: &str, query: Option<&str>) -> String {
        let query = query
            .map(|q| q.strip_prefix('?').unwrap_or(q))
            .filter(|q| !q.is_empty());
        match query {
            Some(q) => format!("{}{}?{}", base_url, self.path(), q),
            None => format!("{}{}", base_url, self.path()),
        }
    }
}
