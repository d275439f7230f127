//! Console list API methods for [`SecurelogClient`].

use serde::de::DeserializeOwned;

use crate::client::SecurelogClient;
use crate::endpoints::{self, ListEndpoint};
use crate::error::Result;
use crate::models::{Client, SearchDefinition, SearchResult, Webhook};

impl SecurelogClient {
    /// Fetch any list endpoint as records of type `T`.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: ListEndpoint,
        query: Option<&str>,
    ) -> Result<Vec<T>> {
        self.ensure_session().await?;
        endpoints::fetch_list(
            &self.http,
            &self.base_url,
            self.cookie_header(),
            endpoint,
            query,
        )
        .await
    }

    /// List every registered client.
    pub async fn fetch_clients(&self) -> Result<Vec<Client>> {
        self.ensure_session().await?;
        endpoints::fetch_clients(&self.http, &self.base_url, self.cookie_header()).await
    }

    /// List every search definition.
    pub async fn get_searches(&self) -> Result<Vec<SearchDefinition>> {
        self.ensure_session().await?;
        endpoints::get_searches(&self.http, &self.base_url, self.cookie_header()).await
    }

    /// Fetch search results; `query` is forwarded verbatim.
    pub async fn get_search_results(&self, query: Option<&str>) -> Result<Vec<SearchResult>> {
        self.ensure_session().await?;
        endpoints::get_search_results(&self.http, &self.base_url, self.cookie_header(), query)
            .await
    }

    /// List every configured webhook.
    pub async fn fetch_webhooks(&self) -> Result<Vec<Webhook>> {
        self.ensure_session().await?;
        endpoints::fetch_webhooks(&self.http, &self.base_url, self.cookie_header()).await
    }
}
