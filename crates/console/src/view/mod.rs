//! List views: fetch one JSON array, project each record into the document.
//!
//! Responsibilities:
//! - Define the [`ListView`] seam implemented by the five console views.
//! - Run a view through [`ListFetchRenderer`]: one GET, then projection.
//! - Shared DOM helpers for table rows and select options.
//!
//! Does NOT handle:
//! - Building page skeletons or running several views (see `page`).
//!
//! Invariants:
//! - A failed fetch returns before any node is appended.
//! - Records are projected once each, in array order; nothing is removed or
//!   deduplicated, so rendering twice appends everything twice.
//! - A missing or null field renders as an empty string.

pub mod clients;
pub mod search_results;
pub mod searches;
pub mod webhooks;

use securelog_client::{ClientError, ListEndpoint, SecurelogClient};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::dom::{DomError, Document, NodeId};
use crate::error::{RenderError, Result};

pub use clients::{ClientSelectTargets, ClientSelectView, ClientTableTargets, ClientTableView};
pub use search_results::{SearchResultsTargets, SearchResultsView};
pub use searches::{SearchesTargets, SearchesView};
pub use webhooks::{WebhooksTargets, WebhooksView};

/// Element ids the views append into.
pub mod ids {
    pub const CLIENT_TABLE_BODY: &str = "client-table-body";
    pub const DELETE_CLIENT_ID: &str = "delete-clientid";
    pub const ENABLED_CLIENT_ID: &str = "enabled-clientid";
    pub const CLIENT_SELECT: &str = "client-select";
    pub const SEARCH_RESULTS_CONTAINER: &str = "mycontainer";
    pub const SEARCHES_TBODY: &str = "searches-tbody";
    pub const DELETE_SEARCH_ID: &str = "delete-search-id";
    pub const WEBHOOKS_TBODY: &str = "tbody-webhooks";
    pub const WEBHOOK_DELETE_SELECT: &str = "webhook-delete-select";
}

/// One console view: an endpoint, the containers it fills, and how a record
/// becomes nodes.
pub trait ListView {
    type Record: DeserializeOwned + Send;
    type Targets: Copy;

    /// Short name used in logs and reports.
    const NAME: &'static str;
    const ENDPOINT: ListEndpoint;
    /// Whether the page query string is forwarded to the endpoint.
    const FORWARDS_QUERY: bool = false;

    /// Look up this view's containers in `doc`.
    fn resolve(doc: &Document) -> Result<Self::Targets>;

    /// Runs once after a successful fetch, before the first record.
    fn begin(_doc: &mut Document, _targets: &Self::Targets) -> std::result::Result<(), DomError> {
        Ok(())
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        record: &Self::Record,
    ) -> std::result::Result<(), DomError>;
}

/// Outcome of one successful view render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub view: &'static str,
    pub records: usize,
}

/// Runs [`ListView`]s against a securelog-server.
#[derive(Debug, Clone, Copy)]
pub struct ListFetchRenderer<'a> {
    client: &'a SecurelogClient,
}

impl<'a> ListFetchRenderer<'a> {
    pub fn new(client: &'a SecurelogClient) -> Self {
        Self { client }
    }

    /// Fetch the records for `V` without touching any document.
    pub async fn fetch<V: ListView>(
        &self,
        query: Option<&str>,
    ) -> std::result::Result<Vec<V::Record>, ClientError> {
        let query = if V::FORWARDS_QUERY { query } else { None };
        debug!(view = V::NAME, endpoint = V::ENDPOINT.path(), "Fetching view records");
        self.client.fetch_list(V::ENDPOINT, query).await
    }

    /// Fetch and project `V` into `targets`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Client` if the fetch fails; the document is left
    /// untouched in that case.
    pub async fn render<V: ListView>(
        &self,
        doc: &mut Document,
        targets: &V::Targets,
        query: Option<&str>,
    ) -> Result<RenderSummary> {
        let records = self.fetch::<V>(query).await?;
        project_all::<V>(doc, targets, &records).map_err(RenderError::from)
    }
}

/// Project already-fetched records into the document.
pub fn project_all<V: ListView>(
    doc: &mut Document,
    targets: &V::Targets,
    records: &[V::Record],
) -> std::result::Result<RenderSummary, DomError> {
    V::begin(doc, targets)?;
    for record in records {
        V::project(doc, targets, record)?;
    }
    info!(view = V::NAME, records = records.len(), "Rendered view");
    Ok(RenderSummary {
        view: V::NAME,
        records: records.len(),
    })
}

pub(crate) fn resolve_id(doc: &Document, id: &str) -> Result<NodeId> {
    doc.get_element_by_id(id)
        .ok_or_else(|| RenderError::MissingElement(id.to_string()))
}

/// Append a `tr` with one `td` per cell.
pub(crate) fn append_row<S: AsRef<str>>(
    doc: &mut Document,
    tbody: NodeId,
    cells: &[S],
) -> std::result::Result<NodeId, DomError> {
    let tr = doc.create_element("tr");
    for cell in cells {
        doc.append_element_with_text(tr, "td", cell.as_ref())?;
    }
    doc.append_child(tbody, tr)
}

/// Create a detached `option` with a value and a label.
pub(crate) fn create_option(
    doc: &mut Document,
    value: &str,
    label: &str,
) -> std::result::Result<NodeId, DomError> {
    let option = doc.create_element("option");
    doc.set_attribute(option, "value", value)?;
    doc.set_text_content(option, label)?;
    Ok(option)
}
