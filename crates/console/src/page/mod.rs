//! Console pages: a skeleton document plus the views that fill it.
//!
//! Responsibilities:
//! - Map page names to skeletons and view lists.
//! - Resolve every view's containers before any request is sent.
//! - Fetch all views of a page concurrently, then project them in page order.
//!
//! Invariants:
//! - A missing container fails the whole page before any fetch.
//! - A failing view is reported and leaves its containers untouched; the
//!   other views still render.

mod skeleton;

use std::fmt;
use std::str::FromStr;

use futures::future::join_all;
use securelog_client::{Client, ClientError, SearchDefinition, SearchResult, SecurelogClient, Webhook};
use thiserror::Error;
use tracing::{info, warn};

use crate::dom::{DomError, Document};
use crate::error::{RenderError, Result};
use crate::view::{
    ClientSelectTargets, ClientSelectView, ClientTableTargets, ClientTableView, ListFetchRenderer,
    ListView, RenderSummary, SearchResultsTargets, SearchResultsView, SearchesTargets,
    SearchesView, WebhooksTargets, WebhooksView, project_all,
};

/// The five console views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ClientTable,
    ClientSelect,
    SearchResults,
    Searches,
    Webhooks,
}

impl ViewKind {
    pub const fn name(self) -> &'static str {
        match self {
            ViewKind::ClientTable => ClientTableView::NAME,
            ViewKind::ClientSelect => ClientSelectView::NAME,
            ViewKind::SearchResults => SearchResultsView::NAME,
            ViewKind::Searches => SearchesView::NAME,
            ViewKind::Webhooks => WebhooksView::NAME,
        }
    }
}

/// A console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Clients,
    SearchResultForm,
    SearchResults,
    Searches,
    Webhooks,
    /// Every view on one page.
    Overview,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page '{0}' (expected one of: clients, search-result-form, search-results, searches, webhooks, overview)")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Clients,
        Page::SearchResultForm,
        Page::SearchResults,
        Page::Searches,
        Page::Webhooks,
        Page::Overview,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Page::Clients => "clients",
            Page::SearchResultForm => "search-result-form",
            Page::SearchResults => "search-results",
            Page::Searches => "searches",
            Page::Webhooks => "webhooks",
            Page::Overview => "overview",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::Clients => "Clients",
            Page::SearchResultForm => "Search results",
            Page::SearchResults => "Search results",
            Page::Searches => "Searches",
            Page::Webhooks => "Webhooks",
            Page::Overview => "Overview",
        }
    }

    pub const fn views(self) -> &'static [ViewKind] {
        match self {
            Page::Clients => &[ViewKind::ClientTable],
            Page::SearchResultForm => &[ViewKind::ClientSelect],
            Page::SearchResults => &[ViewKind::SearchResults],
            Page::Searches => &[ViewKind::Searches],
            Page::Webhooks => &[ViewKind::Webhooks],
            Page::Overview => &[
                ViewKind::ClientTable,
                ViewKind::ClientSelect,
                ViewKind::SearchResults,
                ViewKind::Searches,
                ViewKind::Webhooks,
            ],
        }
    }

    /// Fresh skeleton document for this page, with empty containers.
    pub fn skeleton(self) -> std::result::Result<Document, DomError> {
        skeleton::build(self.title(), self.views())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Page::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// A view that failed to render.
#[derive(Debug)]
pub struct ViewFailure {
    pub view: &'static str,
    pub error: RenderError,
}

/// What happened to each view of a page.
#[derive(Debug, Default)]
pub struct PageReport {
    pub rendered: Vec<RenderSummary>,
    pub failed: Vec<ViewFailure>,
}

impl PageReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn first_error(&self) -> Option<&RenderError> {
        self.failed.first().map(|f| &f.error)
    }
}

/// A rendered page and its report.
#[derive(Debug)]
pub struct RenderedPage {
    pub page: Page,
    pub document: Document,
    pub report: PageReport,
}

/// View with its containers resolved.
#[derive(Debug, Clone, Copy)]
enum PreparedView {
    ClientTable(ClientTableTargets),
    ClientSelect(ClientSelectTargets),
    SearchResults(SearchResultsTargets),
    Searches(SearchesTargets),
    Webhooks(WebhooksTargets),
}

/// View with its records fetched.
enum FetchedView {
    ClientTable(ClientTableTargets, Vec<Client>),
    ClientSelect(ClientSelectTargets, Vec<Client>),
    SearchResults(SearchResultsTargets, Vec<SearchResult>),
    Searches(SearchesTargets, Vec<SearchDefinition>),
    Webhooks(WebhooksTargets, Vec<Webhook>),
}

impl PreparedView {
    fn resolve(doc: &Document, kind: ViewKind) -> Result<Self> {
        Ok(match kind {
            ViewKind::ClientTable => PreparedView::ClientTable(ClientTableView::resolve(doc)?),
            ViewKind::ClientSelect => PreparedView::ClientSelect(ClientSelectView::resolve(doc)?),
            ViewKind::SearchResults => {
                PreparedView::SearchResults(SearchResultsView::resolve(doc)?)
            }
            ViewKind::Searches => PreparedView::Searches(SearchesView::resolve(doc)?),
            ViewKind::Webhooks => PreparedView::Webhooks(WebhooksView::resolve(doc)?),
        })
    }

    fn kind(&self) -> ViewKind {
        match self {
            PreparedView::ClientTable(_) => ViewKind::ClientTable,
            PreparedView::ClientSelect(_) => ViewKind::ClientSelect,
            PreparedView::SearchResults(_) => ViewKind::SearchResults,
            PreparedView::Searches(_) => ViewKind::Searches,
            PreparedView::Webhooks(_) => ViewKind::Webhooks,
        }
    }

    async fn fetch(
        self,
        renderer: ListFetchRenderer<'_>,
        query: Option<&str>,
    ) -> std::result::Result<FetchedView, ClientError> {
        Ok(match self {
            PreparedView::ClientTable(t) => {
                FetchedView::ClientTable(t, renderer.fetch::<ClientTableView>(query).await?)
            }
            PreparedView::ClientSelect(t) => {
                FetchedView::ClientSelect(t, renderer.fetch::<ClientSelectView>(query).await?)
            }
            PreparedView::SearchResults(t) => {
                FetchedView::SearchResults(t, renderer.fetch::<SearchResultsView>(query).await?)
            }
            PreparedView::Searches(t) => {
                FetchedView::Searches(t, renderer.fetch::<SearchesView>(query).await?)
            }
            PreparedView::Webhooks(t) => {
                FetchedView::Webhooks(t, renderer.fetch::<WebhooksView>(query).await?)
            }
        })
    }
}

impl FetchedView {
    fn project(self, doc: &mut Document) -> std::result::Result<RenderSummary, DomError> {
        match self {
            FetchedView::ClientTable(t, records) => project_all::<ClientTableView>(doc, &t, &records),
            FetchedView::ClientSelect(t, records) => {
                project_all::<ClientSelectView>(doc, &t, &records)
            }
            FetchedView::SearchResults(t, records) => {
                project_all::<SearchResultsView>(doc, &t, &records)
            }
            FetchedView::Searches(t, records) => project_all::<SearchesView>(doc, &t, &records),
            FetchedView::Webhooks(t, records) => project_all::<WebhooksView>(doc, &t, &records),
        }
    }
}

fn resolve_all(doc: &Document, views: &[ViewKind]) -> Result<Vec<PreparedView>> {
    views
        .iter()
        .map(|kind| PreparedView::resolve(doc, *kind))
        .collect()
}

/// Run `views` against an existing document.
///
/// `query` is forwarded verbatim to the views that take one.
///
/// # Errors
///
/// Returns `RenderError::MissingElement` if any view's container is absent;
/// nothing is fetched in that case. Per-view fetch failures are collected in
/// the returned [`PageReport`] instead.
pub async fn render_views(
    client: &SecurelogClient,
    doc: &mut Document,
    views: &[ViewKind],
    query: Option<&str>,
) -> Result<PageReport> {
    let prepared = resolve_all(doc, views)?;

    let renderer = ListFetchRenderer::new(client);
    let fetched = join_all(prepared.iter().map(|view| view.fetch(renderer, query))).await;

    let mut report = PageReport::default();
    for (view, outcome) in prepared.iter().zip(fetched) {
        let name = view.kind().name();
        let result = match outcome {
            Ok(fetched) => fetched.project(doc).map_err(RenderError::from),
            Err(e) => Err(RenderError::from(e)),
        };
        match result {
            Ok(summary) => report.rendered.push(summary),
            Err(error) => {
                warn!(view = name, error = %error, "View failed to render");
                report.failed.push(ViewFailure { view: name, error });
            }
        }
    }

    Ok(report)
}

/// Build `page`'s skeleton and run its views.
pub async fn render_page(
    client: &SecurelogClient,
    page: Page,
    query: Option<&str>,
) -> Result<RenderedPage> {
    let mut document = page.skeleton()?;
    let report = render_views(client, &mut document, page.views(), query).await?;

    info!(
        page = page.name(),
        rendered = report.rendered.len(),
        failed = report.failed.len(),
        "Rendered page"
    );

    Ok(RenderedPage {
        page,
        document,
        report,
    })
}
