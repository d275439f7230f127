//! Console view rendering for securelog-server.
//!
//! Each console page is a skeleton [`Document`] whose containers are filled
//! by list views. A view issues one GET to a JSON list endpoint and turns
//! every record into table rows, select options or result cards.
//!
//! - [`dom`]: the in-memory document tree and its HTML/outline output
//! - [`view`]: the [`ListView`] seam, [`ListFetchRenderer`] and the five views
//! - [`page`]: page skeletons and concurrent page rendering

pub mod dom;
pub mod error;
pub mod page;
pub mod view;

pub use dom::{DomError, Document, NodeId};
pub use error::{RenderError, Result};
pub use page::{
    Page, PageReport, RenderedPage, UnknownPage, ViewFailure, ViewKind, render_page, render_views,
};
pub use view::{ListFetchRenderer, ListView, RenderSummary, project_all};
