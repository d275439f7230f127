//! Search result cards.
//!
//! Each result becomes
//!
//! ```text
//! div.card
//!   div.card-header   "<search_id>: <search_name>"
//!   div.card-body
//!     h5              "Time: <started>"
//!     hr, p           (once per found line)
//! ```
//!
//! followed by a `br`. One extra `br` precedes the first card, and is
//! appended even when the result list is empty.

use securelog_client::{FieldValue, ListEndpoint, SearchResult};

use super::{ListView, ids, resolve_id};
use crate::dom::{DomError, Document, NodeId};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResultsView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResultsTargets {
    pub container: NodeId,
}

impl ListView for SearchResultsView {
    type Record = SearchResult;
    type Targets = SearchResultsTargets;

    const NAME: &'static str = "search-results";
    const ENDPOINT: ListEndpoint = ListEndpoint::SearchResults;
    const FORWARDS_QUERY: bool = true;

    fn resolve(doc: &Document) -> Result<Self::Targets> {
        Ok(SearchResultsTargets {
            container: resolve_id(doc, ids::SEARCH_RESULTS_CONTAINER)?,
        })
    }

    fn begin(doc: &mut Document, targets: &Self::Targets) -> std::result::Result<(), DomError> {
        let br = doc.create_element("br");
        doc.append_child(targets.container, br)?;
        Ok(())
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        result: &SearchResult,
    ) -> std::result::Result<(), DomError> {
        let card = doc.create_element("div");
        doc.set_attribute(card, "class", "card")?;

        let header = doc.append_element_with_text(
            card,
            "div",
            &format!(
                "{}: {}",
                FieldValue::display_opt(&result.search_id),
                FieldValue::display_opt(&result.search_name)
            ),
        )?;
        doc.set_attribute(header, "class", "card-header")?;

        let body = doc.create_element("div");
        doc.set_attribute(body, "class", "card-body")?;
        doc.append_element_with_text(
            body,
            "h5",
            &format!("Time: {}", FieldValue::display_opt(&result.started)),
        )?;
        for line in &result.found {
            let hr = doc.create_element("hr");
            doc.append_child(body, hr)?;
            doc.append_element_with_text(body, "p", &FieldValue::display_opt(line))?;
        }
        doc.append_child(card, body)?;

        doc.append_child(targets.container, card)?;
        let br = doc.create_element("br");
        doc.append_child(targets.container, br)?;
        Ok(())
    }
}
