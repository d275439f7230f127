//! Search definitions table and its delete select.

use securelog_client::{FieldValue, ListEndpoint, SearchDefinition};

use super::{ListView, append_row, create_option, ids, resolve_id};
use crate::dom::{DomError, Document, NodeId};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchesView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchesTargets {
    pub table_body: NodeId,
    pub delete_select: NodeId,
}

impl ListView for SearchesView {
    type Record = SearchDefinition;
    type Targets = SearchesTargets;

    const NAME: &'static str = "searches";
    const ENDPOINT: ListEndpoint = ListEndpoint::Searches;

    fn resolve(doc: &Document) -> Result<Self::Targets> {
        Ok(SearchesTargets {
            table_body: resolve_id(doc, ids::SEARCHES_TBODY)?,
            delete_select: resolve_id(doc, ids::DELETE_SEARCH_ID)?,
        })
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        search: &SearchDefinition,
    ) -> std::result::Result<(), DomError> {
        let id = FieldValue::display_opt(&search.id);
        let name = FieldValue::display_opt(&search.name);

        append_row(
            doc,
            targets.table_body,
            &[
                id.clone(),
                name.clone(),
                FieldValue::display_opt(&search.stype),
                FieldValue::display_opt(&search.search),
                search
                    .locations
                    .iter()
                    .map(FieldValue::display_opt)
                    .collect::<Vec<_>>()
                    .join(","),
            ],
        )?;

        let option = create_option(doc, &id, &format!("{}: {}", id, name))?;
        doc.append_child(targets.delete_select, option)?;
        Ok(())
    }
}
