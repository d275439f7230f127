//! Client table and client select views, both fed by `/api/user/client/fetch_all`.

use securelog_client::{Client, FieldValue, ListEndpoint};

use super::{ListView, append_row, create_option, ids, resolve_id};
use crate::dom::{DomError, Document, NodeId};
use crate::error::Result;

fn option_label(client: &Client) -> String {
    format!(
        "{}: {}",
        FieldValue::display_opt(&client.id),
        FieldValue::display_opt(&client.name)
    )
}

/// Client table with its delete and enable selects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientTableView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTableTargets {
    pub table_body: NodeId,
    pub delete_select: NodeId,
    pub enabled_select: NodeId,
}

impl ListView for ClientTableView {
    type Record = Client;
    type Targets = ClientTableTargets;

    const NAME: &'static str = "client-table";
    const ENDPOINT: ListEndpoint = ListEndpoint::Clients;

    fn resolve(doc: &Document) -> Result<Self::Targets> {
        Ok(ClientTableTargets {
            table_body: resolve_id(doc, ids::CLIENT_TABLE_BODY)?,
            delete_select: resolve_id(doc, ids::DELETE_CLIENT_ID)?,
            enabled_select: resolve_id(doc, ids::ENABLED_CLIENT_ID)?,
        })
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        client: &Client,
    ) -> std::result::Result<(), DomError> {
        append_row(
            doc,
            targets.table_body,
            &[
                FieldValue::display_opt(&client.id),
                FieldValue::display_opt(&client.enabled),
                FieldValue::display_opt(&client.created),
                FieldValue::display_opt(&client.lastconnect),
            ],
        )?;

        let option = create_option(
            doc,
            &FieldValue::display_opt(&client.id),
            &option_label(client),
        )?;
        let copy = doc.clone_node(option, true)?;
        doc.append_child(targets.delete_select, copy)?;
        doc.append_child(targets.enabled_select, option)?;
        Ok(())
    }
}

/// Client picker on the search result form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSelectView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSelectTargets {
    pub select: NodeId,
}

impl ListView for ClientSelectView {
    type Record = Client;
    type Targets = ClientSelectTargets;

    const NAME: &'static str = "client-select";
    const ENDPOINT: ListEndpoint = ListEndpoint::Clients;

    fn resolve(doc: &Document) -> Result<Self::Targets> {
        Ok(ClientSelectTargets {
            select: resolve_id(doc, ids::CLIENT_SELECT)?,
        })
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        client: &Client,
    ) -> std::result::Result<(), DomError> {
        let option = create_option(
            doc,
            &FieldValue::display_opt(&client.id),
            &option_label(client),
        )?;
        doc.append_child(targets.select, option)?;
        Ok(())
    }
}
