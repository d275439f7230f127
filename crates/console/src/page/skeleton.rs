//! Static markup for the console pages.
//!
//! Each view kind owns one section holding the containers it appends into,
//! wrapped in the forms the server's delete/enable endpoints expect.

use crate::dom::{DomError, Document, NodeId};
use crate::view::ids;

use super::ViewKind;

type DomResult<T> = std::result::Result<T, DomError>;

/// Append `<tag attrs...>text</tag>` to `parent`.
fn element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> DomResult<NodeId> {
    let node = doc.append_element_with_text(parent, tag, text)?;
    for (name, value) in attrs {
        doc.set_attribute(node, name, value)?;
    }
    Ok(node)
}

fn table(doc: &mut Document, parent: NodeId, headers: &[&str], tbody_id: &str) -> DomResult<()> {
    let table = element(doc, parent, "table", &[("class", "table")], "")?;
    let thead = element(doc, table, "thead", &[], "")?;
    let tr = element(doc, thead, "tr", &[], "")?;
    for header in headers {
        element(doc, tr, "th", &[], header)?;
    }
    element(doc, table, "tbody", &[("id", tbody_id)], "")?;
    Ok(())
}

/// A POST form with one select and a submit button.
fn select_form(
    doc: &mut Document,
    parent: NodeId,
    action: &str,
    field: &str,
    select_id: &str,
    submit: &str,
) -> DomResult<NodeId> {
    let form = element(
        doc,
        parent,
        "form",
        &[("action", action), ("method", "post")],
        "",
    )?;
    element(doc, form, "select", &[("id", select_id), ("name", field)], "")?;
    element(
        doc,
        form,
        "button",
        &[("type", "submit"), ("class", "btn")],
        submit,
    )?;
    Ok(form)
}

pub(super) fn build_section(doc: &mut Document, parent: NodeId, kind: ViewKind) -> DomResult<()> {
    let section = element(doc, parent, "section", &[("class", kind.name())], "")?;
    match kind {
        ViewKind::ClientTable => {
            element(doc, section, "h2", &[], "Clients")?;
            table(
                doc,
                section,
                &["ID", "Enabled", "Created", "Last connect"],
                ids::CLIENT_TABLE_BODY,
            )?;
            select_form(
                doc,
                section,
                "/api/user/client/delete",
                "id",
                ids::DELETE_CLIENT_ID,
                "Delete",
            )?;
            let form = select_form(
                doc,
                section,
                "/api/user/client/set_enabled",
                "id",
                ids::ENABLED_CLIENT_ID,
                "Save",
            )?;
            element(
                doc,
                form,
                "input",
                &[("type", "checkbox"), ("name", "enabled"), ("value", "true")],
                "",
            )?;
        }
        ViewKind::ClientSelect => {
            element(doc, section, "h2", &[], "Search results")?;
            let form = element(
                doc,
                section,
                "form",
                &[("action", "/search_results"), ("method", "get")],
                "",
            )?;
            element(
                doc,
                form,
                "select",
                &[("id", ids::CLIENT_SELECT), ("name", "client")],
                "",
            )?;
            element(
                doc,
                form,
                "input",
                &[("type", "datetime-local"), ("name", "after")],
                "",
            )?;
            element(
                doc,
                form,
                "input",
                &[("type", "datetime-local"), ("name", "before")],
                "",
            )?;
            element(
                doc,
                form,
                "button",
                &[("type", "submit"), ("class", "btn")],
                "Show",
            )?;
        }
        ViewKind::SearchResults => {
            element(doc, section, "h2", &[], "Results")?;
            element(
                doc,
                section,
                "div",
                &[("id", ids::SEARCH_RESULTS_CONTAINER), ("class", "container")],
                "",
            )?;
        }
        ViewKind::Searches => {
            element(doc, section, "h2", &[], "Searches")?;
            table(
                doc,
                section,
                &["ID", "Name", "Type", "Search", "Locations"],
                ids::SEARCHES_TBODY,
            )?;
            select_form(
                doc,
                section,
                "/api/user/delete_search",
                "id",
                ids::DELETE_SEARCH_ID,
                "Delete",
            )?;
        }
        ViewKind::Webhooks => {
            element(doc, section, "h2", &[], "Webhooks")?;
            table(
                doc,
                section,
                &["Name", "URL", "Username"],
                ids::WEBHOOKS_TBODY,
            )?;
            select_form(
                doc,
                section,
                "/api/user/webhooks/delete",
                "name",
                ids::WEBHOOK_DELETE_SELECT,
                "Delete",
            )?;
        }
    }
    Ok(())
}

/// Build a document with a title and one section per view.
pub(super) fn build(title: &str, views: &[ViewKind]) -> DomResult<Document> {
    let mut doc = Document::new();
    let root = doc.root();
    let container = element(&mut doc, root, "div", &[("class", "container")], "")?;
    element(&mut doc, container, "h1", &[], title)?;
    for kind in views {
        build_section(&mut doc, container, *kind)?;
    }
    Ok(doc)
}
