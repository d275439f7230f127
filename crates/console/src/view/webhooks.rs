//! Webhooks table and its delete select. Webhooks are identified by name.

use securelog_client::{FieldValue, ListEndpoint, Webhook};

use super::{ListView, append_row, create_option, ids, resolve_id};
use crate::dom::{DomError, Document, NodeId};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebhooksView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhooksTargets {
    pub table_body: NodeId,
    pub delete_select: NodeId,
}

impl ListView for WebhooksView {
    type Record = Webhook;
    type Targets = WebhooksTargets;

    const NAME: &'static str = "webhooks";
    const ENDPOINT: ListEndpoint = ListEndpoint::Webhooks;

    fn resolve(doc: &Document) -> Result<Self::Targets> {
        Ok(WebhooksTargets {
            table_body: resolve_id(doc, ids::WEBHOOKS_TBODY)?,
            delete_select: resolve_id(doc, ids::WEBHOOK_DELETE_SELECT)?,
        })
    }

    fn project(
        doc: &mut Document,
        targets: &Self::Targets,
        webhook: &Webhook,
    ) -> std::result::Result<(), DomError> {
        let name = FieldValue::display_opt(&webhook.name);

        append_row(
            doc,
            targets.table_body,
            &[
                name.clone(),
                FieldValue::display_opt(&webhook.url),
                FieldValue::display_opt(&webhook.username),
            ],
        )?;

        let option = create_option(doc, &name, &name)?;
        doc.append_child(targets.delete_select, option)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::project_all;
    use crate::view::test_support::{document_with, options, rows};

    #[test]
    fn test_webhook_row_and_option() {
        let mut doc = document_with(&[
            ("tbody", ids::WEBHOOKS_TBODY),
            ("select", ids::WEBHOOK_DELETE_SELECT),
        ]);
        let t = WebhooksView::resolve(&doc).unwrap();
        let webhooks: Vec<Webhook> = serde_json::from_str(
            r#"[{"name":"ops","url":"https://hooks.example.org/ops","username":"alice"},
                {"name":"sec","url":"https://hooks.example.org/sec","username":null}]"#,
        )
        .unwrap();

        let summary = project_all::<WebhooksView>(&mut doc, &t, &webhooks).unwrap();

        assert_eq!(summary.view, "webhooks");
        assert_eq!(
            rows(&doc, t.table_body),
            vec![
                vec!["ops", "https://hooks.example.org/ops", "alice"],
                vec!["sec", "https://hooks.example.org/sec", ""],
            ]
        );
        assert_eq!(
            options(&doc, t.delete_select),
            vec![
                ("ops".to_string(), "ops".to_string()),
                ("sec".to_string(), "sec".to_string()),
            ]
        );
    }
}
