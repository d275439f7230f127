//! Render command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use securelog_client::SearchResultFilter;
use securelog_console::{Page, render_page};
use tracing::info;

use crate::args::OutputFormat;
use crate::commands::{build_client_from_config, write_to_file};

/// Query string for the page: the raw `--query` if given, else one built
/// from the filter flags. `None` when neither is set.
pub fn page_query(
    query: Option<String>,
    client: Option<String>,
    before: Option<DateTime<Utc>>,
    after: Option<DateTime<Utc>>,
) -> Option<String> {
    if query.is_some() {
        return query;
    }
    let filter = SearchResultFilter {
        client,
        before,
        after,
    };
    (!filter.is_empty()).then(|| filter.to_query_string())
}

pub async fn run(
    config: securelog_config::Config,
    page: Page,
    query: Option<String>,
    output: OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    info!(page = page.name(), base_url = client.base_url(), "Rendering page");

    let rendered = render_page(&client, page, query.as_deref())
        .await
        .with_context(|| format!("Failed to render page '{}'", page))?;

    let content = match output {
        OutputFormat::Html => format!("{}\n", rendered.document.to_html()),
        OutputFormat::Outline => rendered.document.to_outline(),
    };

    if let Some(ref path) = output_file {
        write_to_file(&content, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Page written to {} ({:?} format)", path.display(), output);
    } else {
        print!("{}", content);
    }

    for failure in &rendered.report.failed {
        eprintln!("Error: view '{}' failed: {}", failure.view, failure.error);
    }

    match rendered.report.failed.into_iter().next() {
        Some(failure) => Err(anyhow::Error::new(failure.error)
            .context(format!("View '{}' failed to render", failure.view))),
        None => Ok(()),
    }
}
