//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags or `SECURELOG_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use securelog_console::Page;

#[derive(Parser)]
#[command(name = "securelog-console")]
#[command(about = "Render securelog-server console pages from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  securelog-console render clients\n  securelog-console render search-results --client 7 --after 2024-05-01T00:00:00Z\n  securelog-console --output outline render overview\n  securelog-console whoami\n"
)]
pub struct Cli {
    /// Base URL of the securelog server (e.g., https://securelog.local)
    #[arg(short, long, global = true, env = "SECURELOG_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for form login
    #[arg(short, long, global = true, env = "SECURELOG_USERNAME")]
    pub username: Option<String>,

    /// Password for form login
    #[arg(short, long, global = true, env = "SECURELOG_PASSWORD")]
    pub password: Option<String>,

    /// Existing session cookie (preferred over username/password)
    #[arg(long, global = true, env = "SECURELOG_SESSION_COOKIE")]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = "SECURELOG_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "SECURELOG_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Html)]
    pub output: OutputFormat,

    /// Output file path (saves the page to a file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Serialised HTML of the page body
    Html,
    /// Indented element tree
    Outline,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a console page
    Render {
        /// Page to render (clients, search-result-form, search-results, searches, webhooks, overview)
        page: Page,

        /// Raw query string forwarded to the search results endpoint
        #[arg(short, long, conflicts_with_all = ["client", "before", "after"])]
        query: Option<String>,

        /// Only search results reported by this client id
        #[arg(long)]
        client: Option<String>,

        /// Only search results started before this time (RFC 3339)
        #[arg(long)]
        before: Option<DateTime<Utc>>,

        /// Only search results started after this time (RFC 3339)
        #[arg(long)]
        after: Option<DateTime<Utc>>,
    },

    /// Show the logged-in user
    Whoami,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_with_filter() {
        let cli = Cli::try_parse_from([
            "securelog-console",
            "render",
            "search-results",
            "--client",
            "7",
            "--after",
            "2024-05-01T00:00:00Z",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                page,
                client,
                after,
                before,
                query,
            } => {
                assert_eq!(page, Page::SearchResults);
                assert_eq!(client.as_deref(), Some("7"));
                assert!(after.is_some());
                assert!(before.is_none());
                assert!(query.is_none());
            }
            Commands::Whoami => panic!("expected render"),
        }
    }

    #[test]
    fn test_query_conflicts_with_filter_flags() {
        let result = Cli::try_parse_from([
            "securelog-console",
            "render",
            "search-results",
            "--query",
            "client=7",
            "--client",
            "7",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let result = Cli::try_parse_from(["securelog-console", "render", "dashboard"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_flag() {
        let cli =
            Cli::try_parse_from(["securelog-console", "-o", "outline", "render", "clients"])
                .unwrap();
        assert_eq!(cli.output, OutputFormat::Outline);
    }
}
