//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use securelog_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Render {
            page,
            query,
            client,
            before,
            after,
        } => {
            let query = commands::render::page_query(query, client, before, after);
            commands::render::run(config, page, query, cli.output, cli.output_file).await?;
        }
        Commands::Whoami => {
            commands::whoami::run(config).await?;
        }
    }

    Ok(())
}
