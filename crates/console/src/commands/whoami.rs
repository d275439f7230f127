//! Whoami command implementation.

use anyhow::{Context, Result};

use crate::commands::build_client_from_config;

pub async fn run(config: securelog_config::Config) -> Result<()> {
    let client = build_client_from_config(&config)?;

    let username = client
        .username()
        .await
        .context("Failed to fetch the logged-in user")?;

    match username {
        Some(name) => println!("{}", name),
        None => println!("Not logged in"),
    }
    Ok(())
}
