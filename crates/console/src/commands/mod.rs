//! Command implementations and their shared helpers.

pub mod render;
pub mod whoami;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use securelog_client::SecurelogClient;
use securelog_config::Config;
use tempfile::NamedTempFile;

pub fn build_client_from_config(config: &Config) -> Result<SecurelogClient> {
    SecurelogClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build securelog client")
}

/// Write `content` to `path` atomically (temp file in the same directory, then rename).
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
