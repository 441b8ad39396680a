use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::links::SponsorLink;

/// Render the ranked links as a pretty-printed JSON array (2-space indent).
pub fn render(links: &[SponsorLink]) -> Result<String> {
    serde_json::to_string_pretty(links).context("Failed to serialize sponsor links")
}

/// Overwrite `path` with the rendered links.
pub fn write_sponsors(path: &Path, links: &[SponsorLink]) -> Result<()> {
    let json = render(links)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write sponsors to {}", path.display()))?;
    info!(path = %path.display(), count = links.len(), "Content written");
    Ok(())
}
