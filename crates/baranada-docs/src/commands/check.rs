//! Validate the site file.

use std::path::Path;

use anyhow::{Context, Result};
use baranada_site::SiteConfig;

/// Run the check command.
pub fn run(path: &Path) -> Result<()> {
    let config = SiteConfig::load(path).context("Failed to load site configuration")?;
    config
        .validate()
        .context("Site configuration is invalid")?;

    tracing::info!(
        "Site configuration is valid: {} locales, {} sitemap exclusion(s)",
        config.locales.iter().count(),
        config.sitemap.exclude.len()
    );

    Ok(())
}
