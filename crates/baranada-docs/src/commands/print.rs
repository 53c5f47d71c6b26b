//! Resolve and print the assembled site definition.

use std::path::Path;

use anyhow::{Context, Result};
use baranada_site::{BuildEnv, SiteConfig, SiteDefinition};

/// Run the print command.
///
/// The JSON on stdout is what the engine receives at its initialization
/// boundary.
pub fn run(path: &Path, production: bool) -> Result<()> {
    let config = SiteConfig::load(path).context("Failed to load site configuration")?;
    config
        .validate()
        .context("Site configuration is invalid")?;

    let env = if production {
        BuildEnv::Production
    } else {
        BuildEnv::from_env()
    };

    let definition = SiteDefinition::assemble(config, env);
    let json = serde_json::to_string_pretty(&definition)
        .context("Failed to serialize site definition")?;

    println!("{json}");

    Ok(())
}
