//! Write a starter site file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(path: &Path, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, STARTER_SITE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Created {}", path.display());
    tracing::info!("Run 'baranada-docs check' to validate it.");

    Ok(())
}

// Mirrors the built-in defaults so a fresh file changes nothing until edited.
const STARTER_SITE: &str = r##"# Baranada documentation site definition.
# Values omitted here keep their built-in defaults.

title = "Baranada"
theme_color = "#0f766e"

[icons]
favicon = "/favicon.ico"
svg = "/logo.svg"

[[social_links]]
icon = "github"
link = "https://github.com/baranada/baranada"

# The default locale's sources live under en/ but serve from the site root.
[locales.default]
code = "en"
label = "English"
lang = "en-US"

[[locales.translations]]
code = "fa"
label = "فارسی"
lang = "fa-IR"
dir = "rtl"

[[locales.translations.nav]]
text = "راهنما"
link = "/fa/guide/"

[[locales.translations.nav]]
text = "مرجع"
link = "/fa/reference/"

[locales.rewrite]
strip_prefix = "en/"

[markdown]
line_numbers = true
theme = "github-dark"

# Migration pages stay reachable but are left out of the sitemap.
[sitemap]
hostname = "https://baranada.dev"
exclude = ["migration"]

[llms]
full_text = true

[theme]
footer_message = "Released under the MIT License."
search = "local"

[[theme.nav]]
text = "Guide"
link = "/guide/"

[[theme.nav]]
text = "Reference"
link = "/reference/"

[[theme.sidebar]]
text = "Introduction"
items = [
  { text = "What is Baranada?", link = "/guide/what-is-baranada" },
  { text = "Getting Started", link = "/guide/getting-started" },
]

[[theme.sidebar]]
text = "Migration"
collapsed = true
items = [{ text = "From 1.x", link = "/migration/from-v1" }]

[theme.edit_link]
pattern = "https://github.com/baranada/baranada/edit/main/docs/:path"
text = "Edit this page"
"##;
