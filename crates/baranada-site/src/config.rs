//! Site configuration model and the assembled definition the engine consumes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fence;
use crate::locale::LocaleSet;
use crate::page::{push_social_tags, HeadEntry, PageData};
use crate::sitemap::{SitemapConfig, SitemapEntry};
use crate::theme::ThemeConfig;

/// Environment variable selecting the build environment.
pub const ENV_VAR: &str = "BARANADA_ENV";

/// Build environment the site is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildEnv {
    #[default]
    Development,
    Production,
}

impl BuildEnv {
    /// Resolve from the `BARANADA_ENV` environment variable.
    ///
    /// Anything other than `production` (case-insensitive) is a development
    /// build.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(ENV_VAR).ok().as_deref())
    }

    fn from_var(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Icon assets referenced from every page head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    /// Classic favicon path
    pub favicon: String,

    /// SVG icon path, preferred by browsers that support it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            favicon: "/favicon.ico".to_string(),
            svg: Some("/logo.svg".to_string()),
        }
    }
}

/// An external link rendered in the site chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name known to the engine (e.g. "github")
    pub icon: String,
    pub link: String,
}

/// Markdown rendering options passed through to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Show line numbers in code fences
    pub line_numbers: bool,

    /// Highlight theme name
    pub theme: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            theme: "github-dark".to_string(),
        }
    }
}

/// Options for the LLM-friendly text export plugin.
///
/// The plugin itself is external; production assembly registers it with
/// these options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmsExportOptions {
    /// Absolute origin used in generated links; the sitemap hostname when
    /// unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Also emit the full-text variant
    pub full_text: bool,

    /// Glob patterns of pages left out of the export
    pub ignore: Vec<String>,
}

impl Default for LlmsExportOptions {
    fn default() -> Self {
        Self {
            domain: None,
            full_text: true,
            ignore: Vec::new(),
        }
    }
}

/// Errors from loading or validating a site file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read site file: {0}")]
    ReadError(String),

    #[error("Failed to parse site file: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Declarative site configuration, the `site.toml` surface.
///
/// Defaults are the Baranada values; a site file only overrides what it
/// declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, the fallback for composed page titles
    pub title: String,

    /// Hex color for the theme-color meta tag
    pub theme_color: String,

    pub icons: IconSet,

    pub social_links: Vec<SocialLink>,

    pub locales: LocaleSet,

    pub markdown: MarkdownOptions,

    pub sitemap: SitemapConfig,

    pub llms: LlmsExportOptions,

    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Baranada".to_string(),
            theme_color: "#0f766e".to_string(),
            icons: IconSet::default(),
            social_links: vec![SocialLink {
                icon: "github".to_string(),
                link: "https://github.com/baranada/baranada".to_string(),
            }],
            locales: LocaleSet::default(),
            markdown: MarkdownOptions::default(),
            sitemap: SitemapConfig::default(),
            llms: LlmsExportOptions::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load the site file at `path`, falling back to the built-in defaults
    /// when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no site file at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded site configuration from {}", path.display());
        Ok(config)
    }

    /// Check the declared values for mistakes the engine would otherwise
    /// surface much later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("site title is empty".to_string()));
        }

        if !is_hex_color(&self.theme_color) {
            return Err(ConfigError::Invalid(format!(
                "theme color must be a hex value: {}",
                self.theme_color
            )));
        }

        let hostname = &self.sitemap.hostname;
        if !hostname.starts_with("https://") && !hostname.starts_with("http://") {
            return Err(ConfigError::Invalid(format!(
                "sitemap hostname must be an http(s) origin: {hostname}"
            )));
        }

        let mut seen = Vec::new();
        for locale in self.locales.iter() {
            if locale.code.is_empty() || locale.label.is_empty() {
                return Err(ConfigError::Invalid(
                    "locale codes and labels must be non-empty".to_string(),
                ));
            }
            if seen.contains(&locale.code.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate locale code: {}",
                    locale.code
                )));
            }
            seen.push(locale.code.as_str());
        }

        if let Some(rule) = &self.locales.rewrite {
            if !rule.strip_prefix.ends_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "rewrite prefix must end with a slash: {}",
                    rule.strip_prefix
                )));
            }
        }

        if self.sitemap.exclude.iter().any(String::is_empty) {
            return Err(ConfigError::Invalid(
                "sitemap exclusion substrings must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Head entries derived from the icon set and theme color, in the order
    /// the engine splices them into every page.
    pub fn head_entries(&self) -> Vec<HeadEntry> {
        let mut head = vec![HeadEntry::link(&[
            ("rel", "icon"),
            ("href", &self.icons.favicon),
        ])];

        if let Some(svg) = &self.icons.svg {
            head.push(HeadEntry::link(&[
                ("rel", "icon"),
                ("type", "image/svg+xml"),
                ("href", svg),
            ]));
        }

        head.push(HeadEntry::meta(&[
            ("name", "theme-color"),
            ("content", &self.theme_color),
        ]));

        head
    }
}

/// The assembled configuration object handed to the engine at build start.
///
/// Assembly happens once; the definition has no lifecycle of its own beyond
/// that single construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDefinition {
    /// Environment this definition was assembled for
    pub env: BuildEnv,

    pub config: SiteConfig,

    /// LLM-friendly text export, registered for production builds only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llms_export: Option<LlmsExportOptions>,
}

impl SiteDefinition {
    /// Assemble the definition for `env`.
    ///
    /// Production enables the text export plugin (defaulting its domain to
    /// the sitemap hostname) and the page metadata transform; development
    /// builds carry neither.
    pub fn assemble(config: SiteConfig, env: BuildEnv) -> Self {
        let llms_export = env.is_production().then(|| {
            let mut options = config.llms.clone();
            if options.domain.is_none() {
                options.domain = Some(config.sitemap.hostname.clone());
            }
            options
        });

        if llms_export.is_some() {
            tracing::debug!("production build: text export and page transform enabled");
        }

        Self {
            env,
            config,
            llms_export,
        }
    }

    /// Apply the social metadata transform to one page.
    ///
    /// A no-op unless the definition was assembled for production; pages
    /// keep whatever head tags they already declare.
    pub fn transform_page(&self, page: &mut PageData) {
        if !self.env.is_production() {
            return;
        }

        let locale = self.config.locales.locale_for_path(&page.relative_path);
        push_social_tags(page, &locale.code, &self.config.title);
    }

    /// Run the sitemap filter over generated entries.
    pub fn filter_sitemap(&self, entries: Vec<SitemapEntry>) -> Vec<SitemapEntry> {
        self.config.sitemap.filter(entries)
    }

    /// Post-process one rendered code fence for `locale_code`.
    pub fn postprocess_fence(&self, html: &str, locale_code: &str) -> String {
        fence::postprocess_fence(html, locale_code)
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_configuration_validates() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn default_round_trips_through_toml() {
        let config = SiteConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn site_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "title = \"Other\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.title, "Other");
        assert_eq!(config.locales, LocaleSet::default());
    }

    #[test]
    fn missing_site_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = SiteConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_site_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "title = [\n").unwrap();

        let result = SiteConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = SiteConfig::default();
        config.title = String::new();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.theme_color = "teal".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.sitemap.hostname = "baranada.dev".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.locales.translations[0].code = "en".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.locales.rewrite.as_mut().unwrap().strip_prefix = "en".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.sitemap.exclude.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn head_entries_cover_icons_and_theme_color() {
        let config = SiteConfig::default();
        let head = config.head_entries();

        assert_eq!(head.len(), 3);
        assert_eq!(head[0].attr("rel"), Some("icon"));
        assert_eq!(head[0].attr("href"), Some("/favicon.ico"));
        assert_eq!(head[1].attr("type"), Some("image/svg+xml"));
        assert_eq!(head[2].attr("name"), Some("theme-color"));
        assert_eq!(head[2].attr("content"), Some("#0f766e"));
    }

    #[test]
    fn head_entries_skip_missing_svg_icon() {
        let mut config = SiteConfig::default();
        config.icons.svg = None;

        assert_eq!(config.head_entries().len(), 2);
    }

    #[test]
    fn production_assembly_enables_text_export() {
        let definition = SiteDefinition::assemble(SiteConfig::default(), BuildEnv::Production);

        let export = definition.llms_export.as_ref().unwrap();
        assert_eq!(export.domain.as_deref(), Some("https://baranada.dev"));
        assert!(export.full_text);
    }

    #[test]
    fn development_assembly_carries_no_text_export() {
        let definition = SiteDefinition::assemble(SiteConfig::default(), BuildEnv::Development);

        assert!(definition.llms_export.is_none());
    }

    #[test]
    fn configured_export_domain_is_kept() {
        let mut config = SiteConfig::default();
        config.llms.domain = Some("https://docs.baranada.dev".to_string());

        let definition = SiteDefinition::assemble(config, BuildEnv::Production);

        assert_eq!(
            definition.llms_export.unwrap().domain.as_deref(),
            Some("https://docs.baranada.dev")
        );
    }

    #[test]
    fn transform_is_skipped_outside_production() {
        let definition = SiteDefinition::assemble(SiteConfig::default(), BuildEnv::Development);
        let mut page = PageData {
            relative_path: "guide/install.md".to_string(),
            ..Default::default()
        };

        definition.transform_page(&mut page);

        assert!(page.frontmatter.head.is_none());
    }

    #[test]
    fn transform_tags_pages_with_their_locale() {
        let definition = SiteDefinition::assemble(SiteConfig::default(), BuildEnv::Production);
        let mut page = PageData {
            title: "نصب".to_string(),
            relative_path: "fa/guide/install.md".to_string(),
            ..Default::default()
        };

        definition.transform_page(&mut page);

        let head = page.frontmatter.head.as_ref().unwrap();
        assert_eq!(head.len(), 2);
        assert_eq!(head[0].attr("content"), Some("fa"));
        assert_eq!(head[1].attr("content"), Some("نصب | Baranada"));
    }

    #[test]
    fn definition_filters_sitemap_entries() {
        let definition = SiteDefinition::assemble(SiteConfig::default(), BuildEnv::Production);
        let filtered = definition.filter_sitemap(vec![
            SitemapEntry::new("https://baranada.dev/guide/"),
            SitemapEntry::new("https://baranada.dev/migration/from-v1"),
        ]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://baranada.dev/guide/");
    }

    #[test]
    fn build_env_parses_production_only() {
        assert_eq!(BuildEnv::from_var(Some("production")), BuildEnv::Production);
        assert_eq!(BuildEnv::from_var(Some("PRODUCTION")), BuildEnv::Production);
        assert_eq!(BuildEnv::from_var(Some("staging")), BuildEnv::Development);
        assert_eq!(BuildEnv::from_var(None), BuildEnv::Development);
    }
}
