//! Site definition for the Baranada documentation.
//!
//! This crate declares the metadata, locales, markdown hooks, sitemap
//! filtering, and page transform the documentation engine consumes at build
//! start. The engine owns parsing, routing, and rendering; this crate owns
//! the declared values and a handful of small hook functions:
//!
//! - [`fence::postprocess_fence`] runs once per rendered code block,
//! - [`SiteDefinition::transform_page`] injects social sharing tags on
//!   production builds,
//! - [`SitemapConfig::filter`] trims generated sitemap entries.
//!
//! [`SiteDefinition::assemble`] produces the one object handed across the
//! engine boundary.

pub mod config;
pub mod fence;
pub mod locale;
pub mod page;
pub mod sitemap;
pub mod theme;

pub use config::{
    BuildEnv, ConfigError, IconSet, LlmsExportOptions, MarkdownOptions, SiteConfig,
    SiteDefinition, SocialLink,
};
pub use fence::{localize_copy_button, postprocess_fence, restore_escaped_fences};
pub use locale::{
    copy_button_label, Locale, LocaleSet, RewriteRule, TextDirection, DEFAULT_COPY_LABEL,
};
pub use page::{composed_title, push_social_tags, Frontmatter, HeadEntry, HeadTag, PageData};
pub use sitemap::{SitemapConfig, SitemapEntry};
pub use theme::{EditLink, NavItem, SearchProvider, SidebarGroup, ThemeConfig};
