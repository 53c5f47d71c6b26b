//! Sitemap entry model and filtering.

use serde::{Deserialize, Serialize};

/// One URL record destined for the generated sitemap file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Page URL, absolute or root-relative
    pub url: String,

    /// Last modification timestamp, if the engine knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl SitemapEntry {
    /// Create an entry with no modification timestamp.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
        }
    }
}

/// Sitemap generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Canonical hostname written into entry URLs
    pub hostname: String,

    /// Entries whose URL contains any of these substrings are dropped
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            hostname: "https://baranada.dev".to_string(),
            exclude: vec!["migration".to_string()],
        }
    }
}

impl SitemapConfig {
    /// Whether `url` matches an exclusion substring.
    pub fn is_excluded(&self, url: &str) -> bool {
        self.exclude.iter().any(|needle| url.contains(needle.as_str()))
    }

    /// Drop excluded entries from a generated sitemap, preserving the order
    /// of the remaining ones.
    pub fn filter(&self, entries: Vec<SitemapEntry>) -> Vec<SitemapEntry> {
        entries
            .into_iter()
            .filter(|entry| !self.is_excluded(&entry.url))
            .collect()
    }
}
