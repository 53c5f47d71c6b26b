//! Page data records and the social metadata transform.
//!
//! The engine hands each page's data record to the transform after parsing
//! its frontmatter and before rendering the head. Everything here mirrors
//! the shape the engine uses; the only behavior this crate owns is the
//! composed title and the two appended meta tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of tag a head entry declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadTag {
    Meta,
    Link,
    Script,
}

/// One declared head tag: kind plus attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadEntry {
    pub tag: HeadTag,

    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl HeadEntry {
    fn with_attrs(tag: HeadTag, pairs: &[(&str, &str)]) -> Self {
        Self {
            tag,
            attrs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// A `<meta>` declaration with the given attributes.
    pub fn meta(pairs: &[(&str, &str)]) -> Self {
        Self::with_attrs(HeadTag::Meta, pairs)
    }

    /// A `<link>` declaration with the given attributes.
    pub fn link(pairs: &[(&str, &str)]) -> Self {
        Self::with_attrs(HeadTag::Link, pairs)
    }

    /// Value of one attribute, if declared.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Per-page metadata block, as parsed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Head tags the page declares for itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<HeadEntry>>,

    /// Layout override, if the page declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Remaining page-declared fields, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Data record of one page, as the engine hands it to the transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Source path relative to the docs root, before rewrites
    #[serde(default)]
    pub relative_path: String,

    #[serde(default)]
    pub frontmatter: Frontmatter,
}

/// Compose the social sharing title for a page.
///
/// Page title and description are joined with `" | "`; either side falls
/// back to the site default title when the page leaves it empty.
pub fn composed_title(page: &PageData, site_title: &str) -> String {
    let title = if page.title.is_empty() {
        site_title
    } else {
        page.title.as_str()
    };
    let description = if page.description.is_empty() {
        site_title
    } else {
        page.description.as_str()
    };
    format!("{title} | {description}")
}

/// Append the social sharing tags for `page` in place.
///
/// Adds an `og:locale` meta carrying `locale_code` and an `og:title` meta
/// carrying the composed title. The frontmatter head list is created when
/// absent; entries the page already declares are kept.
pub fn push_social_tags(page: &mut PageData, locale_code: &str, site_title: &str) {
    let title = composed_title(page, site_title);
    let head = page.frontmatter.head.get_or_insert_with(Vec::new);

    head.push(HeadEntry::meta(&[
        ("property", "og:locale"),
        ("content", locale_code),
    ]));
    head.push(HeadEntry::meta(&[
        ("property", "og:title"),
        ("content", &title),
    ]));
}
