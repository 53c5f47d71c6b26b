//! Theme surface declared for the engine.
//!
//! Everything here is passed through at the initialization boundary; this
//! crate never interprets it beyond validation.

use serde::{Deserialize, Serialize};

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A sidebar section with its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,

    #[serde(default)]
    pub collapsed: bool,

    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Where page edits are made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditLink {
    /// Link pattern with a `:path` placeholder for the page source path
    pub pattern: String,

    /// Link text
    pub text: String,
}

impl EditLink {
    /// Resolve the pattern for one page source path.
    pub fn resolve(&self, path: &str) -> String {
        self.pattern.replace(":path", path)
    }
}

/// Search backend the theme wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    #[default]
    Local,
    None,
}

/// Theme settings passed through to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Footer line rendered on every page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_message: Option<String>,

    pub search: SearchProvider,

    /// Top navigation for the default locale
    pub nav: Vec<NavItem>,

    /// Sidebar groups for the default locale
    pub sidebar: Vec<SidebarGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            footer_message: Some("Released under the MIT License.".to_string()),
            search: SearchProvider::Local,
            nav: vec![
                NavItem::new("Guide", "/guide/"),
                NavItem::new("Reference", "/reference/"),
            ],
            sidebar: vec![
                SidebarGroup {
                    text: "Introduction".to_string(),
                    collapsed: false,
                    items: vec![
                        NavItem::new("What is Baranada?", "/guide/what-is-baranada"),
                        NavItem::new("Getting Started", "/guide/getting-started"),
                    ],
                },
                SidebarGroup {
                    text: "Migration".to_string(),
                    collapsed: true,
                    items: vec![NavItem::new("From 1.x", "/migration/from-v1")],
                },
            ],
            edit_link: Some(EditLink {
                pattern: "https://github.com/baranada/baranada/edit/main/docs/:path".to_string(),
                text: "Edit this page".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_edit_link_pattern() {
        let link = EditLink {
            pattern: "https://example.com/edit/main/docs/:path".to_string(),
            text: "Edit".to_string(),
        };

        assert_eq!(
            link.resolve("guide/install.md"),
            "https://example.com/edit/main/docs/guide/install.md"
        );
    }

    #[test]
    fn default_theme_declares_navigation() {
        let theme = ThemeConfig::default();

        assert!(!theme.nav.is_empty());
        assert!(!theme.sidebar.is_empty());
        assert_eq!(theme.search, SearchProvider::Local);
    }

    #[test]
    fn sidebar_groups_deserialize_with_defaults() {
        let toml = r#"
text = "Guide"
items = [{ text = "Install", link = "/guide/install" }]
"#;
        let group: SidebarGroup = toml::from_str(toml).unwrap();

        assert!(!group.collapsed);
        assert_eq!(group.items.len(), 1);
    }
}
