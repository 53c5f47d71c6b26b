//! Locale declarations and translated UI labels.

use serde::{Deserialize, Serialize};

use crate::theme::NavItem;

/// Label of the code fence copy button when no translation applies.
pub const DEFAULT_COPY_LABEL: &str = "Copy Code";

/// Translated copy button label for a short locale code.
///
/// Total over all inputs: codes without a translation fall back to the
/// default English label.
pub fn copy_button_label(code: &str) -> &'static str {
    match code {
        "es" => "Copiar código",
        "fa" => "کپی کد",
        "ko" => "코드 복사",
        "pt" => "Copiar código",
        "ru" => "Скопировать код",
        "zh" => "复制代码",
        _ => DEFAULT_COPY_LABEL,
    }
}

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A declared site locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    /// Short code used in URL prefixes and label lookups (e.g. "fa")
    pub code: String,

    /// Display label shown in the language switcher
    pub label: String,

    /// BCP 47 language tag emitted on the page
    pub lang: String,

    /// Writing direction
    #[serde(default)]
    pub dir: TextDirection,

    /// Navigation override for this locale's pages
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

/// Rewrites one locale's source paths onto the site root.
///
/// The default locale's sources live under their own prefix (e.g. `en/`),
/// but its pages are served without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Source prefix to strip, including the trailing slash
    pub strip_prefix: String,
}

impl RewriteRule {
    /// Strip the configured prefix from `path` when present.
    pub fn rewrite<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(&self.strip_prefix).unwrap_or(path)
    }
}

/// The locales a site declares: one default plus translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleSet {
    /// Locale served from the site root
    pub default: Locale,

    /// Additional translations, served under their code as a path prefix
    #[serde(default)]
    pub translations: Vec<Locale>,

    /// Rewrite applied to the default locale's source paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<RewriteRule>,
}

impl LocaleSet {
    /// Locale owning `path`, matched on the leading path segment.
    ///
    /// Paths outside every translation prefix belong to the default locale.
    pub fn locale_for_path(&self, path: &str) -> &Locale {
        let normalized = path.trim_start_matches('/');
        self.translations
            .iter()
            .find(|locale| match normalized.strip_prefix(locale.code.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            })
            .unwrap_or(&self.default)
    }

    /// All declared locales, default first.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        std::iter::once(&self.default).chain(self.translations.iter())
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            default: Locale {
                code: "en".to_string(),
                label: "English".to_string(),
                lang: "en-US".to_string(),
                dir: TextDirection::Ltr,
                nav: Vec::new(),
            },
            translations: vec![Locale {
                code: "fa".to_string(),
                label: "فارسی".to_string(),
                lang: "fa-IR".to_string(),
                dir: TextDirection::Rtl,
                nav: vec![
                    NavItem {
                        text: "راهنما".to_string(),
                        link: "/fa/guide/".to_string(),
                    },
                    NavItem {
                        text: "مرجع".to_string(),
                        link: "/fa/reference/".to_string(),
                    },
                ],
            }],
            rewrite: Some(RewriteRule {
                strip_prefix: "en/".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_supported_codes() {
        for code in ["es", "fa", "ko", "pt", "ru", "zh"] {
            let label = copy_button_label(code);
            assert!(!label.is_empty());
            assert_ne!(label, DEFAULT_COPY_LABEL, "missing translation for {code}");
        }
    }

    #[test]
    fn unknown_codes_use_default_label() {
        assert_eq!(copy_button_label("de"), DEFAULT_COPY_LABEL);
        assert_eq!(copy_button_label(""), DEFAULT_COPY_LABEL);
        assert_eq!(copy_button_label("en"), DEFAULT_COPY_LABEL);
    }

    #[test]
    fn matches_locale_by_path_segment() {
        let locales = LocaleSet::default();

        assert_eq!(locales.locale_for_path("fa/guide/intro.md").code, "fa");
        assert_eq!(locales.locale_for_path("/fa/guide/intro.md").code, "fa");
        assert_eq!(locales.locale_for_path("fa").code, "fa");
        assert_eq!(locales.locale_for_path("guide/intro.md").code, "en");
    }

    #[test]
    fn prefix_match_respects_segment_boundary() {
        let locales = LocaleSet::default();

        // "fancy/..." shares the first two letters with "fa" but is not
        // inside the translation.
        assert_eq!(locales.locale_for_path("fancy/intro.md").code, "en");
    }

    #[test]
    fn rewrites_default_locale_to_root() {
        let rule = RewriteRule {
            strip_prefix: "en/".to_string(),
        };

        assert_eq!(rule.rewrite("en/guide/install.md"), "guide/install.md");
        assert_eq!(rule.rewrite("fa/guide/install.md"), "fa/guide/install.md");
        assert_eq!(rule.rewrite(""), "");
    }

    #[test]
    fn iterates_default_first() {
        let locales = LocaleSet::default();
        let codes: Vec<&str> = locales.iter().map(|l| l.code.as_str()).collect();

        assert_eq!(codes, vec!["en", "fa"]);
    }
}
