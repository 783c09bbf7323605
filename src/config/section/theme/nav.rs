//! `themeConfig.nav` entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Foundations"
//! link = "/foundations/"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LinkKind;

/// A labelled link: a nav bar entry, or an item inside a sidebar group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Visible label.
    pub text: String,

    /// Site-relative path (`/patterns/#roles-style`) or external URL.
    pub link: String,
}

impl NavItem {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate label and link.
    ///
    /// # Checks
    /// - `link` must be non-empty
    /// - `link` must be site-relative, a fragment, or an external URL
    /// - `http(s)` links must parse and have a host
    /// - empty `text` or a bare `#` link is suspicious (warning)
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.warn(field.field("text"), "label is empty");
        }

        let link_field = field.field("link");
        match LinkKind::parse(&self.link) {
            LinkKind::Relative("") => {
                diag.error(link_field, "link is empty");
            }
            LinkKind::Relative(link) => {
                diag.error_with_hint(
                    link_field,
                    format!("link '{link}' is not site-relative"),
                    format!(
                        "prefix with a slash, e.g.: \"/{}\"",
                        link.trim_start_matches("./")
                    ),
                );
            }
            LinkKind::External(link) if LinkKind::is_http(link) => {
                validate_http_link(link, link_field, diag);
            }
            LinkKind::Fragment("") => {
                diag.warn(link_field, "'#' names no anchor; the link goes nowhere");
            }
            LinkKind::External(_) | LinkKind::Fragment(_) | LinkKind::SiteRoot(_) => {}
        }
    }
}

/// URL format check using url crate for strict validation
fn validate_http_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(link) {
        Ok(parsed) => {
            if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(item: &NavItem) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        item.validate(&FieldPath::new("themeConfig.nav").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_site_root_link_ok() {
        let diag = check(&NavItem::new("Patterns", "/patterns/"));
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_link_is_error() {
        let diag = check(&NavItem::new("Home", ""));
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].link");
        assert_eq!(diag.errors()[0].message, "link is empty");
    }

    #[test]
    fn test_relative_link_is_error_with_hint() {
        let diag = check(&NavItem::new("Patterns", "./patterns/"));
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("prefix with a slash, e.g.: \"/patterns/\"")
        );
    }

    #[test]
    fn test_external_links() {
        assert!(!check(&NavItem::new("GitHub", "https://github.com/x")).has_errors());
        assert!(!check(&NavItem::new("Mail", "mailto:team@example.com")).has_errors());
        assert!(check(&NavItem::new("Broken", "https://")).has_errors());
    }

    #[test]
    fn test_bare_hash_is_warning() {
        let diag = check(&NavItem::new("Top", "#"));
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field.as_str(), "themeConfig.nav[0].link");
        assert!(check(&NavItem::new("Top", "#top")).warnings().is_empty());
    }

    #[test]
    fn test_empty_text_is_warning() {
        let diag = check(&NavItem::new(" ", "/"));
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field.as_str(), "themeConfig.nav[0].text");
    }
}
