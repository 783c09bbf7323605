//! `themeConfig` section: navigation, sidebar, edit link and search.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! editLink = false
//! search = { provider = "local" }
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[themeConfig.sidebar."/foundations/"]]
//! text = "Foundations"
//! items = [{ text = "Anatomy of a Prompt", link = "/foundations/#anatomy-of-a-prompt" }]
//! ```

mod nav;
mod search;
mod sidebar;

pub use nav::NavItem;
pub use search::{SearchConfig, SearchProvider};
pub use sidebar::{Sidebar, SidebarGroup};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme-level settings read by the engine's default theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Side navigation keyed by path prefix.
    pub sidebar: Sidebar,

    /// Show the "edit this page" affordance.
    pub edit_link: bool,

    pub search: SearchConfig,
}

impl ThemeConfig {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav_field = Self::FIELD.field("nav");
        let mut seen = FxHashSet::default();
        for (i, item) in self.nav.iter().enumerate() {
            let field = nav_field.index(i);
            item.validate(&field, diag);
            if !item.link.is_empty() && !seen.insert(item.link.as_str()) {
                diag.warn(
                    field.field("link"),
                    format!("'{}' already appears in the nav bar", item.link),
                );
            }
        }

        self.sidebar.validate(&Self::FIELD.field("sidebar"), diag);
        self.search.validate(&Self::FIELD.field("search"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let theme = ThemeConfig::default();
        assert!(theme.nav.is_empty());
        assert!(theme.sidebar.is_empty());
        assert!(!theme.edit_link);
        assert_eq!(theme.search.provider, SearchProvider::Local);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(ThemeConfig::default()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["nav", "sidebar", "editLink", "search"]);
    }

    #[test]
    fn test_duplicate_nav_link_warns() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("Home", "/"), NavItem::new("Start", "/")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "themeConfig.nav[1].link");
    }
}
