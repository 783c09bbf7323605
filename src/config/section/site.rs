//! Top-level site descriptor.
//!
//! This is the record handed to the docs engine. Field names and shape are
//! fixed by the engine: everything serializes in camelCase, in declaration
//! order.
//!
//! # Example
//!
//! ```toml
//! title = "Prompt Lab"
//! description = "Notes, lectures & experiments in prompt engineering"
//! lastUpdated = true
//!
//! [themeConfig]
//! editLink = false
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::theme::{NavItem, ThemeConfig};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata plus theme navigation, exactly as the engine reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteDescriptor {
    /// Site title, used for page titles and the nav bar brand.
    pub title: String,

    /// Default `<meta name="description">`.
    pub description: String,

    /// Show a per-page last-modified timestamp.
    pub last_updated: bool,

    pub theme_config: ThemeConfig,
}

impl SiteDescriptor {
    pub const TITLE: FieldPath = FieldPath::new("title");

    /// Validate the whole descriptor, collecting every problem.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "title is empty",
                "set a title, e.g.: title = \"Prompt Lab\"",
            );
        }

        self.theme_config.validate(diag);
    }

    /// Every link in display order: nav bar first, then each sidebar key.
    pub fn links(&self) -> Vec<LinkRef<'_>> {
        let theme = &self.theme_config;
        let nav_field = ThemeConfig::FIELD.field("nav");
        let sidebar_field = ThemeConfig::FIELD.field("sidebar");

        let mut links: Vec<_> = theme
            .nav
            .iter()
            .enumerate()
            .map(|(i, item)| LinkRef {
                origin: LinkOrigin::Nav,
                field: nav_field.index(i).field("link"),
                item,
            })
            .collect();

        for (prefix, groups) in theme.sidebar.iter() {
            for (i, group) in groups.iter().enumerate() {
                for (j, item) in group.items.iter().enumerate() {
                    links.push(LinkRef {
                        origin: LinkOrigin::Sidebar(prefix),
                        field: sidebar_field
                            .key(prefix)
                            .index(i)
                            .field("items")
                            .index(j)
                            .field("link"),
                        item,
                    });
                }
            }
        }

        links
    }
}

/// Where a link is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkOrigin<'a> {
    Nav,
    Sidebar(&'a str),
}

impl fmt::Display for LinkOrigin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nav => f.write_str("nav"),
            Self::Sidebar(prefix) => write!(f, "sidebar {prefix}"),
        }
    }
}

/// A link borrowed from the descriptor, with its origin and field path.
#[derive(Debug, Clone)]
pub struct LinkRef<'a> {
    pub origin: LinkOrigin<'a>,
    pub field: FieldPath,
    pub item: &'a NavItem,
}
