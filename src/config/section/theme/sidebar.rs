//! `themeConfig.sidebar`: path prefix → ordered sidebar groups.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.sidebar."/patterns/"]]
//! text = "Patterns"
//! items = [
//!   { text = "Zero/Few-Shot", link = "/patterns/#zero-few-shot" },
//!   { text = "Roles & Style", link = "/patterns/#roles-style" },
//! ]
//! ```
//!
//! Keys are kept in authored order so exports are stable, but two sidebars
//! with the same keys and groups compare equal regardless of key order.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::route::ensure_starting_slash;

/// A titled, ordered cluster of page links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Links in display order.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// One sidebar key and the groups shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SidebarEntry {
    prefix: String,
    groups: Vec<SidebarGroup>,
}

/// Mapping from URL path prefix to sidebar groups.
#[derive(Debug, Clone, Default, Eq)]
pub struct Sidebar {
    entries: Vec<SidebarEntry>,
}

impl Sidebar {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add groups under `prefix`, replacing any groups already stored there.
    #[cfg(test)]
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|e| e.prefix == prefix) {
            Some(entry) => entry.groups = groups,
            None => self.entries.push(SidebarEntry { prefix, groups }),
        }
    }

    /// Builder-style [`Sidebar::insert`].
    #[cfg(test)]
    pub fn with(mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        self.insert(prefix, groups);
        self
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|e| e.prefix == prefix)
            .map(|e| e.groups.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in authored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.prefix.as_str())
    }

    /// `(prefix, groups)` pairs in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.entries
            .iter()
            .map(|e| (e.prefix.as_str(), e.groups.as_slice()))
    }

    /// Find the sidebar shown on `page_path`.
    ///
    /// Both the page path and each key get a leading `/`. Keys are tried
    /// deepest first (most `/` separators); keys of equal depth keep their
    /// authored order. The first key that prefixes the page path wins.
    /// `None` means no sidebar is rendered.
    pub fn resolve(&self, page_path: &str) -> Option<(&str, &[SidebarGroup])> {
        let page_path = ensure_starting_slash(page_path);

        let mut candidates: Vec<(&SidebarEntry, std::borrow::Cow<'_, str>)> = self
            .entries
            .iter()
            .map(|e| (e, ensure_starting_slash(&e.prefix)))
            .collect();
        // Stable: equal depths stay in authored order
        candidates.sort_by(|(_, a), (_, b)| depth(b).cmp(&depth(a)));

        candidates
            .into_iter()
            .find(|(_, prefix)| page_path.starts_with(prefix.as_ref()))
            .map(|(e, _)| (e.prefix.as_str(), e.groups.as_slice()))
    }

    /// Validate keys, groups and every item link.
    ///
    /// # Checks
    /// - keys must be non-empty and start with `/`
    /// - keys without a trailing `/` also match sibling paths (warning)
    /// - groups without items render as empty headings (warning)
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (prefix, groups) in self.iter() {
            let key_field = field.key(prefix);

            if prefix.is_empty() {
                diag.error(key_field.clone(), "sidebar key is empty");
            } else if !prefix.starts_with('/') {
                diag.error_with_hint(
                    key_field.clone(),
                    format!("sidebar key '{prefix}' is not a site path"),
                    format!("use \"/{prefix}\""),
                );
            } else if !prefix.ends_with('/') {
                diag.warn(
                    key_field.clone(),
                    format!(
                        "key '{prefix}' also matches sibling paths such as '{prefix}s'; add a trailing '/'"
                    ),
                );
            }

            for (i, group) in groups.iter().enumerate() {
                let group_field = key_field.index(i);
                if group.text.trim().is_empty() {
                    diag.warn(group_field.field("text"), "group heading is empty");
                }
                if group.items.is_empty() {
                    diag.warn(group_field.field("items"), "group has no items");
                }
                for (j, item) in group.items.iter().enumerate() {
                    item.validate(&group_field.field("items").index(j), diag);
                }
            }
        }
    }
}

/// Number of path separators, used to try deeper keys first.
fn depth(prefix: &str) -> usize {
    prefix.matches('/').count()
}

impl PartialEq for Sidebar {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.prefix) == Some(e.groups.as_slice()))
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prefix, &entry.groups)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SidebarVisitor)
    }
}

struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = Sidebar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from path prefix to sidebar groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Sidebar, A::Error> {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some(prefix) = access.next_key::<String>()? {
            if !seen.insert(prefix.clone()) {
                return Err(de::Error::custom(format_args!(
                    "duplicate sidebar key `{prefix}`"
                )));
            }
            let groups = access.next_value::<Vec<SidebarGroup>>()?;
            entries.push(SidebarEntry { prefix, groups });
        }

        Ok(Sidebar { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(text: &str, links: &[(&str, &str)]) -> SidebarGroup {
        SidebarGroup::new(
            text,
            links.iter().map(|(t, l)| NavItem::new(*t, *l)).collect(),
        )
    }

    fn sample() -> Sidebar {
        Sidebar::new()
            .with("/", vec![group("Root", &[("Home", "/")])])
            .with("/guide/", vec![group("Guide", &[("Intro", "/guide/")])])
            .with(
                "/guide/advanced/",
                vec![group("Advanced", &[("Deep", "/guide/advanced/")])],
            )
            .with("patterns/", vec![group("Patterns", &[("P", "/patterns/")])])
    }

    #[test]
    fn test_resolve_deepest_prefix_wins() {
        let sidebar = sample();
        let (key, groups) = sidebar.resolve("/guide/advanced/caching").unwrap();
        assert_eq!(key, "/guide/advanced/");
        assert_eq!(groups[0].text, "Advanced");

        let (key, _) = sidebar.resolve("/guide/getting-started").unwrap();
        assert_eq!(key, "/guide/");
    }

    #[test]
    fn test_resolve_adds_leading_slash() {
        let sidebar = sample();
        let (key, _) = sidebar.resolve("patterns/roles").unwrap();
        assert_eq!(key, "patterns/");
        let (key, _) = sidebar.resolve("guide/").unwrap();
        assert_eq!(key, "/guide/");
    }

    #[test]
    fn test_resolve_falls_back_to_root() {
        let sidebar = sample();
        let (key, _) = sidebar.resolve("/changelog").unwrap();
        assert_eq!(key, "/");
    }

    #[test]
    fn test_resolve_equal_depth_keeps_authored_order() {
        let short_first = Sidebar::new().with("/g", vec![]).with("/guide", vec![]);
        assert_eq!(short_first.resolve("/guide-x").unwrap().0, "/g");

        let long_first = Sidebar::new().with("/guide", vec![]).with("/g", vec![]);
        assert_eq!(long_first.resolve("/guide-x").unwrap().0, "/guide");
    }

    #[test]
    fn test_resolve_no_match() {
        let sidebar = Sidebar::new().with("/guide/", vec![]);
        assert!(sidebar.resolve("/evaluation/").is_none());
        assert!(Sidebar::new().resolve("/").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut sidebar = Sidebar::new().with("/a/", vec![group("Old", &[])]);
        sidebar.insert("/a/", vec![group("New", &[])]);
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar.get("/a/").unwrap()[0].text, "New");
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let a = Sidebar::new().with("/a/", vec![]).with("/b/", vec![]);
        let b = Sidebar::new().with("/b/", vec![]).with("/a/", vec![]);
        assert_eq!(a, b);
        assert_ne!(a, Sidebar::new().with("/a/", vec![]));
    }

    #[test]
    fn test_json_keeps_authored_order() {
        let json = r#"{"/z/": [], "/a/": [], "/m/": []}"#;
        let sidebar: Sidebar = serde_json::from_str(json).unwrap();
        assert_eq!(sidebar.keys().collect::<Vec<_>>(), ["/z/", "/a/", "/m/"]);
        assert_eq!(
            serde_json::to_string(&sidebar).unwrap(),
            r#"{"/z/":[],"/a/":[],"/m/":[]}"#
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let json = r#"{"/a/": [], "/a/": []}"#;
        let err = serde_json::from_str::<Sidebar>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate sidebar key `/a/`"));
    }

    #[test]
    fn test_validate_keys() {
        let sidebar = Sidebar::new()
            .with("", vec![])
            .with("guide/", vec![])
            .with("/guide", vec![]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&FieldPath::new("themeConfig.sidebar"), &mut diag);

        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[0].message, "sidebar key is empty");
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use \"/guide/\""));
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].field.as_str(),
            "themeConfig.sidebar./guide"
        );
    }

    #[test]
    fn test_validate_groups_and_items() {
        let sidebar = Sidebar::new().with(
            "/guide/",
            vec![group("", &[("Intro", "")]), group("Empty", &[])],
        );
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&FieldPath::new("themeConfig.sidebar"), &mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.sidebar./guide/[0].items[0].link"
        );
        let warned: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(
            warned,
            [
                "themeConfig.sidebar./guide/[0].text",
                "themeConfig.sidebar./guide/[1].items"
            ]
        );
    }
}
