//! Markdown heading scanning for fragment validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use rustc_hash::FxHashSet;

use crate::utils::slug::slugify;

/// Anchors a page exposes, in document order.
#[derive(Debug, Clone, Default)]
pub struct PageAnchors {
    pub ids: Vec<String>,
    lookup: FxHashSet<String>,
}

impl PageAnchors {
    pub fn contains(&self, anchor: &str) -> bool {
        self.lookup.contains(anchor)
    }

    fn push(&mut self, id: String) {
        self.lookup.insert(id.clone());
        self.ids.push(id);
    }
}

/// Read a Markdown file and collect its heading anchors.
pub fn scan_page(file: &Path) -> Result<PageAnchors> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;
    Ok(heading_anchors(&content))
}

/// Collect heading anchors the way the engine renders them.
///
/// `{#custom-id}` attributes win; other headings are slugified from their
/// text, with the first free `-1`, `-2`, ... suffix appended when the slug
/// is already taken by an earlier heading.
pub fn heading_anchors(content: &str) -> PageAnchors {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut anchors = PageAnchors::default();
    // (custom id, accumulated text) of the heading being read
    let mut current: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(content, opts) {
        match event {
            Event::Start(Tag::Heading { id, .. }) => {
                current = Some((id.map(|id| id.to_string()), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut buf)) = current {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some((id, text)) = current.take() else {
                    continue;
                };
                let id = match id {
                    Some(id) => id,
                    None => unique_slug(slugify(&text), &anchors.lookup),
                };
                anchors.push(id);
            }
            _ => {}
        }
    }

    anchors
}

fn unique_slug(slug: String, taken: &FxHashSet<String>) -> String {
    let mut candidate = slug.clone();
    let mut n = 1;
    while taken.contains(&candidate) {
        candidate = format!("{slug}-{n}");
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_anchors() {
        let md = "\
# Foundations

## Anatomy of a Prompt

## Context & Constraints

### `system` Prompts

Body text with a [link](/x/).
";
        let anchors = heading_anchors(md);
        assert_eq!(
            anchors.ids,
            [
                "foundations",
                "anatomy-of-a-prompt",
                "context-constraints",
                "system-prompts"
            ]
        );
        assert!(anchors.contains("context-constraints"));
        assert!(!anchors.contains("body-text"));
    }

    #[test]
    fn test_custom_ids_and_duplicates() {
        let md = "## Setup {#install}\n\n## Usage\n\n## Usage\n\n## Usage\n";
        let anchors = heading_anchors(md);
        assert_eq!(anchors.ids, ["install", "usage", "usage-1", "usage-2"]);
    }

    #[test]
    fn test_suffix_skips_taken_slugs() {
        let anchors = heading_anchors("## Usage\n\n## Usage 1\n\n## Usage\n");
        assert_eq!(anchors.ids, ["usage", "usage-1", "usage-2"]);

        let anchors = heading_anchors("## Intro {#usage}\n\n## Usage\n");
        assert_eq!(anchors.ids, ["usage", "usage-1"]);
    }

    #[test]
    fn test_front_matter_is_not_a_heading() {
        let md = "---\ntitle: Patterns\n---\n\n# Zero/Few-Shot\n";
        let anchors = heading_anchors(md);
        assert_eq!(anchors.ids, ["zero-few-shot"]);
    }

    #[test]
    fn test_setext_headings() {
        let anchors = heading_anchors("Roles & Style\n-------------\n");
        assert_eq!(anchors.ids, ["roles-style"]);
    }
}
