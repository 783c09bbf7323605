//! Starter content creation.
//!
//! Writes one Markdown page per site-root link in the starter descriptor,
//! with a heading for every sidebar anchor, so a fresh site validates clean.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::SiteDescriptor;
use crate::core::{LinkKind, page::source_candidates};
use crate::utils::path::route::split_path_fragment;

/// A page to create: title plus section headings in order.
#[derive(Debug, Default, PartialEq, Eq)]
struct StarterPage {
    title: Option<String>,
    sections: Vec<String>,
}

/// Create starter pages under `content_dir`, skipping files that exist.
///
/// Returns the paths that were written.
pub fn create_structure(content_dir: &Path, site: &SiteDescriptor) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(content_dir)
        .with_context(|| format!("Failed to create directory '{}'", content_dir.display()))?;

    let mut written = Vec::new();
    for (rel, page) in plan_pages(site) {
        let path = content_dir.join(&rel);
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&path, render(&page))
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

/// Map every site-root link to its source file, in first-seen order.
fn plan_pages(site: &SiteDescriptor) -> Vec<(PathBuf, StarterPage)> {
    let mut order: Vec<PathBuf> = Vec::new();
    let mut pages: FxHashMap<PathBuf, StarterPage> = FxHashMap::default();

    for link in site.links() {
        let LinkKind::SiteRoot(url) = LinkKind::parse(&link.item.link) else {
            continue;
        };
        let (path, fragment) = split_path_fragment(url);
        let Some(rel) = source_candidates(path).into_iter().next() else {
            continue;
        };

        let page = pages.entry(rel.clone()).or_insert_with(|| {
            order.push(rel);
            StarterPage::default()
        });
        if fragment.is_empty() {
            page.title.get_or_insert_with(|| link.item.text.clone());
        } else if !page.sections.contains(&link.item.text) {
            page.sections.push(link.item.text.clone());
        }
    }

    order
        .into_iter()
        .filter_map(|rel| pages.remove(&rel).map(|page| (rel, page)))
        .collect()
}

fn render(page: &StarterPage) -> String {
    let mut out = format!("# {}\n", page.title.as_deref().unwrap_or("Untitled"));
    for section in &page.sections {
        out.push_str(&format!("\n## {section}\n"));
    }
    out
}
