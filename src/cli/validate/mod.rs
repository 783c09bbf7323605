//! Link validation command.
//!
//! Checks every site-root nav and sidebar link against the Markdown
//! sources under the content directory: the page must exist and, with
//! `fragments` on, the `#anchor` must match one of its headings.

mod report;
pub(crate) mod scan;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use parking_lot::RwLock;
use percent_encoding::percent_decode_str;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::{ConfigError, LinkRef, SiteConfig};
use crate::core::{LinkKind, page::resolve_page};
use crate::utils::path::route::split_path_fragment;
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

use report::ValidationReport;
use scan::scan_page;

/// Validate descriptor links against the content directory
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let validate_config = &config.tool.validate;
    if !validate_config.enable {
        log!("validate"; "link checking disabled");
        return Ok(());
    }

    let content_dir = config.content_dir();
    if !content_dir.is_dir() {
        bail!(ConfigError::Validation(format!(
            "content directory '{}' not found",
            config.root_relative(content_dir).display()
        )));
    }

    let mut report = check_links(config);
    report.sort();

    let errors = report.link_error_count();
    if errors > 0 {
        log!("validate"; "found {} broken link{}", errors, plural_s(errors));
    } else {
        log!("validate"; "all links valid");
    }

    report.print();
    eprintln!();
    log!("validate"; "{}", report);

    if errors > 0 {
        if validate_config.level.is_error() {
            bail!("validation failed: {}", plural_count(errors, "broken link"));
        }
        log!("warning"; "validation level is 'warn', not failing");
    }

    Ok(())
}

/// Run every enabled check and collect the results.
fn check_links(config: &SiteConfig) -> ValidationReport {
    let validate_config = &config.tool.validate;
    let content_dir = config.content_dir();
    let links = config.site.links();

    let report = RwLock::new(ValidationReport::default());
    let mut reached: FxHashSet<PathBuf> = FxHashSet::default();
    // page -> links into it that carry a fragment
    let mut targets: FxHashMap<PathBuf, Vec<(&LinkRef<'_>, &str)>> = FxHashMap::default();

    let mut checked = 0;
    for link in &links {
        let dest = link.item.link.as_str();
        let LinkKind::SiteRoot(url) = LinkKind::parse(dest) else {
            debug!("validate"; "skipping {}", dest);
            continue;
        };
        checked += 1;

        let (path, fragment) = split_path_fragment(url);
        match resolve_page(content_dir, path) {
            Some(file) => {
                if validate_config.fragments && !fragment.is_empty() {
                    targets.entry(file.clone()).or_default().push((link, fragment));
                }
                reached.insert(file);
            }
            None => report.write().add_link(
                link.origin.to_string(),
                link.field.as_str().to_owned(),
                dest.to_string(),
                "page not found".to_string(),
            ),
        }
    }

    log!(
        "validate";
        "checked {} across {}",
        plural_count(checked, "link"),
        plural_count(reached.len(), "page")
    );

    // Distinct target pages are scanned in parallel
    targets.par_iter().for_each(|(file, links)| {
        let anchors = match scan_page(file) {
            Ok(anchors) => anchors,
            Err(e) => {
                for (link, _) in links {
                    report.write().add_link(
                        link.origin.to_string(),
                        link.field.as_str().to_owned(),
                        link.item.link.clone(),
                        format!("{e:#}"),
                    );
                }
                return;
            }
        };

        for (link, fragment) in links {
            let fragment = percent_decode_str(fragment).decode_utf8_lossy();
            if !anchors.contains(&fragment) {
                let reason = if anchors.ids.is_empty() {
                    format!("anchor '#{fragment}' not found (page has no headings)")
                } else {
                    format!(
                        "anchor '#{fragment}' not found (available: {})",
                        anchors.ids.join(", ")
                    )
                };
                report.write().add_link(
                    link.origin.to_string(),
                    link.field.as_str().to_owned(),
                    link.item.link.clone(),
                    reason,
                );
            }
        }
    });

    if validate_config.orphans {
        for page in find_orphans(content_dir, &reached) {
            report.write().add_orphan(page);
        }
    }

    report.into_inner()
}

/// Markdown pages under `content_dir` (hidden directories skipped) that no
/// link resolved to.
fn find_orphans(content_dir: &Path, reached: &FxHashSet<PathBuf>) -> Vec<String> {
    let mut orphans: Vec<String> = WalkDir::new(content_dir)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .filter(|path| !reached.contains(path))
        .filter_map(|path| {
            let rel = path.strip_prefix(content_dir).ok()?;
            let hidden = rel
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
            (!hidden).then(|| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    orphans.sort();
    orphans
}
