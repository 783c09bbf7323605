//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::Style;

use crate::utils::{paint, plural_s};

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Descriptor field holding the link (`themeConfig.nav[0].link`).
    pub field: String,
    /// The link that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Link check results, grouped by where each link is declared
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Broken links, grouped by origin (`nav`, `sidebar /patterns/`).
    pub links: BTreeMap<String, Vec<ValidationError>>,
    /// Content pages no link reaches (relative to the content root).
    pub orphans: Vec<String>,
}

impl ValidationReport {
    /// Add a broken link.
    pub fn add_link(&mut self, origin: String, field: String, link: String, reason: String) {
        self.links.entry(origin).or_default().push(ValidationError {
            field,
            target: link,
            reason,
        });
    }

    /// Add a page without inbound links.
    pub fn add_orphan(&mut self, page: String) {
        self.orphans.push(page);
    }

    /// Total broken link count.
    pub fn link_error_count(&self) -> usize {
        self.links.values().map(|v| v.len()).sum()
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    /// Order entries deterministically (pages are checked in parallel).
    pub fn sort(&mut self) {
        for errs in self.links.values_mut() {
            errs.sort_by(|a, b| a.target.cmp(&b.target));
        }
        self.orphans.sort();
    }

    /// Print the full report to stderr (links -> orphans).
    pub fn print(&self) {
        self.print_links();
        self.print_orphans();
    }

    fn print_links(&self) {
        if self.links.is_empty() {
            return;
        }
        eprintln!();

        let group_count = self.links.len();
        let error_count = self.link_error_count();

        // Section header
        eprintln!(
            "{} {}",
            paint("links", Style::new().red().bold()),
            paint(
                format_args!(
                    "({group_count} source{}, {error_count} error{})",
                    plural_s(group_count),
                    plural_s(error_count)
                ),
                Style::new().dimmed()
            )
        );

        let dimmed = Style::new().dimmed();
        for (origin, errs) in &self.links {
            eprintln!(
                "{}{}{}",
                paint("[", dimmed),
                paint(origin, Style::new().cyan()),
                paint("]", dimmed)
            );
            for e in errs {
                eprintln!(
                    "{} {} {}",
                    paint("→", Style::new().red()),
                    e.target,
                    paint(format_args!("{} ({})", e.reason, e.field), dimmed)
                );
            }
        }
    }

    fn print_orphans(&self) {
        if self.orphans.is_empty() {
            return;
        }
        eprintln!();
        eprintln!(
            "{} {}",
            paint("orphans", Style::new().yellow().bold()),
            paint(
                format_args!(
                    "({} page{} not linked from nav or sidebar)",
                    self.orphans.len(),
                    plural_s(self.orphans.len())
                ),
                Style::new().dimmed()
            )
        );
        for page in &self.orphans {
            eprintln!("{} {}", paint("→", Style::new().yellow()), page);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.link_error_count();
        let orphans = self.orphan_count();

        if errors == 0 && orphans == 0 {
            return write!(f, "{}", paint("all checks passed", Style::new().green()));
        }

        let dimmed = Style::new().dimmed();
        write!(f, "{}", paint("found", dimmed))?;
        if errors > 0 {
            write!(
                f,
                " {} {}",
                paint(errors, Style::new().red().bold()),
                paint(format_args!("broken link{}", plural_s(errors)), dimmed)
            )?;
        }
        if errors > 0 && orphans > 0 {
            write!(f, "{}", paint(",", dimmed))?;
        }
        if orphans > 0 {
            write!(
                f,
                " {} {}",
                paint(orphans, Style::new().yellow().bold()),
                paint(format_args!("orphan page{}", plural_s(orphans)), dimmed)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_origin() {
        let mut report = ValidationReport::default();
        report.add_link(
            "sidebar /patterns/".into(),
            "themeConfig.sidebar./patterns/[0].items[0].link".into(),
            "/patterns/#x".into(),
            "anchor not found".into(),
        );
        report.add_link(
            "nav".into(),
            "themeConfig.nav[1].link".into(),
            "/missing/".into(),
            "page not found".into(),
        );
        report.add_link(
            "nav".into(),
            "themeConfig.nav[2].link".into(),
            "/gone".into(),
            "page not found".into(),
        );

        assert_eq!(report.link_error_count(), 3);
        let origins: Vec<_> = report.links.keys().map(String::as_str).collect();
        assert_eq!(origins, ["nav", "sidebar /patterns/"]);
        assert_eq!(report.links["nav"].len(), 2);

        report.sort();
        let nav: Vec<_> = report.links["nav"].iter().map(|e| e.target.as_str()).collect();
        assert_eq!(nav, ["/gone", "/missing/"]);
        assert_eq!(report.links["nav"][0].field, "themeConfig.nav[2].link");
    }

    #[test]
    fn test_summary() {
        owo_colors::set_override(false);

        let mut report = ValidationReport::default();
        assert_eq!(report.to_string(), "all checks passed");

        report.add_link(
            "nav".into(),
            "themeConfig.nav[1].link".into(),
            "/missing/".into(),
            "page not found".into(),
        );
        assert_eq!(report.to_string(), "found 1 broken link");

        report.add_orphan("drafts.md".into());
        report.add_orphan("old/index.md".into());
        assert_eq!(report.to_string(), "found 1 broken link, 2 orphan pages");
    }
}
