//! `docsite resolve`: show the sidebar the engine picks for a page.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::{Stream, Style};
use serde::Serialize;

use crate::config::{SidebarGroup, SiteConfig};
use crate::log;
use crate::utils::style::paint_on;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    prefix: &'a str,
    groups: &'a [SidebarGroup],
}

pub fn resolve_page(config: &SiteConfig, path: &str, json: bool) -> Result<()> {
    let resolved = config
        .site
        .theme_config
        .sidebar
        .resolve(path)
        .map(|(prefix, groups)| Resolved { prefix, groups });

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let sidebar = &config.site.theme_config.sidebar;
    match resolved {
        Some(resolved) => print!("{}", render_text(&resolved)),
        None if sidebar.is_empty() => log!("resolve"; "descriptor has no sidebar"),
        None => log!(
            "resolve";
            "no sidebar applies to {} (keys: {})",
            path,
            sidebar.keys().collect::<Vec<_>>().join(", ")
        ),
    }
    Ok(())
}

fn render_text(resolved: &Resolved<'_>) -> String {
    let mut out = String::new();
    let bold = Style::new().bold();
    let _ = writeln!(
        out,
        "{} {}",
        paint_on(Stream::Stdout, "sidebar", bold),
        paint_on(Stream::Stdout, resolved.prefix, Style::new().cyan())
    );
    for group in resolved.groups {
        let _ = writeln!(out, "  {}", paint_on(Stream::Stdout, &group.text, bold));
        for item in &group.items {
            let _ = writeln!(
                out,
                "    {}  {}",
                item.text,
                paint_on(Stream::Stdout, &item.link, Style::new().dimmed())
            );
        }
    }
    out
}
