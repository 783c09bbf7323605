//! `docsite export`: write the descriptor for the docs engine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::{ExportArgs, ExportFormat};
use crate::config::{SiteConfig, SiteDescriptor};
use crate::log;

/// Export the descriptor to the configured target or stdout.
pub fn export_site(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let target: Option<PathBuf> = args
        .output
        .clone()
        .or_else(|| config.tool.output.clone());

    let format = args
        .format
        .unwrap_or_else(|| target.as_deref().map_or(ExportFormat::Json, format_for));

    let rendered = render(&config.site, format, args.pretty)?;

    match target {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", config.root_relative(&path).display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Pick the encoding from a target's extension.
fn format_for(path: &Path) -> ExportFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("js" | "mjs" | "ts" | "mts") => ExportFormat::Module,
        _ => ExportFormat::Json,
    }
}

/// Render the descriptor; output always ends with a newline.
pub fn render(site: &SiteDescriptor, format: ExportFormat, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(site)?
    } else {
        serde_json::to_string(site)?
    };

    Ok(match format {
        ExportFormat::Json => format!("{json}\n"),
        ExportFormat::Module => format!(
            "// Generated by docsite v{}. Edit the descriptor, not this file.\nexport default {json};\n",
            env!("CARGO_PKG_VERSION")
        ),
    })
}
