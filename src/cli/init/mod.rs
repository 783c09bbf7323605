//! Site initialization module.
//!
//! Writes the starter descriptor and matching content pages.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Starter content pages
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{
    cli::Cli,
    config::{SiteConfig, detect_format},
    log,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::path::Path;

use validate::InitMode;

/// Create a new site with the starter descriptor
///
/// # Steps
/// 1. Validate target directory
/// 2. Write the config file
/// 3. Write starter pages under the content directory
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(cli: &Cli, name: Option<&Path>, dry_run: bool) -> Result<()> {
    let format = detect_format(&cli.config);
    // Forward slashes keep the value a plain TOML/JSON string on every platform
    let content = cli
        .content
        .as_deref()
        .map(|dir| dir.to_string_lossy().replace('\\', "/"));
    let rendered = config::generate_config_template(format, content.as_deref())?;

    if dry_run {
        print!("{rendered}");
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    validate::validate_target(&root, &cli.config, mode)?;

    std::fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    config::write_config(&root, &cli.config, &rendered)?;

    // Pages go wherever the written config points
    let starter = SiteConfig::from_str(&rendered, format)?;
    let content_dir = root.join(&starter.tool.content);
    let written = structure::create_structure(&content_dir, &starter.site)?;

    log!(
        "init";
        "wrote {} and {} under {}",
        cli.config.display(),
        plural_count(written.len(), "page"),
        starter.tool.content.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_in_named_dir() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("notes");
        let cli = Cli::parse_from(["docsite", "init"]);

        new_site(&cli, Some(&target), false).unwrap();
        assert!(target.join("docsite.toml").is_file());
        assert!(target.join("docs/index.md").is_file());
        assert!(target.join("docs/patterns/index.md").is_file());

        // Second run refuses to overwrite
        assert!(new_site(&cli, Some(&target), false).is_err());
    }

    #[test]
    fn test_new_site_with_content_dir() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("notes");
        let cli = Cli::parse_from(["docsite", "-c", "site", "init"]);

        new_site(&cli, Some(&target), false).unwrap();
        assert!(target.join("site/index.md").is_file());
        assert!(!target.join("docs").exists());

        let config = SiteConfig::from_path(&target.join("docsite.toml")).unwrap();
        assert_eq!(config.tool.content, Path::new("site"));
    }

    #[test]
    fn test_new_site_json_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("notes");
        let cli = Cli::parse_from(["docsite", "-C", "site.json", "init"]);

        new_site(&cli, Some(&target), false).unwrap();
        let config = SiteConfig::from_path(&target.join("site.json")).unwrap();
        assert_eq!(config.format, crate::config::ConfigFormat::Json);
        assert_eq!(config.site.title, "Prompt Lab");
        assert!(config.validate().is_ok());
        assert!(target.join("docs/patterns/index.md").is_file());
    }
}
