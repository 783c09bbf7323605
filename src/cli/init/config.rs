//! Configuration file generation.
//!
//! Creates the starter descriptor for new sites, as commented TOML or as
//! plain JSON depending on the config file's extension.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{ConfigFormat, SiteConfig, TOOL_TABLE};
use crate::embed::init::{DOCSITE_TOML, InitVars};

/// Generate the starter config.
///
/// `content` is the content directory chosen on the command line; when
/// given it is written as a live `[docsite]` setting.
pub fn generate_config_template(format: ConfigFormat, content: Option<&str>) -> Result<String> {
    let toml = DOCSITE_TOML.render(&InitVars {
        content: content.unwrap_or("docs").to_string(),
        set_content: content.is_some(),
        ..Default::default()
    });

    match format {
        ConfigFormat::Toml => Ok(toml),
        ConfigFormat::Json => {
            let starter = SiteConfig::from_str(&toml, ConfigFormat::Toml)?;
            let mut value = serde_json::to_value(&starter.site)?;
            if let (Some(content), Some(map)) = (content, value.as_object_mut()) {
                map.insert(
                    TOOL_TABLE.to_string(),
                    serde_json::json!({ "content": content }),
                );
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
        }
    }
}

/// Write `rendered` as `root/config_file`
pub fn write_config(root: &Path, config_file: &Path, rendered: &str) -> Result<()> {
    let path = root.join(config_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, rendered)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
