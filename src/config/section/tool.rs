//! `[docsite]` section: settings for this tool, never exported.
//!
//! # Example
//!
//! ```toml
//! [docsite]
//! content = "docs"
//! output = "docs/.vitepress/config.mjs"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ValidateConfig;

/// Name of the table holding tool settings inside the descriptor file.
pub const TOOL_TABLE: &str = "docsite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Markdown content root (relative to the config file's directory).
    pub content: PathBuf,

    /// Default target for `docsite export`.
    pub output: Option<PathBuf>,

    /// Link checking settings.
    pub validate: ValidateConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            content: "docs".into(),
            output: None,
            validate: ValidateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let (_, tool) = test_parse_config("");
        assert_eq!(tool.content, PathBuf::from("docs"));
        assert!(tool.output.is_none());
    }

    #[test]
    fn test_paths() {
        let (_, tool) = test_parse_config(
            "[docsite]\ncontent = \"site\"\noutput = \"site/.vitepress/config.mjs\"",
        );
        assert_eq!(tool.content, PathBuf::from("site"));
        assert_eq!(
            tool.output,
            Some(PathBuf::from("site/.vitepress/config.mjs"))
        );
    }
}
