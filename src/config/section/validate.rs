//! `[docsite.validate]` section configuration.
//!
//! Configuration for the `docsite validate` command, which checks nav and
//! sidebar links against the Markdown content.
//!
//! # Example
//!
//! ```toml
//! [docsite.validate]
//! enable = true       # Check that link targets exist
//! fragments = true    # Also check #anchors against page headings
//! orphans = false     # Warn about pages no link reaches
//! level = "error"     # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Enable link target validation.
    pub enable: bool,

    /// Validate fragment anchors against page headings.
    pub fragments: bool,

    /// Report Markdown pages that no nav or sidebar link reaches.
    pub orphans: bool,

    /// How to treat validation failures: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            fragments: true,
            orphans: false,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation failure level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat failures as errors (exit with non-zero code).
    #[default]
    Error,
    /// Treat failures as warnings (report but don't fail).
    Warn,
}

impl ValidateLevel {
    /// Check if this level should cause build failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
