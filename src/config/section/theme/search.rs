//! `themeConfig.search`: which search backend the engine initializes.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Search backend. The descriptor only names it; indexing is the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built by the engine from rendered pages.
    #[default]
    Local,

    /// Hosted index; credentials live in engine-side config.
    Algolia,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

impl SearchConfig {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.provider == SearchProvider::Algolia {
            diag.hint(
                field.field("provider"),
                "algolia needs appId, apiKey and indexName in the engine config; they are not part of this descriptor",
            );
        }
    }
}
