//! Site descriptor management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor and tool section definitions
//! │   ├── site       # title, description, lastUpdated
//! │   ├── theme/     # themeConfig: nav, sidebar, search
//! │   ├── tool       # [docsite]
//! │   └── validate   # [docsite.validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                    |
//! |----------------------|--------------------------------------------|
//! | top level            | Site metadata handed to the docs engine    |
//! | `[themeConfig]`      | Nav bar, sidebar, edit link, search        |
//! | `[docsite]`          | Content root and export target (not exported) |
//! | `[docsite.validate]` | Link checking settings                     |

pub mod section;
pub mod types;
mod util;

pub use util::detect_format;
use util::find_config_file;

// Re-export from section/
pub use section::{LinkRef, SidebarGroup, SiteDescriptor, ToolConfig, ValidateLevel};
#[cfg(test)]
pub use section::{NavItem, SearchProvider, Sidebar, ThemeConfig};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

pub use section::TOOL_TABLE;

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    debug, log,
};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// On-disk descriptor format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

// ============================================================================
// root configuration
// ============================================================================

/// Loaded descriptor plus the tool settings that travel with it.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// Absolute path to the config file
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    pub root: PathBuf,

    /// Format the config file was parsed as
    pub format: ConfigFormat,

    /// The descriptor handed to the docs engine
    pub site: SiteDescriptor,

    /// `[docsite]` table
    pub tool: ToolConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(
                "config file '{}' not found, run 'docsite init' to create one",
                cli.config.display()
            );
        };
        let mut config = Self::from_path(&config_path)?;
        debug!("config"; "using {} ({:?})", config_path.display(), config.format);

        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Set paths and apply CLI options.
    fn finalize(&mut self, cli: &Cli) {
        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.tool.content, cli.content.as_ref());
        self.tool.content = crate::utils::path::normalize_path(&self.root.join(&self.tool.content));
        if let Some(output) = self.tool.output.take() {
            self.tool.output = Some(self.root.join(output));
        }

        self.apply_command_options(cli);
    }

    /// Parse a descriptor from a string in the given format.
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self> {
        let (config, _) = Self::parse_with_ignored(content, format)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let format = detect_format(path);
        let (mut config, ignored) = Self::parse_with_ignored(&content, format)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse content, collecting any unknown fields.
    ///
    /// The `docsite` table is split off first so tool settings never reach
    /// the descriptor.
    fn parse_with_ignored(content: &str, format: ConfigFormat) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();

        let (site, tool) = match format {
            ConfigFormat::Toml => {
                let mut table: toml::Table = toml::from_str(content).map_err(ConfigError::from)?;
                let tool = table.remove(TOOL_TABLE);

                let site: SiteDescriptor =
                    serde_ignored::deserialize(toml::Value::Table(table), |path| {
                        ignored.push(path.to_string());
                    })
                    .map_err(ConfigError::from)?;
                let tool: ToolConfig = match tool {
                    Some(value) => serde_ignored::deserialize(value, |path| {
                        ignored.push(format!("{TOOL_TABLE}.{path}"));
                    })
                    .map_err(ConfigError::from)?,
                    None => ToolConfig::default(),
                };
                (site, tool)
            }
            ConfigFormat::Json => {
                let content = if content.trim().is_empty() { "{}" } else { content };

                // Straight from the text: a `Value` would silently merge duplicate keys
                let mut de = serde_json::Deserializer::from_str(content);
                let site: SiteDescriptor = serde_ignored::deserialize(&mut de, |path| {
                    let path = path.to_string();
                    if path != TOOL_TABLE {
                        ignored.push(path);
                    }
                })
                .map_err(ConfigError::from)?;
                de.end().map_err(ConfigError::from)?;

                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(ConfigError::from)?;
                let tool: ToolConfig = match value.get(TOOL_TABLE) {
                    Some(value) => serde_ignored::deserialize(value, |path| {
                        ignored.push(format!("{TOOL_TABLE}.{path}"));
                    })
                    .map_err(ConfigError::from)?,
                    None => ToolConfig::default(),
                };
                (site, tool)
            }
        };

        let config = Self {
            format,
            site,
            tool,
            ..Self::default()
        };
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Markdown content root (absolute after loading).
    pub fn content_dir(&self) -> &Path {
        &self.tool.content
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Validate { args } => self.apply_validate_args(args),
            Commands::Init { .. } | Commands::Export { .. } | Commands::Resolve { .. } => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        let validate = &mut self.tool.validate;
        Self::update_option(&mut validate.fragments, args.fragments.as_ref());
        Self::update_option(&mut validate.orphans, args.orphans.as_ref());

        if args.warn_only {
            validate.level = ValidateLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the descriptor.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        debug!(
            "config";
            "descriptor checked: {} error(s), {} warning(s), {} hint(s)",
            diag.errors().len(),
            diag.warnings().len(),
            diag.hints().len()
        );

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a TOML config.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> (SiteDescriptor, ToolConfig) {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    (parsed.site, parsed.tool)
}

/// The built-in starter descriptor, parsed.
#[cfg(test)]
pub fn test_prompt_lab() -> SiteDescriptor {
    use crate::embed::init::{DOCSITE_TOML, InitVars};
    test_parse_config(&DOCSITE_TOML.render(&InitVars::default())).0
}

// ============================================================================
// tests
// ============================================================================
