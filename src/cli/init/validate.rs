//! Pre-initialization validation.
//!
//! Validates target directory state before writing the starter config.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `docsite init` - write into the current directory
    CurrentDir,
    /// `docsite init <name>` - write into a subdirectory (created if missing)
    NewDir,
}

/// Validate the target before initialization.
///
/// # Rules
/// - the config file must not already exist (never overwritten)
/// - the target root, when present, must be a directory
pub fn validate_target(root: &Path, config_file: &Path, mode: InitMode) -> Result<()> {
    if root.exists() && !root.is_dir() {
        bail!("'{}' exists and is not a directory.", root.display());
    }

    let config_path = root.join(config_file);
    if config_path.exists() {
        let hint = match mode {
            InitMode::CurrentDir => "Use `docsite init <name>` to create one in a new subdirectory.",
            InitMode::NewDir => "Choose a different directory or remove the existing file.",
        };
        bail!(
            "'{}' already exists, refusing to overwrite.\n{hint}",
            config_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new("docsite.toml"), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_refused() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docsite.toml"), "title = \"x\"").unwrap();
        for mode in [InitMode::CurrentDir, InitMode::NewDir] {
            let err = validate_target(temp.path(), Path::new("docsite.toml"), mode).unwrap_err();
            assert!(err.to_string().contains("refusing to overwrite"));
        }
    }

    #[test]
    fn test_other_files_allowed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# Notes").unwrap();
        assert!(validate_target(temp.path(), Path::new("docsite.toml"), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_missing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, Path::new("docsite.toml"), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_file_as_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes");
        fs::write(&file, "").unwrap();
        assert!(validate_target(&file, Path::new("docsite.toml"), InitMode::NewDir).is_err());
    }
}
