//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::ConfigFormat;

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/docs/patterns/  ← start
/// /home/user/site/docsite.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Pick the descriptor format from the file extension.
pub fn detect_format(path: &Path) -> ConfigFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
        _ => ConfigFormat::Toml,
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/patterns");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docsite.toml"), "title = \"x\"").unwrap();

        let found = find_config_file(Path::new("docsite.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("docsite.toml"));
    }

    #[test]
    fn test_find_config_nearest_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docsite.toml"), "").unwrap();
        fs::write(nested.join("docsite.toml"), "").unwrap();

        let found = find_config_file(Path::new("docsite.toml"), &nested).unwrap();
        assert_eq!(found, nested.join("docsite.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        assert!(find_config_file(&path, Path::new("/")).is_none());

        fs::write(&path, "{}").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-docsite-config.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("docsite.toml")), ConfigFormat::Toml);
        assert_eq!(detect_format(Path::new("site.JSON")), ConfigFormat::Json);
        assert_eq!(detect_format(Path::new("docsite")), ConfigFormat::Toml);
    }
}
