//! Site path to Markdown source resolution.
//!
//! The docs engine serves `foo.md` at `/foo` (or `/foo.html`) and
//! `foo/index.md` at `/foo/`:
//!
//! | Link path          | Candidates                         |
//! |--------------------|------------------------------------|
//! | `/`                | `index.md`                         |
//! | `/patterns/`       | `patterns/index.md`                |
//! | `/patterns/roles`  | `patterns/roles.md`, `patterns/roles/index.md` |
//! | `/about.html`      | `about.md`, `about/index.md`       |

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Source files that may back `path`, most specific first.
///
/// Returns an empty list for paths that escape the content root.
pub fn source_candidates(path: &str) -> Vec<PathBuf> {
    let clean = normalize_url(path);

    if clean.split('/').any(|seg| seg == "..") {
        return Vec::new();
    }

    if clean.is_empty() {
        return vec![PathBuf::from("index.md")];
    }
    if clean.ends_with('/') {
        return vec![Path::new(&clean).join("index.md")];
    }

    let stem = clean.strip_suffix(".html").unwrap_or(&clean);
    let stem = stem.strip_suffix(".md").unwrap_or(stem);
    vec![
        PathBuf::from(format!("{stem}.md")),
        Path::new(stem).join("index.md"),
    ]
}

/// Resolve a site-root path to an existing Markdown file under `content_dir`.
pub fn resolve_page(content_dir: &Path, path: &str) -> Option<PathBuf> {
    source_candidates(path)
        .into_iter()
        .map(|rel| content_dir.join(rel))
        .find(|file| file.is_file())
}

/// Decode, strip query string, drop leading slashes (keep the trailing one).
fn normalize_url(url: &str) -> String {
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| url.to_string());

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_candidates() {
        assert_eq!(source_candidates("/"), [PathBuf::from("index.md")]);
        assert_eq!(
            source_candidates("/patterns/"),
            [PathBuf::from("patterns/index.md")]
        );
        assert_eq!(
            source_candidates("/patterns/roles"),
            [
                PathBuf::from("patterns/roles.md"),
                PathBuf::from("patterns/roles/index.md")
            ]
        );
        assert_eq!(
            source_candidates("/about.html"),
            [PathBuf::from("about.md"), PathBuf::from("about/index.md")]
        );
    }

    #[test]
    fn test_source_candidates_decodes() {
        assert_eq!(
            source_candidates("/zero%20shot?x=1"),
            [
                PathBuf::from("zero shot.md"),
                PathBuf::from("zero shot/index.md")
            ]
        );
    }

    #[test]
    fn test_source_candidates_rejects_traversal() {
        assert!(source_candidates("/../secret").is_empty());
        assert!(source_candidates("/a/%2E%2E/b").is_empty());
    }

    #[test]
    fn test_resolve_page_fallback() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("guide/index.md"), "# Guide").unwrap();
        fs::write(dir.path().join("about.md"), "# About").unwrap();

        assert_eq!(
            resolve_page(dir.path(), "/guide"),
            Some(dir.path().join("guide/index.md"))
        );
        assert_eq!(
            resolve_page(dir.path(), "/guide/"),
            Some(dir.path().join("guide/index.md"))
        );
        assert_eq!(
            resolve_page(dir.path(), "/about"),
            Some(dir.path().join("about.md"))
        );
        assert_eq!(resolve_page(dir.path(), "/missing/"), None);
    }
}
