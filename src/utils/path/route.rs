//! URL processing utilities.
//!
//! Provides consistent URL handling across the codebase:
//! - Leading slash handling for page paths and sidebar keys
//! - Link type detection (external vs internal)
//! - Path/fragment splitting

use std::borrow::Cow;

/// Prefix a URL path with `/` unless it already has one
///
/// # Examples
/// ```ignore
/// assert_eq!(ensure_starting_slash("guide/"), "/guide/");
/// assert_eq!(ensure_starting_slash("/guide/"), "/guide/");
/// ```
#[inline]
pub fn ensure_starting_slash(url: &str) -> Cow<'_, str> {
    if url.starts_with('/') {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("/{url}"))
    }
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("/foundations/#anatomy-of-a-prompt"), ("/foundations/", "anatomy-of-a-prompt"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_starting_slash() {
        assert_eq!(ensure_starting_slash("guide/"), "/guide/");
        assert_eq!(ensure_starting_slash("/guide/"), "/guide/");
        assert_eq!(ensure_starting_slash(""), "/");
        assert!(matches!(ensure_starting_slash("/x"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nope"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(
            split_path_fragment("/foundations/#anatomy-of-a-prompt"),
            ("/foundations/", "anatomy-of-a-prompt")
        );
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }
}
