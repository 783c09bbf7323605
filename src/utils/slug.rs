//! Heading anchor slugs, generated the way the docs engine generates them.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Control characters are dropped outright.
static CONTROL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x00-\x1f]").unwrap());

/// Combining diacritical marks are dropped after NFKD (`é` becomes `e`).
static COMBINING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0300}-\x{036F}]").unwrap());

/// Whitespace and ASCII punctuation (plus curly quotes) collapse into one separator.
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[\s~`!@#$%^&*()\-_+=\[\]{}|\\;:"'“”‘’<>,.?/]+"##).unwrap()
});

/// Slugify heading text into an anchor id.
///
/// # Examples
///
/// - `"Anatomy of a Prompt"` -> `"anatomy-of-a-prompt"`
/// - `"Context & Constraints"` -> `"context-constraints"`
/// - `"2. Setup"` -> `"_2-setup"`
/// - `"Café"` -> `"cafe"`
pub fn slugify(text: &str) -> String {
    let text: String = text.nfkd().collect();
    let text = COMBINING.replace_all(&text, "");
    let text = CONTROL.replace_all(&text, "");
    let text = SPECIAL.replace_all(&text, "-");
    let text = text.trim_matches('-');

    let mut slug = String::with_capacity(text.len() + 1);
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        slug.push('_');
    }
    slug.push_str(&text.to_lowercase());
    slug
}
