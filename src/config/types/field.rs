//! Config field paths.

use crate::utils::paint;
use owo_colors::Style;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a field in the descriptor, used to address diagnostics.
///
/// Static paths name fixed fields (`title`, `themeConfig.search.provider`);
/// dynamic ones are built with [`FieldPath::key`] and [`FieldPath::index`]
/// while walking nav and sidebar entries.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("themeConfig.sidebar")
///     .key("/patterns/")
///     .index(0)
///     .field("items");
/// assert_eq!(path.as_str(), "themeConfig.sidebar./patterns/[0].items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Append a named child field.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    /// Append a map key (sidebar prefixes keep their slashes verbatim).
    pub fn key(&self, key: &str) -> Self {
        self.field(key)
    }

    /// Append a sequence index.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            paint(format_args!("`{}`", self.0), Style::new().bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
