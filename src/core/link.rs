//! Link classification utilities.

use crate::utils::path::route::is_external_link;

/// Syntactic classification of descriptor links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/foundations/, /patterns/#roles-style).
    SiteRoot(&'a str),
    /// Page-relative path (guide, ./intro). The engine resolves these against
    /// whatever page is being rendered, so nav entries must not use them.
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') && !link.starts_with("//") {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }
}
