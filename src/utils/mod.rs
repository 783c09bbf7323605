//! Shared helpers.
//!
//! - [`path`]: filesystem and URL path handling
//! - [`slug`]: heading anchor slugs
//! - [`plural`]: count formatting for log lines
//! - [`style`]: colors that respect `--color`

pub mod path;
pub mod plural;
pub mod slug;
pub mod style;

pub use plural::{plural_count, plural_s};
pub use style::paint;
