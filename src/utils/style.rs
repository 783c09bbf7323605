//! Terminal styling that honours `--color` and TTY detection.
//!
//! Plain `OwoColorize` methods always emit escape codes; everything user
//! facing goes through [`paint`] so `--color never` and redirected output
//! stay plain.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

/// Style text bound for stderr (logs, reports, diagnostics).
#[inline]
pub fn paint(text: impl Display, style: Style) -> String {
    paint_on(Stream::Stderr, text, style)
}

/// Style text for a specific stream.
pub fn paint_on(stream: Stream, text: impl Display, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}
