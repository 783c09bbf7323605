//! Embedded static resources for docsite.
//!
//! Templates are plain text with `__PLACEHOLDER__` markers; each template
//! is typed by the variable set that fills it.
//!
//! # Usage
//!
//! ```ignore
//! use embed::init::{DOCSITE_TOML, InitVars};
//!
//! let toml = DOCSITE_TOML.render(&InitVars::default());
//! ```

use std::marker::PhantomData;

/// Fills a template's placeholders.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Embedded text rendered with one kind of [`TemplateVars`].
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V: TemplateVars> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter `docsite.toml`.
    pub struct InitVars {
        pub version: &'static str,
        pub content: String,
        /// Write `[docsite] content` as a live setting instead of a comment.
        pub set_content: bool,
    }

    impl Default for InitVars {
        fn default() -> Self {
            Self {
                version: env!("CARGO_PKG_VERSION"),
                content: "docs".to_string(),
                set_content: false,
            }
        }
    }

    impl TemplateVars for InitVars {
        fn apply(&self, content: &str) -> String {
            let content = if self.set_content {
                content.replacen(
                    "# [docsite]\n# content = ",
                    "[docsite]\ncontent = ",
                    1,
                )
            } else {
                content.to_string()
            };
            content
                .replace("__VERSION__", self.version)
                .replace("__CONTENT__", &self.content)
        }
    }

    /// Starter descriptor: the Prompt Lab notes site.
    pub const DOCSITE_TOML: Template<InitVars> =
        Template::new(include_str!("init/docsite.toml"));
}
