//! Configuration section definitions.
//!
//! | Module     | Key              | Purpose                              |
//! |------------|------------------|--------------------------------------|
//! | `site`     | top level        | Title, description, lastUpdated      |
//! | `theme`    | `themeConfig`    | Nav, sidebar, editLink, search       |
//! | `tool`     | `[docsite]`      | Content root, export target          |
//! | `validate` | `[docsite.validate]` | Link checking                    |

pub mod site;
pub mod theme;
mod tool;
mod validate;

pub use site::{LinkRef, SiteDescriptor};
pub use theme::SidebarGroup;
#[cfg(test)]
pub use theme::{NavItem, SearchProvider, Sidebar, ThemeConfig};
pub use tool::{TOOL_TABLE, ToolConfig};
pub use validate::{ValidateConfig, ValidateLevel};
