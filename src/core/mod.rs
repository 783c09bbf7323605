//! Core link semantics shared by descriptor validation and link checking.

mod link;
pub mod page;

pub use link::LinkKind;
