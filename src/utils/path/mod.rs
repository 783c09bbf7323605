//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`route`]: URL utilities (`is_external_link`, `split_path_fragment`, `ensure_starting_slash`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
