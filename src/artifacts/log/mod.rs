//! Log data consumed by the revision viewer
//!
//! - `log_entry`: commits and the paths they touched
//! - `repository_key`: canonical repository identifiers
//! - `revision`: revision identifiers and their ordering

pub mod log_entry;
pub mod repository_key;
pub mod revision;

pub const URL_SCHEME_REGEX: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";
pub const REVISION_REGEX: &str = r"^[rR]?(\d+)$|^(\S+)$";
