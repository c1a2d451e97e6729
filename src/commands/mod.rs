//! Operations a host runs against the revision viewer
//!
//! - `porcelain`: user-facing commands (add, remove, tree, diff)

pub mod porcelain;
