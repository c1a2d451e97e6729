//! Revision viewer data structures
//!
//! - `core`: change notification channel
//! - `diff`: diff requests built from changed paths
//! - `log`: log entries, revisions and repository keys
//! - `tree`: lazy tree projection and display mapping

pub mod core;
pub mod diff;
pub mod log;
pub mod tree;
