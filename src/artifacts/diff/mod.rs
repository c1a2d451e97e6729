//! Diff requests for changed paths
//!
//! - `diff_target`: which two path revisions a changed path is compared with

pub mod diff_target;
