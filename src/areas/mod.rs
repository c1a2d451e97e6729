//! Stateful components of the revision viewer
//!
//! - `revision_cache`: volatile store of the revisions picked for viewing
//! - `viewer`: host-facing owner of the cache and its change channel

pub mod revision_cache;
pub mod viewer;
