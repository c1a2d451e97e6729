//! Revision viewer: a cache of picked repository revisions and the lazy
//! tree a host renders from it.
//!
//! - `areas`: the revision cache and the viewer that owns it
//! - `artifacts`: value types (log entries, tree nodes, diff targets)
//! - `commands`: operations a host runs against the viewer
//! - `shell`: line-oriented host used by the `revview` binary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod shell;
