//! Porcelain commands (what a host invokes on the viewer)
//!
//! Each module extends `RevisionViewer` with one group of operations:
//!
//! - `add`: put a revision into the cache
//! - `remove`: drop a revision, a repository, or everything
//! - `tree`: render the tree rows a host would show
//! - `diff`: run the open-diff action of a changed path
//! - `inspect`: print the full row descriptor of one node

pub mod add;
pub mod diff;
pub mod inspect;
pub mod remove;
pub mod tree;
