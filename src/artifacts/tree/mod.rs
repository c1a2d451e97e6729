//! Tree presentation of the revision cache
//!
//! - `node`: the four node kinds and their parent links
//! - `projection`: lazy children and row descriptors
//! - `tree_item`: row descriptors, icons and bound actions
//! - `format`: commit and path text
//! - `display_options`: display configuration
//! - `expansion`: host-side expanded/collapsed overrides

pub mod display_options;
pub mod expansion;
pub mod format;
pub mod node;
pub mod projection;
pub mod tree_item;
