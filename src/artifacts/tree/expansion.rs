use crate::artifacts::tree::node::NodeKey;
use crate::artifacts::tree::tree_item::Collapsible;
use std::collections::HashMap;

/// Which rows a host has expanded or collapsed by hand
///
/// Host-side state only. Rows without an override use the default their
/// tree item advertises.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    overrides: HashMap<NodeKey, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, key: NodeKey) {
        self.overrides.insert(key, true);
    }

    pub fn collapse(&mut self, key: NodeKey) {
        self.overrides.insert(key, false);
    }

    pub fn is_expanded(&self, key: Option<&NodeKey>, collapsible: Collapsible) -> bool {
        match collapsible {
            Collapsible::None => false,
            Collapsible::Collapsed | Collapsible::Expanded => key
                .and_then(|key| self.overrides.get(key).copied())
                .unwrap_or(collapsible == Collapsible::Expanded),
        }
    }

    /// Drop overrides for rows that no longer exist
    pub fn retain(&mut self, mut exists: impl FnMut(&NodeKey) -> bool) {
        self.overrides.retain(|key, _| exists(key));
    }
}
