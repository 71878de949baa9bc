use std::collections::{BTreeMap, BTreeSet};

use super::node_path::NodePath;

/// Presentation state of a schema view
///
/// Which variant is active under each `oneOf`/`anyOf` node, and which nodes
/// have their raw JSON shown. Changing it never touches resolved data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_variants: BTreeMap<NodePath, usize>,
    raw_json: BTreeSet<NodePath>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active variant index at `path`; 0 unless selected otherwise
    pub fn active_variant(&self, path: &NodePath) -> usize {
        self.active_variants.get(path).copied().unwrap_or(0)
    }

    pub fn set_active_variant(&mut self, path: NodePath, index: usize) {
        if index == 0 {
            self.active_variants.remove(&path);
        } else {
            self.active_variants.insert(path, index);
        }
    }

    pub fn show_raw(&self, path: &NodePath) -> bool {
        self.raw_json.contains(path)
    }

    /// Flip the raw JSON toggle at `path`, returning the new setting
    pub fn toggle_raw(&mut self, path: NodePath) -> bool {
        if self.raw_json.remove(&path) {
            false
        } else {
            self.raw_json.insert(path);
            true
        }
    }
}
