//! Supplier-set merge: how a nested demand's visible suppliers differ from
//! its parent's.
//!
//! The merge is applied in a fixed order:
//!
//! ```text
//! start empty
//!   → copy parent entries   (skipped when `clear`)
//!   → overlay `add`         (replaces same-named entries)
//!   → delete `remove` names (after `add`: add+remove nets to absent)
//! ```

use crate::supplier::Suppliers;
use std::collections::BTreeSet;

/// Override instruction describing a child's visible supplier set.
#[derive(Debug, Clone, Default)]
pub struct SuppliersMerge {
    /// Drop every inherited supplier before applying `add`.
    pub clear: bool,
    pub add: Suppliers,
    pub remove: BTreeSet<String>,
}

impl SuppliersMerge {
    /// The identity merge: the child sees exactly the parent's suppliers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clearing(mut self) -> Self {
        self.clear = true;
        self
    }

    pub fn adding(mut self, suppliers: Suppliers) -> Self {
        self.add.overlay(&suppliers);
        self
    }

    pub fn removing(mut self, type_name: impl Into<String>) -> Self {
        self.remove.insert(type_name.into());
        self
    }

    /// Whether applying this merge leaves the parent's set unchanged.
    pub fn is_identity(&self) -> bool {
        !self.clear && self.add.is_empty() && self.remove.is_empty()
    }
}

impl Suppliers {
    /// Compute the supplier set visible to a nested demand.
    ///
    /// `self` is never modified; the result is an independently owned map.
    /// Names in `op.remove` that are not present are ignored.
    pub fn merge(&self, op: &SuppliersMerge) -> Suppliers {
        let mut merged = if op.clear {
            Suppliers::new()
        } else {
            self.clone()
        };
        merged.overlay(&op.add);
        for type_name in &op.remove {
            merged.remove(type_name);
        }
        merged
    }
}
