//! Demand requests: the resolution frame and what a running supplier asks for.

use crate::merge::SuppliersMerge;
use crate::path::{DemandPath, ROOT_KEY};
use crate::supplier::{ROOT_TYPE, Supplier, Suppliers};
use serde_json::Value;

/// One unit of resolution work.
///
/// A fresh request is built for every demand, root or nested, and is
/// consumed by [`crate::resolve`]. It never outlives its resolution.
#[derive(Debug, Clone)]
pub struct DemandRequest {
    pub key: String,
    pub type_name: String,
    pub path: DemandPath,
    pub data: Value,
    pub suppliers: Suppliers,
}

impl DemandRequest {
    /// The root frame `{key: "root", type: "$$root", path: "root"}`.
    ///
    /// `suppliers` is taken by value; the root supplier is registered into
    /// this owned copy, never into a mapping the caller still holds.
    pub fn root(root: Supplier, mut suppliers: Suppliers) -> Self {
        suppliers.register_root(root);
        Self {
            key: ROOT_KEY.to_string(),
            type_name: ROOT_TYPE.to_string(),
            path: DemandPath::root(),
            data: Value::Null,
            suppliers,
        }
    }
}

/// A nested demand as issued by a running supplier through its [`crate::Scope`].
#[derive(Debug, Clone, Default)]
pub struct ScopedDemandRequest {
    /// Key for the child; inherits the parent's key when `None` or empty.
    pub key: Option<String>,
    pub type_name: String,
    pub suppliers_merge: SuppliersMerge,
    pub data: Value,
}

impl ScopedDemandRequest {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    pub fn merge(mut self, suppliers_merge: SuppliersMerge) -> Self {
        self.suppliers_merge = suppliers_merge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_frame_registers_reserved_type() {
        let request = DemandRequest::root(Supplier::constant("r"), Suppliers::new());
        assert_eq!(request.key, "root");
        assert_eq!(request.type_name, "$$root");
        assert_eq!(request.path.as_str(), "root");
        assert_eq!(request.data, Value::Null);
        assert!(request.suppliers.contains(ROOT_TYPE));
    }

    #[test]
    fn scoped_request_defaults_to_inherited_key_and_null_data() {
        let scoped = ScopedDemandRequest::new("first");
        assert_eq!(scoped.key, None);
        assert_eq!(scoped.data, Value::Null);
        assert!(scoped.suppliers_merge.is_identity());
    }
}
