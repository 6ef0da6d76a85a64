//! Suppliers and supplier mappings.
//!
//! A supplier is an asynchronous computation registered under a type name.
//! When a demand for that type is dispatched, the supplier receives the
//! demand's input data and a [`Scope`] through which it may issue nested
//! demands of its own.

use crate::error::{SupplyError, validate_type_name};
use crate::scope::Scope;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Type name under which [`crate::supply_demand`] registers the root supplier.
pub const ROOT_TYPE: &str = "$$root";

type SupplierFn = dyn Fn(Value, Scope) -> BoxFuture<'static, Value> + Send + Sync;

/// A named asynchronous function `(data, scope) -> Value`.
///
/// Cloning is cheap: clones share the same underlying function.
#[derive(Clone)]
pub struct Supplier(Arc<SupplierFn>);

impl Supplier {
    /// Wrap an async function as a supplier.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Value, Scope) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        let call = move |data: Value, scope: Scope| f(data, scope).boxed();
        Self(Arc::new(call))
    }

    /// A leaf supplier that always produces `value` without issuing demands.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_, _| {
            let value = value.clone();
            async move { value }
        })
    }

    /// Start the supplier. The returned future is not yet polled.
    pub fn call(&self, data: Value, scope: Scope) -> BoxFuture<'static, Value> {
        (self.0)(data, scope)
    }
}

impl fmt::Debug for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Supplier(..)")
    }
}

/// The set of suppliers visible to one demand, keyed by type name.
///
/// Every resolution frame owns its own `Suppliers`; nested demands receive
/// a freshly merged copy (see [`Suppliers::merge`]), never a shared one.
#[derive(Clone, Default)]
pub struct Suppliers {
    entries: BTreeMap<String, Supplier>,
}

impl Suppliers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `supplier` under `type_name`, returning any supplier it replaced.
    ///
    /// Empty names and the reserved root type are rejected.
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        supplier: Supplier,
    ) -> Result<Option<Supplier>, SupplyError> {
        let type_name = type_name.into();
        validate_type_name(&type_name)?;
        Ok(self.entries.insert(type_name, supplier))
    }

    /// Builder form of [`Suppliers::insert`].
    pub fn with(
        mut self,
        type_name: impl Into<String>,
        supplier: Supplier,
    ) -> Result<Self, SupplyError> {
        self.insert(type_name, supplier)?;
        Ok(self)
    }

    pub(crate) fn register_root(&mut self, supplier: Supplier) {
        self.entries.insert(ROOT_TYPE.to_string(), supplier);
    }

    /// Overlay every entry of `other`, replacing same-named entries.
    pub(crate) fn overlay(&mut self, other: &Suppliers) {
        for (type_name, supplier) in &other.entries {
            self.entries.insert(type_name.clone(), supplier.clone());
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&Supplier> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn remove(&mut self, type_name: &str) -> Option<Supplier> {
        self.entries.remove(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type names in deterministic order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for Suppliers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_reserved_root_type() {
        let mut suppliers = Suppliers::new();
        let err = suppliers
            .insert(ROOT_TYPE, Supplier::constant("x"))
            .unwrap_err();
        assert_eq!(err, SupplyError::ReservedType(ROOT_TYPE.to_string()));
        assert!(suppliers.is_empty());
    }

    #[test]
    fn insert_replaces_same_named_supplier() {
        let mut suppliers = Suppliers::new();
        let first = suppliers.insert("a", Supplier::constant(1)).unwrap();
        let second = suppliers.insert("a", Supplier::constant(2)).unwrap();
        assert!(first.is_none());
        assert!(second.is_some());
        assert_eq!(suppliers.len(), 1);
    }

    #[test]
    fn register_root_bypasses_validation() {
        let mut suppliers = Suppliers::new();
        suppliers.register_root(Supplier::constant("root"));
        assert!(suppliers.contains(ROOT_TYPE));
    }

    #[test]
    fn debug_lists_type_names_in_order() {
        let suppliers = Suppliers::new()
            .with("b", Supplier::constant(2))
            .and_then(|s| s.with("a", Supplier::constant(1)))
            .unwrap();
        assert_eq!(format!("{suppliers:?}"), r#"{"a", "b"}"#);
    }
}
