//! The capability a running supplier uses to issue nested demands.

use crate::dispatch::{Demand, resolve};
use crate::path::DemandPath;
use crate::request::{DemandRequest, ScopedDemandRequest};
use crate::supplier::Suppliers;

/// The frame of the demand a supplier is currently serving.
///
/// Holds the parent's key, type, path and visible suppliers so that nested
/// demands only need to describe what differs.
#[derive(Debug, Clone)]
pub struct Scope {
    key: String,
    type_name: String,
    path: DemandPath,
    suppliers: Suppliers,
}

impl Scope {
    pub(crate) fn new(
        key: String,
        type_name: String,
        path: DemandPath,
        suppliers: Suppliers,
    ) -> Self {
        Self {
            key,
            type_name,
            path,
            suppliers,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn path(&self) -> &DemandPath {
        &self.path
    }

    /// Suppliers visible to the demand this scope serves.
    pub fn suppliers(&self) -> &Suppliers {
        &self.suppliers
    }

    /// Issue a nested demand. It starts running immediately; await the
    /// returned [`Demand`] for its value.
    pub fn demand(&self, scoped: ScopedDemandRequest) -> Demand {
        resolve(self.child_request(scoped))
    }

    /// Build the child frame for `scoped`: inherited or explicit key,
    /// extended path, and a freshly merged supplier set.
    pub fn child_request(&self, scoped: ScopedDemandRequest) -> DemandRequest {
        let ScopedDemandRequest {
            key,
            type_name,
            suppliers_merge,
            data,
        } = scoped;
        let key = key
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.key.clone());
        let path = self.path.child(&key, &type_name);
        let suppliers = self.suppliers.merge(&suppliers_merge);
        DemandRequest {
            key,
            type_name,
            path,
            data,
            suppliers,
        }
    }
}

impl From<&DemandRequest> for Scope {
    fn from(request: &DemandRequest) -> Self {
        Self::new(
            request.key.clone(),
            request.type_name.clone(),
            request.path.clone(),
            request.suppliers.clone(),
        )
    }
}
