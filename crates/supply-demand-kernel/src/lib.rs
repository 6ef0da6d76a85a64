//! # Supply/Demand Kernel
//!
//! A recursive resolution engine: named suppliers produce values on demand,
//! and any running supplier may demand further values, optionally changing
//! which suppliers are visible to that nested demand and everything beneath
//! it.
//!
//! ## Architecture
//!
//! ```text
//! supply_demand(root, suppliers)   ← Entry: registers `$$root`, builds root frame
//!     │
//! resolve(DemandRequest)           ← Dispatcher: one task per demand
//!     │
//! Supplier(data, Scope)            ← Runs with its frame's key/type/path
//!     │
//! Scope::demand(ScopedDemandRequest)
//!     │                            ← child key, extended path,
//!     │                              Suppliers::merge(SuppliersMerge)
//!     └──→ resolve(DemandRequest)  ← recursively, until leaves resolve
//! ```
//!
//! Each frame owns its own supplier mapping, so sibling subtrees never
//! observe each other's overrides.

pub mod dispatch;
pub mod error;
pub mod merge;
pub mod path;
pub mod request;
pub mod scope;
pub mod supplier;

pub use dispatch::{Demand, resolve, supply_demand};
pub use error::SupplyError;
pub use merge::SuppliersMerge;
pub use path::{DemandPath, ROOT_KEY};
pub use request::{DemandRequest, ScopedDemandRequest};
pub use scope::Scope;
pub use serde_json::Value;
pub use supplier::{ROOT_TYPE, Supplier, Suppliers};
