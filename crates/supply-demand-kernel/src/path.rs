//! Diagnostic breadcrumb paths.
//!
//! A path records the keys and types traversed to reach a demand, e.g.
//! `root/root(third)/root(first)`. It is never consulted for control flow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the root demand issued by [`crate::supply_demand`].
pub const ROOT_KEY: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandPath(String);

impl DemandPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path of the root demand: `root`.
    pub fn root() -> Self {
        Self(ROOT_KEY.to_string())
    }

    /// Extend the path by one nesting level: `self/key(type_name)`.
    pub fn child(&self, key: &str, type_name: &str) -> Self {
        Self(format!("{}/{key}({type_name})", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of nesting levels below the root.
    pub fn depth(&self) -> usize {
        self.0.matches('/').count()
    }
}

impl fmt::Display for DemandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_appends_key_and_type() {
        let path = DemandPath::root().child("root", "first");
        assert_eq!(path.as_str(), "root/root(first)");
        let grandchild = path.child("k", "second");
        assert_eq!(grandchild.as_str(), "root/root(first)/k(second)");
    }

    #[test]
    fn depth_counts_levels() {
        assert_eq!(DemandPath::root().depth(), 0);
        let nested = DemandPath::root().child("a", "b").child("c", "d");
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_value(DemandPath::root().child("root", "x")).unwrap();
        assert_eq!(json, serde_json::json!("root/root(x)"));
    }
}
