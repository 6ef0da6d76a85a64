//! Error types for supplier registration.
//!
//! Resolution itself never fails: a demand for an unknown type completes
//! with no value. Only building a supplier mapping can be rejected.

use crate::supplier::ROOT_TYPE;

/// Errors arising from registering suppliers under invalid type names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupplyError {
    /// The type name is reserved for the engine's entry point.
    #[error("type name `{0}` is reserved for the root supplier")]
    ReservedType(String),

    /// Suppliers must be registered under a non-empty type name.
    #[error("supplier type name must not be empty")]
    EmptyType,
}

/// Check that `type_name` may be used for an ordinary supplier.
pub fn validate_type_name(type_name: &str) -> Result<(), SupplyError> {
    if type_name.is_empty() {
        return Err(SupplyError::EmptyType);
    }
    if type_name == ROOT_TYPE {
        return Err(SupplyError::ReservedType(type_name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reserved_and_empty_names() {
        assert_eq!(validate_type_name(""), Err(SupplyError::EmptyType));
        assert_eq!(
            validate_type_name("$$root"),
            Err(SupplyError::ReservedType("$$root".to_string()))
        );
        assert!(validate_type_name("first").is_ok());
    }

    #[test]
    fn reserved_error_message_names_the_type() {
        let err = SupplyError::ReservedType(ROOT_TYPE.to_string());
        assert_eq!(
            err.to_string(),
            "type name `$$root` is reserved for the root supplier"
        );
    }
}
