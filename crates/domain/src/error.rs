//! Unified error types for the domain layer
//!
//! Validation, capacity and index failures all surface as [`DomainError`].
//! Lookups by id are not errors: they return `Option`/`bool`.

use thiserror::Error;

use crate::collections::IndexOutOfRange;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (coordinates, hemispheres, names, manual data)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Positional access outside `[0, len)`
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Container is at capacity
    #[error("Container full: {current}/{max} items")]
    ContainerFull { current: usize, max: usize },
}

impl DomainError {
    /// Creates a validation error.
    ///
    /// Use this when a value is outside its allowed range or a required
    /// field is missing:
    /// - Latitude outside 0..=90, longitude outside 0..=180
    /// - Hemisphere tokens other than N/S or E/W
    /// - Empty location names
    ///
    /// # Example
    /// ```ignore
    /// if trimmed.is_empty() {
    ///     return Err(DomainError::validation("Location name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a container full error
    pub fn container_full(current: usize, max: usize) -> Self {
        Self::ContainerFull { current, max }
    }
}

impl From<IndexOutOfRange> for DomainError {
    fn from(err: IndexOutOfRange) -> Self {
        Self::IndexOutOfRange {
            index: err.index,
            len: err.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("latitude must be within 0..=90");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: latitude must be within 0..=90"
        );
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = DomainError::index_out_of_range(3, 2);
        assert_eq!(err.to_string(), "Index 3 out of range for 2 items");
    }

    #[test]
    fn test_from_list_index_error() {
        let list_err = IndexOutOfRange { index: 0, len: 0 };
        let domain_err: DomainError = list_err.into();
        assert_eq!(domain_err, DomainError::index_out_of_range(0, 0));
    }

    #[test]
    fn test_container_full_error() {
        let err = DomainError::container_full(30, 30);
        assert!(matches!(err, DomainError::ContainerFull { .. }));
        assert_eq!(err.to_string(), "Container full: 30/30 items");
    }
}
