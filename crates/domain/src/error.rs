//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction so that the
//! gateway and the client can surface validation failures without resorting
//! to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., a coordinate outside its range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A location was used where all geographic fields are required
    #[error("Incomplete location: missing {missing}")]
    IncompleteLocation { missing: &'static str },

    /// Parse error (for enumerated identifiers)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a value outside its allowed range or length.
    ///
    /// # Example
    /// ```ignore
    /// if !(-90.0..=90.0).contains(&lat) {
    ///     return Err(DomainError::validation("latitude must be within [-90, 90]"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an incomplete location error naming the first missing field
    pub fn incomplete_location(missing: &'static str) -> Self {
        Self::IncompleteLocation { missing }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this error reports a location missing geographic fields.
    pub fn is_incomplete_location(&self) -> bool {
        matches!(self, Self::IncompleteLocation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("latitude out of range");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: latitude out of range");
    }

    #[test]
    fn test_incomplete_location_error() {
        let err = DomainError::incomplete_location("timezone");
        assert!(err.is_incomplete_location());
        assert_eq!(err.to_string(), "Incomplete location: missing timezone");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown basis: weekly");
        assert!(!err.is_incomplete_location());
        assert!(err.to_string().contains("weekly"));
    }
}
