//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} exceeds maximum length of {max}")]
    TooLong { field_name: &'static str, max: usize },

    #[error("{field_name} is invalid: {reason}")]
    Invalid { field_name: &'static str, reason: String },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate the trimmed character count is within range.
pub fn require_length_range(
    value: &str,
    min: usize,
    max: usize,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ValidationError::Invalid {
            field_name,
            reason: format!("must be at least {} characters", min),
        });
    }
    if len > max {
        return Err(ValidationError::TooLong { field_name, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_empty() {
        assert!(require_non_empty("   ", "q").is_err());
        assert!(require_non_empty(" a ", "q").is_ok());
    }

    #[test]
    fn length_counts_trimmed_characters() {
        assert!(require_length_range(" L ", 2, 200, "query").is_err());
        assert!(require_length_range("Lo", 2, 200, "query").is_ok());
        assert!(require_length_range("ऋषिकेश", 2, 6, "query").is_ok());
        assert!(matches!(
            require_length_range(&"x".repeat(201), 2, 200, "query"),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }
}
