//! Validation error types

use std::fmt;

/// Validation error for incoming payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent
    Missing { field: &'static str },

    /// Numeric field must be greater than zero
    NotPositive { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotPositive { field } => {
                write!(f, "{} must be a positive integer", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "nombre" };
        assert_eq!(err.to_string(), "nombre is required");

        let err = ValidationError::NotPositive { field: "edad" };
        assert_eq!(err.to_string(), "edad must be a positive integer");
    }
}
