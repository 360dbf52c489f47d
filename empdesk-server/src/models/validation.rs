//! Validation error types

use std::fmt;

/// Validation error for submitted employee forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required form field was not submitted at all
    MissingField { field: &'static str },

    /// Field must hold a whole number
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{} is required", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "{} must be a whole number, got '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
