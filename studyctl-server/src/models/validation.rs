//! Validation error types

use std::fmt;

/// Validation error for incoming records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field exceeds the width of its storage column
    TooLong { field: &'static str, max: usize },
    /// Field holds a NUL character, which PostgreSQL text cannot store
    NulCharacter { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NulCharacter { field } => write!(f, "{} must not contain NUL characters", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks a deserialized payload beyond what its types express
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Reject `value` if it holds more than `max` characters or a NUL.
///
/// Counts characters rather than bytes, matching `VARCHAR(n)`.
pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::NulCharacter { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "topic",
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "topic exceeds maximum length of 200 characters"
        );
    }

    #[test]
    fn length_counts_characters() {
        // 5 characters, 10 bytes
        assert!(check_len("duration", "ééééé", 5).is_ok());
        assert_eq!(
            check_len("duration", "ééééé", 4),
            Err(ValidationError::TooLong {
                field: "duration",
                max: 4
            })
        );
    }

    #[test]
    fn nul_is_rejected() {
        assert_eq!(
            check_len("topic", "Sets\0", 200),
            Err(ValidationError::NulCharacter { field: "topic" })
        );
        assert_eq!(
            ValidationError::NulCharacter { field: "topic" }.to_string(),
            "topic must not contain NUL characters"
        );
    }
}
