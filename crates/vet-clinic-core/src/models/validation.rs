//! Validation errors and shared text checks.

use thiserror::Error;

/// Every way a construction or mutation in the core can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be blank")]
    Blank { field: &'static str },

    #[error("Email must have a valid format: {0:?}")]
    InvalidEmail(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid {field} {value:?}, expected one of: {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("A {what} named {key:?} already exists")]
    Duplicate { what: &'static str, key: String },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("Referential violation: {0}")]
    Referential(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trim `value`, rejecting it if nothing is left.
pub fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed.to_string())
}

/// Basic email shape check: must contain both `@` and `.`.
pub fn require_email(value: &str) -> ValidationResult<String> {
    if !value.contains('@') || !value.contains('.') {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(value.trim().to_string())
}

/// Case-insensitive comparison used by every name/description lookup.
///
/// Uses full Unicode lowercasing so "PEQUEÑO" and "pequeño" compare equal.
pub fn same_text(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("Name", "  Juan ").unwrap(), "Juan");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        assert_eq!(
            require_text("Name", "   "),
            Err(ValidationError::Blank { field: "Name" })
        );
        assert!(require_text("Name", "").is_err());
    }

    #[test]
    fn test_require_email() {
        assert_eq!(require_email(" juan@email.com ").unwrap(), "juan@email.com");
        assert!(require_email("juan.email.com").is_err());
        assert!(require_email("juan@email").is_err());
        assert!(require_email("").is_err());
    }

    #[test]
    fn test_same_text_unicode() {
        assert!(same_text("Rex", "rex"));
        assert!(same_text("PEQUEÑO", "pequeño"));
        assert!(!same_text("Rex", "Max"));
    }
}
