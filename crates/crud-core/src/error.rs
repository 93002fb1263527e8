//! Domain error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single violated constraint on a named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The field that failed validation (`name`, `id`, `price`, `created_at`).
    pub field: &'static str,
    /// The constraint the field violated.
    pub constraint: FieldConstraint,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: &'static str, constraint: FieldConstraint) -> Self {
        Self { field, constraint }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Constraints a field can violate. Lengths count Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConstraint {
    /// The value must be exactly `expected` characters long.
    ExactLength {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },
    /// The value must be a hyphenated UUID.
    UuidFormat,
    /// The value must be at least `min` characters long.
    MinLength {
        /// Minimum length.
        min: usize,
        /// Observed length.
        actual: usize,
    },
    /// The value must be at most `max` characters long.
    MaxLength {
        /// Maximum length.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// The value must be strictly greater than zero.
    Positive {
        /// Observed value.
        actual: i64,
    },
}

impl fmt::Display for FieldConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactLength { expected, actual } => {
                write!(f, "must be exactly {expected} characters, got {actual}")
            }
            Self::UuidFormat => f.write_str("must be a valid UUID"),
            Self::MinLength { min, actual } => {
                write!(f, "must be at least {min} characters, got {actual}")
            }
            Self::MaxLength { max, actual } => {
                write!(f, "must be at most {max} characters, got {actual}")
            }
            Self::Positive { actual } => write!(f, "must be greater than 0, got {actual}"),
        }
    }
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more input fields violated their constraints.
    #[error("validation error: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// No record exists under the requested key.
    #[error("not found: {0}")]
    NotFound(String),

    /// An exactly-one lookup matched several records.
    #[error("expected exactly one record for key {key}, found {count}")]
    AmbiguousMatch {
        /// The key that was queried.
        key: String,
        /// How many records matched.
        count: usize,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<FieldError> for DomainError {
    fn from(err: FieldError) -> Self {
        Self::Validation(vec![err])
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_every_field() {
        let err = DomainError::Validation(vec![
            FieldError::new("name", FieldConstraint::MinLength { min: 1, actual: 0 }),
            FieldError::new("price", FieldConstraint::Positive { actual: -5 }),
        ]);

        assert_eq!(
            err.to_string(),
            "validation error: name: must be at least 1 characters, got 0; \
             price: must be greater than 0, got -5"
        );
    }

    #[test]
    fn test_single_field_error_converts_to_validation() {
        let err: DomainError = FieldError::new("id", FieldConstraint::UuidFormat).into();

        match err {
            DomainError::Validation(fields) => {
                assert_eq!(fields, vec![FieldError::new("id", FieldConstraint::UuidFormat)]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_field_constraint_serializes_with_kind_tag() {
        let json = serde_json::to_value(FieldConstraint::ExactLength {
            expected: 36,
            actual: 3,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "kind": "exact_length", "expected": 36, "actual": 3 })
        );
    }
}
