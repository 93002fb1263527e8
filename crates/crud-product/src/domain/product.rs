//! The validated product model.
//!
//! Every field is checked independently at construction and every failure
//! is reported, so API callers see all field errors at once. A
//! `ProductEntry` never changes after construction; an update builds a new
//! validated instance.

use std::fmt;

use crud_core::error::{DomainError, FieldConstraint, FieldError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a hyphenated UUID string.
pub const PRODUCT_ID_LENGTH: usize = 36;

/// Upper bound on product name length, in characters.
pub const NAME_MAX_LENGTH: usize = 30;

/// Unique product identifier, held as its 36-character UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Validates `raw` as a product id.
    ///
    /// # Errors
    ///
    /// Returns an `ExactLength` field error when `raw` is not 36 characters
    /// long, and a `UuidFormat` field error when it does not parse as a UUID.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let actual = raw.chars().count();
        if actual != PRODUCT_ID_LENGTH {
            return Err(FieldError::new(
                "id",
                FieldConstraint::ExactLength {
                    expected: PRODUCT_ID_LENGTH,
                    actual,
                },
            ));
        }
        Uuid::try_parse(raw).map_err(|_| FieldError::new("id", FieldConstraint::UuidFormat))?;
        Ok(Self(raw.to_owned()))
    }

    /// Generates a fresh random product id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Untrusted product payload, as read from a request or a store item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductDraft {
    /// Candidate name.
    pub name: String,
    /// Candidate id.
    pub id: String,
    /// Candidate price.
    pub price: i64,
    /// Candidate creation timestamp, in epoch seconds.
    pub created_at: i64,
}

/// A persisted product whose fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft")]
pub struct ProductEntry {
    name: String,
    id: ProductId,
    price: i64,
    created_at: i64,
}

impl ProductEntry {
    /// Validates every field of `draft` and builds the entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` listing each failed field in the
    /// order name, id, price, `created_at`.
    pub fn new(draft: ProductDraft) -> Result<Self, DomainError> {
        let ProductDraft {
            name,
            id,
            price,
            created_at,
        } = draft;

        let mut errors = Vec::new();
        if let Err(err) = validate_name(&name) {
            errors.push(err);
        }
        let id = ProductId::parse(&id).map_err(|err| errors.push(err)).ok();
        if let Err(err) = validate_positive("price", price) {
            errors.push(err);
        }
        if let Err(err) = validate_positive("created_at", created_at) {
            errors.push(err);
        }

        match id {
            Some(id) if errors.is_empty() => Ok(Self {
                name,
                id,
                price,
                created_at,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product id.
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Creation timestamp, in epoch seconds.
    #[must_use]
    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl TryFrom<ProductDraft> for ProductEntry {
    type Error = DomainError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

/// Checks that `name` is non-empty and at most 30 characters.
///
/// # Errors
///
/// Returns a `MinLength` or `MaxLength` field error for `name`.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let actual = name.chars().count();
    if actual == 0 {
        return Err(FieldError::new(
            "name",
            FieldConstraint::MinLength { min: 1, actual },
        ));
    }
    if actual > NAME_MAX_LENGTH {
        return Err(FieldError::new(
            "name",
            FieldConstraint::MaxLength {
                max: NAME_MAX_LENGTH,
                actual,
            },
        ));
    }
    Ok(())
}

/// Checks that `value` is strictly positive.
///
/// # Errors
///
/// Returns a `Positive` field error tagged with `field`.
pub fn validate_positive(field: &'static str, value: i64) -> Result<(), FieldError> {
    if value > 0 {
        Ok(())
    } else {
        Err(FieldError::new(
            field,
            FieldConstraint::Positive { actual: value },
        ))
    }
}
