//! Error types for the contact registry
//!
//! Every fallible operation in the crate returns [`Result`]. The variant is
//! the contract; the rendered message is for humans only.

use std::fmt;
use thiserror::Error;

/// Result type alias for contact registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// The five fields of a contact record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Immutable identifier (registry key)
    ContactId,
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Ten-digit phone number
    Phone,
    /// Street address
    Address,
}

impl Field {
    /// Name of the field as it appears in messages and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ContactId => "contact_id",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Phone => "phone",
            Field::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for the contact registry
#[derive(Error, Debug)]
pub enum Error {
    /// A required input was absent
    #[error("Invalid input: {field} is required")]
    Missing {
        /// Field that was absent
        field: Field,
    },

    /// A text input exceeded its maximum length
    #[error("Invalid input: {field} must be at most {max} characters (got {len})")]
    TooLong {
        /// Field that was too long
        field: Field,
        /// Maximum accepted length
        max: usize,
        /// Length of the rejected value
        len: usize,
    },

    /// Phone did not have exactly ten characters
    #[error("Invalid input: phone must be exactly 10 digits (got {len})")]
    PhoneLength {
        /// Length of the rejected value
        len: usize,
    },

    /// Phone contained something other than an ASCII digit
    #[error("Invalid input: phone must contain digits only (found {found:?} at position {position})")]
    PhoneNonDigit {
        /// Character index of the first offending character
        position: usize,
        /// The offending character
        found: char,
    },

    /// A contact with the same identifier is already stored
    #[error("Duplicate contact id: {0}")]
    DuplicateId(String),

    /// No contact is stored under the identifier
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a "missing input" error
    pub fn missing(field: Field) -> Self {
        Self::Missing { field }
    }

    /// Create a "too long" error
    pub fn too_long(field: Field, max: usize, len: usize) -> Self {
        Self::TooLong { field, max, len }
    }

    /// Create a duplicate identifier error
    pub fn duplicate_id(contact_id: impl Into<String>) -> Self {
        Self::DuplicateId(contact_id.into())
    }

    /// Create a "not found" error
    pub fn not_found(contact_id: impl Into<String>) -> Self {
        Self::NotFound(contact_id.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The field a validation error pertains to
    ///
    /// Returns `None` for registry and configuration errors.
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::Missing { field } | Error::TooLong { field, .. } => Some(*field),
            Error::PhoneLength { .. } | Error::PhoneNonDigit { .. } => Some(Field::Phone),
            _ => None,
        }
    }

    /// Whether this is a field validation failure
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }

    /// Whether this is a registry-level failure (uniqueness or existence)
    pub fn is_registry(&self) -> bool {
        matches!(self, Error::DuplicateId(_) | Error::NotFound(_))
    }
}
