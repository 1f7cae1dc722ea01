//! Hit error types
//!
//! Errors raised while populating or serializing a hit. Every variant except
//! `Decode` is subject to the [`ValidationPolicy`](crate::ValidationPolicy):
//! a lenient policy never produces them.

use thiserror::Error;

/// Result type for hit operations
pub type Result<T> = std::result::Result<T, HitError>;

/// Errors that can occur when building a hit payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HitError {
    /// Field value exceeds its size ceiling
    #[error("{field} too long: {len} bytes exceeds maximum {max} bytes")]
    FieldTooLong {
        /// Field name (e.g. "DocumentTitle")
        field: &'static str,
        /// Measured length (encoded or raw, depending on the field)
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Field value violates a structural rule
    #[error("{field} is malformed: {reason}")]
    InvalidFormat {
        /// Field name
        field: &'static str,
        /// What rule was violated
        reason: &'static str,
    },

    /// Required field is not set at serialization time
    #[error("{field} is required")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// Page view has neither a location nor a host name and path
    #[error("either DocumentLocation or both DocumentHostName and DocumentPath are required")]
    MissingLocation,

    /// Percent-encoded text did not decode to UTF-8
    #[error("invalid percent-encoding: {0}")]
    Decode(String),
}

impl HitError {
    /// Create a FieldTooLong error
    #[inline]
    pub fn too_long(field: &'static str, len: usize, max: usize) -> Self {
        Self::FieldTooLong { field, len, max }
    }

    /// Create an InvalidFormat error
    #[inline]
    pub fn invalid_format(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidFormat { field, reason }
    }

    /// Create a MissingField error
    #[inline]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Name of the field this error is about, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldTooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::MissingField { field } => Some(field),
            Self::MissingLocation => Some("DocumentLocation"),
            Self::Decode(_) => None,
        }
    }
}
