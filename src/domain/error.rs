//! Validation errors for caller-supplied generation requests.
//!
//! These are returned by [`NameRequest::new`](super::request::NameRequest::new)
//! and [`NameRequest::parse`](super::request::NameRequest::parse) when the
//! request does not satisfy the boundary contract.
//!
//! # Examples
//!
//! ```
//! use namenest::domain::error::DomainError;
//! use namenest::domain::request::{RawNameRequest, NameRequest};
//! use namenest::domain::vocabulary::Vocabulary;
//!
//! let raw = RawNameRequest {
//!     gender: Some("dragon".into()),
//!     style: Some("classic".into()),
//!     origin: Some("any".into()),
//!     ..Default::default()
//! };
//!
//! let result = NameRequest::parse(&raw, &Vocabulary::standard());
//! assert!(matches!(result, Err(DomainError::UnknownGender(_))));
//! ```

use thiserror::Error;

/// Errors raised when a request violates the input contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required request field was absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    #[error("unknown gender '{0}'")]
    UnknownGender(String),

    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    #[error("unknown origin '{0}'")]
    UnknownOrigin(String),

    /// The count could not be read as a number.
    #[error("count must be a number, got {0}")]
    NonNumericCount(String),

    /// More previously shown names were supplied than the request allows.
    #[error("exclude list has {count} entries, at most {max} are allowed")]
    TooManyExcluded {
        /// Number of entries supplied.
        count: usize,
        /// Upper bound.
        max: usize,
    },
}
