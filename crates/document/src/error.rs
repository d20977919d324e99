//! Error types for document model operations.

use thiserror::Error;

use crate::object::ObjectKind;

/// Result type for document model operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors raised when an id does not resolve to the expected object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The id does not exist in this document.
    #[error("No {expected} with the given id exists in this document")]
    Missing { expected: ObjectKind },

    /// The id exists but names a different kind of object.
    #[error("Expected a {expected}, found a {found}")]
    KindMismatch {
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// The object is not nested inside the owner being looked up.
    #[error("{kind} is not contained in a {expected}")]
    Detached {
        kind: ObjectKind,
        expected: ObjectKind,
    },

    /// Paragraph styles must be named.
    #[error("Paragraph style must not be empty")]
    EmptyStyle,
}
