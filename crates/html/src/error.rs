//! Error types for HTML conversion.

use quire_document::{DocumentError, ObjectKind};
use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for conversion operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Markup was empty.
    #[error("Markup must not be empty")]
    EmptyMarkup,

    /// Tag name could not be used as a registry key.
    #[error("Invalid tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: &'static str },

    /// A handler is already registered for the tag.
    #[error("Handler for tag '{tag}' already registered")]
    DuplicateHandler { tag: String },

    /// A handler was invoked with a context it cannot attach content to.
    #[error("Handler for '{tag}' expected {expected}, got a {found}")]
    UnexpectedContext {
        tag: String,
        expected: &'static str,
        found: ObjectKind,
    },

    /// Markup nesting exceeded the configured limit.
    #[error("Markup nesting exceeds the limit of {limit} levels")]
    TooDeep { limit: usize },

    /// Document model operation failed.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}
