//! Error types for the sift crate.
//!
//! Normalizing and filtering never fail. Errors only come from validating
//! field paths supplied as text.

use thiserror::Error;

/// Errors that can occur when parsing a field path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiftError {
    /// The path was empty or only whitespace.
    #[error("field path is empty")]
    EmptyPath,

    /// A segment between dots was empty, as in `a..b` or `.a`.
    #[error("field path '{path}' has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
