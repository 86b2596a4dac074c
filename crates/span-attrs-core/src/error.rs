//! Error types for the attribute extraction surface.
//!
//! Extraction itself never fails: unresolvable specifiers degrade to
//! omitted attributes. Errors exist only where specifiers are declared.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrsError {
    /// A dotted specifier string was empty or had an empty path segment.
    #[error("invalid attribute specifier: {0}")]
    InvalidSpecifier(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AttrsError>;
