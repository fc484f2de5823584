//! Error types for clonecell-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clonecell-core
///
/// Only explicitly typed construction can fail; [`crate::CellFactory::create`]
/// falls back to a text cell instead of returning an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Input did not parse as a signed integer
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Input matched none of the accepted date/time patterns
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
