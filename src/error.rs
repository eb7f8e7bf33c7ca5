//! Error types for dateorder

use thiserror::Error;

/// Result type alias for dateorder operations
pub type Result<T> = std::result::Result<T, DateOrderError>;

/// Errors raised while constructing a parser.
///
/// Parsing itself never fails: malformed input degrades to
/// [`Reliability::Invalid`](crate::Reliability::Invalid) instead of
/// erroring.
#[derive(Debug, Error)]
pub enum DateOrderError {
    /// No locale codes provided
    #[error("no locale codes provided")]
    EmptyLocales,

    /// A requested locale has no built-in tables
    #[error("unknown locale code: {0}")]
    UnknownLocale(String),
}
