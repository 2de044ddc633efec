use thiserror::Error;

/// Errors returned when a model specification is malformed.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is malformed: inconsistent array dimensions, an invalid
    /// probability row, or a parameter outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
