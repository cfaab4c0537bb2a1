use thiserror::Error;

/// An error type returned by the optimizer.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DfoError {
    /// Search space or population is ill-defined.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A type alias for result type with `DfoError`.
pub type DfoResult<T> = Result<T, DfoError>;
