//! Error type shared by the matrix engine and the recurrence evaluator.

/// Error type for matrix and recurrence operations.
///
/// Every variant is a structural or input-validation failure. They are
/// detected before any arithmetic runs and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinRecError {
    /// The recurrence definition or ring configuration is malformed.
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),

    /// The requested term index is below 1.
    #[error("invalid index {0}: terms are numbered from 1")]
    InvalidIndex(u64),

    /// Matrix shapes are incompatible for the requested product.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Exponentiation was requested on a non-square matrix.
    #[error("matrix is not square ({rows}x{cols})")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// The exponent reached the recursive step below 1.
    #[error("invalid exponent {0}: recursive step requires p >= 1")]
    InvalidExponent(u64),
}
