use thiserror::Error;

// Unified error type for stationary

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StationaryError {
    #[error("dimension mismatch: matrix has {rows} rows but right-hand side has length {len}")]
    DimensionMismatch { rows: usize, len: usize },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix does not satisfy the {method} convergence criteria (strict diagonal dominance)")]
    ConvergencePrecondition { method: &'static str },
    #[error("invalid solver method: {0:?}")]
    InvalidMethod(String),
}
