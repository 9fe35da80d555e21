//! Error types for lattice reduction

use thiserror::Error;

/// Errors surfaced by the reduction routines
///
/// These are deterministic arithmetic errors, not transient failures:
/// nothing here is retried internally, everything propagates unchanged
/// to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// Vectors of unequal length passed to an inner product or vector update
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A zero or linearly dependent vector produced a (near-)zero orthogonal
    /// component, so a projection denominator vanished
    #[error("degenerate basis: vector {index} is zero or linearly dependent")]
    DegenerateBasis { index: usize },

    /// Reduction factor outside the canonical safe range
    #[error("invalid reduction factor {value}: must lie in (0.25, 1)")]
    InvalidParameter { value: f64 },
}

pub type Result<T> = std::result::Result<T, ReduceError>;
