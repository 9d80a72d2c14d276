//! Error types for Markov chain operations.

use thiserror::Error;

/// Errors that can occur in probability and Markov chain computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbError {
    /// Distribution doesn't sum to 1.
    #[error("Distribution not normalized: sum = {sum} (expected 1.0)")]
    NotNormalized { sum: f64 },

    /// Negative probability encountered.
    #[error("Negative probability encountered")]
    NegativeProbability,

    /// All weights are zero (can't normalize).
    #[error("Cannot normalize: all weights are zero")]
    ZeroWeights,

    /// Empty distribution.
    #[error("Distribution cannot be empty")]
    EmptyDistribution,

    /// A column of a transition matrix doesn't sum to 1.
    #[error("Column {column} not normalized: sum = {sum} (expected 1.0)")]
    ColumnNotNormalized { column: usize, sum: f64 },

    /// Shape mismatch between a matrix and a vector.
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Index out of bounds.
    #[error("Index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// The null space of `T - I` is not one-dimensional.
    #[error("Expected a one-dimensional null space, found dimension {dimension}")]
    NullSpaceDimension { dimension: usize },

    /// Power iteration did not reach the requested tolerance.
    #[error("Power iteration did not converge after {iterations} iterations (residual {residual:e})")]
    NotConverged { iterations: usize, residual: f64 },
}
