//! Error types for the occupancy model.

use occupancy_prob::ProbError;
use thiserror::Error;

/// Errors that can occur while configuring, building or solving the model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    /// The dice need at least one side.
    #[error("Invalid die side count {sides} (must be at least 1)")]
    InvalidSides { sides: u32 },

    /// A label referenced by the board rules is missing from the board table.
    #[error("Unknown square label: {label}")]
    UnknownSquare { label: String },

    /// Card effects redirected more times than the rules allow.
    #[error("Card redirection from square {square} exceeded depth {depth}")]
    RecursionLimit { square: usize, depth: usize },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A report could not be serialized.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// Failure in the underlying Markov chain computation.
    #[error(transparent)]
    Prob(#[from] ProbError),
}
