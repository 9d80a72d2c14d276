//! Model configuration.
//!
//! Everything the computation depends on: the die, which stationary solver
//! runs first, and the numeric knobs of both solvers. The struct deserializes
//! from JSON with every field optional.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dice::MAX_SIDES;
use crate::error::BoardError;

/// Which stationary solver runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// Null vector of `T - I` by Gauss–Jordan elimination.
    #[default]
    NullSpace,
    /// Repeated application of `T` until the iterates settle.
    #[value(alias = "power")]
    PowerIteration,
}

/// Configuration of an [`OccupancyModel`](crate::OccupancyModel).
///
/// ```rust
/// use occupancy_board::{ModelConfig, SolverKind};
///
/// let config = ModelConfig::from_json(r#"{ "sides": 4 }"#).unwrap();
/// assert_eq!(config.sides, 4);
/// assert_eq!(config.solver, SolverKind::NullSpace);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Sides per die.
    pub sides: u32,
    /// Primary solver.
    pub solver: SolverKind,
    /// Try the other solver if the primary one fails.
    pub fallback: bool,
    /// Power iteration step limit.
    pub max_iterations: usize,
    /// Power iteration L1 convergence threshold.
    pub tolerance: f64,
    /// Relative pivot threshold for the null-space rank decision.
    pub null_space_tolerance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            sides: 6,
            solver: SolverKind::NullSpace,
            fallback: true,
            max_iterations: 100_000,
            tolerance: 1e-12,
            null_space_tolerance: occupancy_prob::NULL_SPACE_TOLERANCE,
        }
    }
}

impl ModelConfig {
    /// Default configuration with a different die.
    pub fn with_sides(sides: u32) -> Self {
        Self {
            sides,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the model can't run with.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.sides == 0 || self.sides > MAX_SIDES {
            return Err(BoardError::InvalidSides { sides: self.sides });
        }
        if self.max_iterations == 0 {
            return Err(BoardError::InvalidConfig {
                message: "max_iterations must be positive".to_string(),
            });
        }
        for (name, value) in [
            ("tolerance", self.tolerance),
            ("null_space_tolerance", self.null_space_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoardError::InvalidConfig {
                    message: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
