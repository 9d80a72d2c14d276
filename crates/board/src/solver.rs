//! Stationary solver: long-run occupancy of every square.
//!
//! ```text
//!   T (120×120) ──▶ null space of T - I ──▶ p (120) ──▶ Σ over doubles ──▶ 40 squares ──▶ ranking
//! ```

use log::{debug, warn};
use occupancy_prob::{stationary_null_space, stationary_power_iteration, Dist, TransitionMatrix};
use serde::Serialize;

use crate::board::{Board, BOARD_SIZE};
use crate::config::{ModelConfig, SolverKind};
use crate::error::BoardError;
use crate::transition::STATE_COUNT;

/// Long-run probability of finding the token on one square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareProbability {
    /// Square label, e.g. `"JAIL"`.
    pub label: &'static str,
    /// Board index of the square.
    pub index: usize,
    /// Stationary probability, summed over the doubles count.
    pub probability: f64,
}

/// Turns a transition matrix into a ranked list of square probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct StationarySolver {
    kind: SolverKind,
    fallback: bool,
    max_iterations: usize,
    tolerance: f64,
    null_space_tolerance: f64,
}

impl Default for StationarySolver {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

impl StationarySolver {
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            kind: config.solver,
            fallback: config.fallback,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            null_space_tolerance: config.null_space_tolerance,
        }
    }

    /// Stationary distribution over all composite states.
    ///
    /// Runs the configured solver; if it fails and fallback is enabled the
    /// other solver is tried before giving up.
    pub fn stationary(&self, matrix: &TransitionMatrix) -> Result<Dist, BoardError> {
        match self.run(self.kind, matrix) {
            Ok(dist) => Ok(dist),
            Err(err) if self.fallback => {
                let other = match self.kind {
                    SolverKind::NullSpace => SolverKind::PowerIteration,
                    SolverKind::PowerIteration => SolverKind::NullSpace,
                };
                warn!("{:?} solver failed ({}), falling back to {:?}", self.kind, err, other);
                self.run(other, matrix)
            }
            Err(err) => Err(err),
        }
    }

    fn run(&self, kind: SolverKind, matrix: &TransitionMatrix) -> Result<Dist, BoardError> {
        debug!("solving for the stationary distribution with {:?}", kind);
        let dist = match kind {
            SolverKind::NullSpace => stationary_null_space(matrix, self.null_space_tolerance)?,
            SolverKind::PowerIteration => {
                stationary_power_iteration(matrix, self.max_iterations, self.tolerance)?
            }
        };
        Ok(dist)
    }

    /// Per-square stationary probabilities, most likely square first.
    pub fn solve(
        &self,
        matrix: &TransitionMatrix,
        board: &Board,
    ) -> Result<Vec<SquareProbability>, BoardError> {
        let stationary = self.stationary(matrix)?;
        let marginal = square_marginal(&stationary)?;
        Ok(rank(board, &marginal))
    }
}

/// Sum the three doubles-count variants of each square.
pub fn square_marginal(stationary: &Dist) -> Result<Dist, BoardError> {
    if stationary.len() != STATE_COUNT {
        return Err(occupancy_prob::ProbError::ShapeMismatch {
            expected: STATE_COUNT,
            got: stationary.len(),
        }
        .into());
    }
    Ok(stationary.marginalize_blocks(BOARD_SIZE)?)
}

/// Sort squares by probability, highest first; equal probabilities keep
/// label order.
pub fn rank(board: &Board, marginal: &Dist) -> Vec<SquareProbability> {
    let mut ranking: Vec<SquareProbability> = marginal
        .p
        .iter()
        .enumerate()
        .map(|(index, &probability)| SquareProbability {
            label: board.label(index),
            index,
            probability,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| a.label.cmp(b.label))
    });
    ranking
}
