//! The occupancy model: configuration, board, dice and transition matrix in one place.

use log::info;
use occupancy_prob::{Dist, TransitionMatrix};

use crate::board::Board;
use crate::config::ModelConfig;
use crate::dice::Dice;
use crate::error::BoardError;
use crate::report;
use crate::solver::{square_marginal, SquareProbability, StationarySolver};
use crate::transition::TransitionBuilder;

/// A fully built occupancy model for one die size.
///
/// The transition matrix is built once in [`OccupancyModel::new`]; every
/// query afterwards is a pure function of it.
///
/// # Example
///
/// ```rust
/// use occupancy_board::OccupancyModel;
///
/// let model = OccupancyModel::with_sides(6).unwrap();
/// let ranking = model.compute_probabilities().unwrap();
/// assert_eq!(ranking[0].label, "JAIL");
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyModel {
    config: ModelConfig,
    board: Board,
    dice: Dice,
    matrix: TransitionMatrix,
    solver: StationarySolver,
}

impl OccupancyModel {
    /// Validate the configuration and build the transition matrix.
    pub fn new(config: ModelConfig) -> Result<Self, BoardError> {
        config.validate()?;

        let board = Board::standard()?;
        let dice = Dice::new(config.sides)?;
        let matrix = TransitionBuilder::new(&board, &dice).build()?;
        let solver = StationarySolver::from_config(&config);

        info!(
            "built occupancy model: {} squares, {} sided dice, {} states",
            board.size(),
            dice.sides(),
            matrix.size()
        );

        Ok(Self {
            config,
            board,
            dice,
            matrix,
            solver,
        })
    }

    /// Default configuration with `sides`-sided dice.
    pub fn with_sides(sides: u32) -> Result<Self, BoardError> {
        Self::new(ModelConfig::with_sides(sides))
    }

    /// The validated configuration the model was built from.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// The one-turn transition matrix over composite states.
    pub fn transition_matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Stationary distribution over all 120 composite states.
    pub fn stationary(&self) -> Result<Dist, BoardError> {
        self.solver.stationary(&self.matrix)
    }

    /// Stationary probability of each square, in board order.
    pub fn square_probabilities(&self) -> Result<Dist, BoardError> {
        square_marginal(&self.stationary()?)
    }

    /// Squares ranked by long-run occupancy, most likely first.
    pub fn compute_probabilities(&self) -> Result<Vec<SquareProbability>, BoardError> {
        self.solver.solve(&self.matrix, &self.board)
    }

    /// The top `top_n` squares as `LABEL : XX.XXX%` lines.
    pub fn report(&self, top_n: usize) -> Result<String, BoardError> {
        Ok(report::format_report(&self.compute_probabilities()?, top_n))
    }
}
