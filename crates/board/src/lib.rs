//! # Occupancy Board - Long-Run Square Occupancy on a Monopoly-Style Board
//!
//! A turn of play is a Markov chain over 120 composite states: one of 40
//! squares times the number (0, 1 or 2) of consecutive doubles rolled so far.
//! Its stationary distribution, summed over the doubles count, is the
//! fraction of turns that end on each square.
//!
//! ## Pipeline
//!
//! ```text
//!   ┌──────┐   ┌───────┐
//!   │ Dice │   │ Board │
//!   └──┬───┘   └───┬───┘
//!      └─────┬─────┘
//!            ▼
//!   ┌──────────────────┐      ┌───────────────────┐
//!   │ TransitionBuilder│─────▶│ StationarySolver  │─────▶ ranked squares
//!   └──────────────────┘  T   └───────────────────┘
//! ```
//!
//! - [`dice`]: sum distribution of two dice and the share of each sum that is a double
//! - [`board`]: the 40 labels, card destinations, next railway / utility
//! - [`transition`]: dice outcomes and card effects accumulated into `T`
//! - [`solver`]: null vector of `T - I`, normalized and marginalized
//! - [`report`]: `LABEL : XX.XXX%` lines, modal string, JSON
//!
//! ## Example
//!
//! ```rust
//! use occupancy_board::OccupancyModel;
//!
//! let model = OccupancyModel::with_sides(4).unwrap();
//! let ranking = model.compute_probabilities().unwrap();
//!
//! assert_eq!(ranking[0].label, "JAIL");
//! let total: f64 = ranking.iter().map(|s| s.probability).sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```

pub mod board;
pub mod config;
pub mod dice;
mod error;
pub mod model;
pub mod report;
pub mod solver;
pub mod transition;

pub use board::{Board, SquareKind, BOARD_SIZE, SQUARES};
pub use config::{ModelConfig, SolverKind};
pub use dice::{Dice, DiceOutcome, MAX_SIDES};
pub use error::BoardError;
pub use model::OccupancyModel;
pub use solver::{SquareProbability, StationarySolver};
pub use transition::{build_transition_matrix, CompositeState, TransitionBuilder, STATE_COUNT};
