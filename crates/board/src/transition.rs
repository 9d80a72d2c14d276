//! Transition builder: one turn of play as a 120 × 120 column-stochastic matrix.
//!
//! A state is a square together with the number of consecutive doubles
//! rolled so far:
//!
//! ```text
//!   index = doubles · 40 + square        doubles ∈ {0, 1, 2}
//! ```
//!
//! For every state and every dice sum the roll's mass is split in two:
//!
//! ```text
//!                 ┌─ double ────▶ third double? ── yes ─▶ (JAIL, 0)
//!   (square, d) ──┤                    └────────── no ──▶ resolve(landing, d + 1)
//!                 └─ not double ──────────────────────────▶ resolve(landing, 0)
//! ```
//!
//! `resolve` applies the effect of the landing square (Go To Jail, Community
//! Chest or Chance cards) and may recurse once through the "go back three
//! squares" Chance card.

use log::debug;
use occupancy_prob::TransitionMatrix;

use crate::board::{Board, SquareKind, BOARD_SIZE};
use crate::dice::Dice;
use crate::error::BoardError;

/// Number of tracked doubles counts (0, 1 and 2).
pub const DOUBLES_LEVELS: usize = 3;

/// Size of the composite state space.
pub const STATE_COUNT: usize = DOUBLES_LEVELS * BOARD_SIZE;

/// Deepest chain of card redirections the rules can produce.
pub const MAX_REDIRECT_DEPTH: usize = 2;

const SIXTEENTH: f64 = 1.0 / 16.0;

/// Community Chest: 14 of 16 cards leave the token where it is.
const COMMUNITY_CHEST_STAY: f64 = 14.0 * SIXTEENTH;

/// Chance: 6 of 16 cards leave the token where it is.
const CHANCE_STAY: f64 = 6.0 * SIXTEENTH;

/// Chance: two "advance to the next railway" cards.
const CHANCE_RAILWAY: f64 = 2.0 * SIXTEENTH;

/// Squares the "go back" Chance card moves.
const CHANCE_BACK_STEPS: usize = 3;

/// A square together with the current run of consecutive doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeState {
    pub square: usize,
    pub doubles: usize,
}

impl CompositeState {
    pub fn new(square: usize, doubles: usize) -> Self {
        Self { square, doubles }
    }

    /// Flattened index `doubles · 40 + square`.
    pub fn index(&self) -> usize {
        self.doubles * BOARD_SIZE + self.square
    }

    /// Inverse of [`CompositeState::index`].
    pub fn from_index(index: usize) -> Self {
        Self {
            square: index % BOARD_SIZE,
            doubles: index / BOARD_SIZE,
        }
    }
}

/// Build the transition matrix for two `sides`-sided dice on the standard board.
///
/// # Example
///
/// ```rust
/// use occupancy_board::transition::{build_transition_matrix, STATE_COUNT};
///
/// let t = build_transition_matrix(6).unwrap();
/// assert_eq!(t.size(), STATE_COUNT);
/// for column in 0..STATE_COUNT {
///     assert!((t.column_sum(column) - 1.0).abs() < 1e-9);
/// }
/// ```
pub fn build_transition_matrix(sides: u32) -> Result<TransitionMatrix, BoardError> {
    let board = Board::standard()?;
    let dice = Dice::new(sides)?;
    TransitionBuilder::new(&board, &dice).build()
}

/// Accumulates the one-turn transition probabilities of every composite state.
pub struct TransitionBuilder<'a> {
    board: &'a Board,
    dice: &'a Dice,
    matrix: TransitionMatrix,
}

impl<'a> TransitionBuilder<'a> {
    pub fn new(board: &'a Board, dice: &'a Dice) -> Self {
        Self {
            board,
            dice,
            matrix: TransitionMatrix::zeros(STATE_COUNT),
        }
    }

    /// Populate and validate the matrix.
    ///
    /// # Errors
    ///
    /// Fails with [`occupancy_prob::ProbError::ColumnNotNormalized`] (wrapped
    /// in [`BoardError::Prob`]) if any state's outgoing mass doesn't sum to 1.
    pub fn build(mut self) -> Result<TransitionMatrix, BoardError> {
        let (board, dice) = (self.board, self.dice);
        let jail = CompositeState::new(board.jail(), 0);

        for doubles in 0..DOUBLES_LEVELS {
            for square in 0..BOARD_SIZE {
                let from = CompositeState::new(square, doubles);

                for outcome in dice.outcomes() {
                    let landing = board.advance(square, outcome.total as usize);

                    // A third double goes straight to jail; the landing square
                    // is never acted on.
                    if doubles + 1 == DOUBLES_LEVELS {
                        self.add(from, jail, outcome.double_mass())?;
                    } else {
                        let mass = outcome.double_mass();
                        self.resolve_landing(from, landing, doubles + 1, mass, 0)?;
                    }

                    self.resolve_landing(from, landing, 0, outcome.single_mass(), 0)?;
                }
            }
        }

        self.matrix.validate()?;
        debug!(
            "built {n}x{n} transition matrix for {} sided dice",
            dice.sides(),
            n = STATE_COUNT
        );
        Ok(self.matrix)
    }

    /// Route `mass` arriving on `landing` to wherever the square's effect sends it.
    fn resolve_landing(
        &mut self,
        from: CompositeState,
        landing: usize,
        doubles: usize,
        mass: f64,
        depth: usize,
    ) -> Result<(), BoardError> {
        if depth > MAX_REDIRECT_DEPTH {
            return Err(BoardError::RecursionLimit {
                square: landing,
                depth,
            });
        }
        if mass == 0.0 {
            return Ok(());
        }

        let board = self.board;
        let to = |square: usize| CompositeState::new(square, doubles);

        match board.kind(landing) {
            SquareKind::GoToJail => {
                self.add(from, to(board.jail()), mass)?;
            }
            SquareKind::CommunityChest => {
                self.add(from, to(landing), COMMUNITY_CHEST_STAY * mass)?;
                self.add(from, to(board.go()), SIXTEENTH * mass)?;
                self.add(from, to(board.jail()), SIXTEENTH * mass)?;
            }
            SquareKind::Chance => {
                self.add(from, to(landing), CHANCE_STAY * mass)?;
                for target in board.chance_targets() {
                    self.add(from, to(target), SIXTEENTH * mass)?;
                }
                self.add(from, to(board.next_railway(landing)), CHANCE_RAILWAY * mass)?;
                self.add(from, to(board.next_utility(landing)), SIXTEENTH * mass)?;

                let back = board.back(landing, CHANCE_BACK_STEPS);
                self.resolve_landing(from, back, doubles, SIXTEENTH * mass, depth + 1)?;
            }
            SquareKind::Plain => {
                self.add(from, to(landing), mass)?;
            }
        }
        Ok(())
    }

    fn add(
        &mut self,
        from: CompositeState,
        to: CompositeState,
        mass: f64,
    ) -> Result<(), BoardError> {
        self.matrix.add_mass(from.index(), to.index(), mass)?;
        Ok(())
    }
}
