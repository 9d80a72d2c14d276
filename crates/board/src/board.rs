//! The static board: 40 labelled squares traversed in index order.
//!
//! ```text
//!   GO  A1 CC1 A2  T1  R1  B1 CH1  B2  B3
//!   0   1   2   3   4   5   6   7   8   9
//!   JAIL C1 U1  C2  C3  R2  D1 CC2  D2  D3
//!   10  11  12  13  14  15  16  17  18  19
//!   FP  E1 CH2  E2  E3  R3  F1  F2  U2  F3
//!   20  21  22  23  24  25  26  27  28  29
//!   G2J G1  G2 CC3  G3  R4 CH3  H1  T2  H2
//!   30  31  32  33  34  35  36  37  38  39
//! ```

use crate::error::BoardError;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 40;

/// Square labels in traversal order, starting at GO.
pub const SQUARES: [&str; BOARD_SIZE] = [
    "GO", "A1", "CC1", "A2", "T1", "R1", "B1", "CH1", "B2", "B3", //
    "JAIL", "C1", "U1", "C2", "C3", "R2", "D1", "CC2", "D2", "D3", //
    "FP", "E1", "CH2", "E2", "E3", "R3", "F1", "F2", "U2", "F3", //
    "G2J", "G1", "G2", "CC3", "G3", "R4", "CH3", "H1", "T2", "H2",
];

const RAILWAYS: [&str; 4] = ["R1", "R2", "R3", "R4"];
const UTILITIES: [&str; 2] = ["U1", "U2"];
/// Fixed destinations of the "advance to" Chance cards.
const CHANCE_TARGETS: [&str; 6] = ["GO", "JAIL", "C1", "E3", "H2", "R1"];

/// What happens when a token comes to rest on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareKind {
    /// Sends the token straight to JAIL.
    GoToJail,
    /// Draws a Community Chest card.
    CommunityChest,
    /// Draws a Chance card.
    Chance,
    /// No effect.
    Plain,
}

impl SquareKind {
    fn of(label: &str) -> Self {
        if label == "G2J" {
            SquareKind::GoToJail
        } else if label.starts_with("CC") {
            SquareKind::CommunityChest
        } else if label.starts_with("CH") {
            SquareKind::Chance
        } else {
            SquareKind::Plain
        }
    }
}

/// Board geometry with every named square resolved to its index.
///
/// # Example
///
/// ```rust
/// use occupancy_board::Board;
///
/// let board = Board::standard().unwrap();
/// assert_eq!(board.index_of("JAIL").unwrap(), 10);
/// assert_eq!(board.label(36), "CH3");
/// assert_eq!(board.next_railway(36), 5);  // CH3 → R1 (wraps past GO)
/// assert_eq!(board.next_utility(22), 28); // CH2 → U2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    labels: Vec<&'static str>,
    kinds: Vec<SquareKind>,
    go: usize,
    jail: usize,
    railways: Vec<usize>,
    utilities: Vec<usize>,
    chance_targets: [usize; 6],
}

impl Board {
    /// The standard 40-square board.
    pub fn standard() -> Result<Self, BoardError> {
        Self::from_labels(&SQUARES)
    }

    /// Build a board from a label table.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSquare`] if a label the rules refer to
    /// (GO, JAIL, G2J, the railways, utilities or Chance destinations) is
    /// missing, and [`BoardError::InvalidConfig`] for a table that isn't
    /// [`BOARD_SIZE`] long or repeats a label.
    pub fn from_labels(labels: &[&'static str]) -> Result<Self, BoardError> {
        if labels.len() != BOARD_SIZE {
            return Err(BoardError::InvalidConfig {
                message: format!("expected {BOARD_SIZE} squares, got {}", labels.len()),
            });
        }

        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(BoardError::InvalidConfig {
                    message: format!("duplicate square label {label}"),
                });
            }
        }

        let lookup = |label: &str| -> Result<usize, BoardError> {
            labels
                .iter()
                .position(|&l| l == label)
                .ok_or_else(|| BoardError::UnknownSquare {
                    label: label.to_string(),
                })
        };

        lookup("G2J")?;

        let mut railways = RAILWAYS
            .iter()
            .map(|&l| lookup(l))
            .collect::<Result<Vec<_>, _>>()?;
        railways.sort_unstable();
        let mut utilities = UTILITIES
            .iter()
            .map(|&l| lookup(l))
            .collect::<Result<Vec<_>, _>>()?;
        utilities.sort_unstable();

        let mut chance_targets = [0; 6];
        for (slot, label) in chance_targets.iter_mut().zip(CHANCE_TARGETS) {
            *slot = lookup(label)?;
        }

        Ok(Self {
            labels: labels.to_vec(),
            kinds: labels.iter().map(|l| SquareKind::of(l)).collect(),
            go: lookup("GO")?,
            jail: lookup("JAIL")?,
            railways,
            utilities,
            chance_targets,
        })
    }

    /// Number of squares.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// All labels in board order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Label of square `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn label(&self, index: usize) -> &'static str {
        self.labels[index]
    }

    /// Index of the square called `label`.
    pub fn index_of(&self, label: &str) -> Result<usize, BoardError> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .ok_or_else(|| BoardError::UnknownSquare {
                label: label.to_string(),
            })
    }

    /// Effect of coming to rest on square `index`.
    pub fn kind(&self, index: usize) -> SquareKind {
        self.kinds[index]
    }

    /// The square reached by moving `steps` forward from `from`, wrapping past GO.
    pub fn advance(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.size()
    }

    /// The square reached by moving `steps` backward from `from`.
    pub fn back(&self, from: usize, steps: usize) -> usize {
        let n = self.size();
        (from + n - steps % n) % n
    }

    /// Index of GO.
    pub fn go(&self) -> usize {
        self.go
    }

    /// Index of JAIL.
    pub fn jail(&self) -> usize {
        self.jail
    }

    /// GO, JAIL, C1, E3, H2 and R1: the fixed "advance to" Chance destinations.
    pub fn chance_targets(&self) -> [usize; 6] {
        self.chance_targets
    }

    /// The first railway strictly ahead of `square`.
    ///
    /// The railways split the board into quadrants; a square in the quadrant
    /// starting at one railway advances to the next one.
    pub fn next_railway(&self, square: usize) -> usize {
        first_ahead(&self.railways, square)
    }

    /// The first utility strictly ahead of `square`.
    pub fn next_utility(&self, square: usize) -> usize {
        first_ahead(&self.utilities, square)
    }
}

fn first_ahead(sorted: &[usize], square: usize) -> usize {
    sorted
        .iter()
        .copied()
        .find(|&candidate| candidate > square)
        .unwrap_or(sorted[0])
}
