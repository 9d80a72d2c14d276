//! Rendering a ranking for people and for other programs.

use crate::error::BoardError;
use crate::solver::SquareProbability;

/// One `LABEL : XX.XXX%` line per square, for the first `top_n` squares.
///
/// ```rust
/// use occupancy_board::report::format_report;
/// use occupancy_board::SquareProbability;
///
/// let ranking = vec![SquareProbability { label: "JAIL", index: 10, probability: 0.0624 }];
/// assert_eq!(format_report(&ranking, 5), "JAIL : 6.240%\n");
/// ```
pub fn format_report(ranking: &[SquareProbability], top_n: usize) -> String {
    ranking
        .iter()
        .take(top_n)
        .map(|square| format!("{} : {:.3}%\n", square.label, square.probability * 100.0))
        .collect()
}

/// Concatenated two-digit board indices of the top `n` squares.
///
/// On a six-sided board the top three are JAIL (10), E3 (24) and GO (00),
/// giving `"102400"`.
pub fn modal_string(ranking: &[SquareProbability], n: usize) -> String {
    ranking
        .iter()
        .take(n)
        .map(|square| format!("{:02}", square.index))
        .collect()
}

/// The ranking as pretty-printed JSON.
pub fn to_json(ranking: &[SquareProbability]) -> Result<String, BoardError> {
    serde_json::to_string_pretty(ranking).map_err(|e| BoardError::Serialization {
        message: e.to_string(),
    })
}
