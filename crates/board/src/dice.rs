//! Two-dice roll model.
//!
//! Rolling two fair `s`-sided dice gives a triangular distribution over the
//! sums `2..=2s`. A sum can also be split into the part that came from a
//! double (both dice equal) and the part that didn't:
//!
//! ```text
//!   P(sum = t, double)     = P(t) · d(t)
//!   P(sum = t, not double) = P(t) · (1 - d(t))
//! ```
//!
//! where `d(t)` is [`double_relative_probability`].

use crate::error::BoardError;

/// Largest die the model accepts.
pub const MAX_SIDES: u32 = 1 << 16;

/// Probability that two `sides`-sided dice sum to `total`.
///
/// Zero outside the support `2..=2·sides`.
///
/// ```rust
/// use occupancy_board::dice::sum_distribution;
///
/// assert!((sum_distribution(7, 6) - 6.0 / 36.0).abs() < 1e-12);
/// assert!((sum_distribution(2, 6) - 1.0 / 36.0).abs() < 1e-12);
/// assert_eq!(sum_distribution(13, 6), 0.0);
/// ```
pub fn sum_distribution(total: u32, sides: u32) -> f64 {
    ways(total, sides) as f64 / square(sides)
}

/// Fraction of the mass of sum `total` that comes from a double.
///
/// Zero for odd sums. For even sums exactly one of the `P(t)·s²` pairs is a
/// double, so the fraction is `1 / (P(t)·s²)`; multiplying it by
/// [`sum_distribution`] gives `1/s²`, the chance of that particular double.
pub fn double_relative_probability(total: u32, sides: u32) -> f64 {
    match ways(total, sides) {
        0 => 0.0,
        _ if total % 2 == 1 => 0.0,
        ways => 1.0 / ways as f64,
    }
}

/// Ordered face pairs summing to `total`.
fn ways(total: u32, sides: u32) -> u64 {
    let (total, sides) = (u64::from(total), u64::from(sides));
    if sides == 0 || total < 2 || total > 2 * sides {
        return 0;
    }
    if total <= sides + 1 {
        total - 1
    } else {
        2 * sides + 1 - total
    }
}

fn square(sides: u32) -> f64 {
    let s = f64::from(sides);
    s * s
}

/// One achievable sum together with its probabilities.
///
/// The joint masses are counted from face pairs, so `single_mass` is never
/// negative and the two masses add up to `probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceOutcome {
    /// The dice sum.
    pub total: u32,
    /// P(sum = total).
    pub probability: f64,
    /// Share of that probability coming from a double.
    pub double_relative: f64,
    double: f64,
    single: f64,
}

impl DiceOutcome {
    fn new(total: u32, sides: u32) -> Self {
        let ways = ways(total, sides);
        let doubles = u64::from(ways > 0 && total % 2 == 0);
        let pairs = square(sides);
        Self {
            total,
            probability: sum_distribution(total, sides),
            double_relative: double_relative_probability(total, sides),
            double: doubles as f64 / pairs,
            single: (ways - doubles) as f64 / pairs,
        }
    }

    /// Joint probability of rolling `total` as a double.
    pub fn double_mass(&self) -> f64 {
        self.double
    }

    /// Joint probability of rolling `total` with two different faces.
    pub fn single_mass(&self) -> f64 {
        self.single
    }
}

/// A pair of fair dice with a fixed number of sides.
///
/// The outcome table is computed once on construction.
///
/// # Example
///
/// ```rust
/// use occupancy_board::Dice;
///
/// let dice = Dice::new(6).unwrap();
/// assert_eq!(dice.outcomes().len(), 11);
///
/// let total: f64 = dice.outcomes().iter().map(|o| o.probability).sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dice {
    sides: u32,
    outcomes: Vec<DiceOutcome>,
}

impl Dice {
    /// Create the dice model.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSides`] if `sides` is 0 or above [`MAX_SIDES`].
    pub fn new(sides: u32) -> Result<Self, BoardError> {
        if sides == 0 || sides > MAX_SIDES {
            return Err(BoardError::InvalidSides { sides });
        }

        let outcomes = (2..=2 * sides)
            .map(|total| DiceOutcome::new(total, sides))
            .collect();

        Ok(Self { sides, outcomes })
    }

    /// Number of sides per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Every achievable sum, in increasing order.
    pub fn outcomes(&self) -> &[DiceOutcome] {
        &self.outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_sided_distribution() {
        let expected = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];
        for (offset, ways) in expected.iter().enumerate() {
            let total = offset as u32 + 2;
            assert!((sum_distribution(total, 6) - *ways as f64 / 36.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_outside_support() {
        assert_eq!(sum_distribution(1, 6), 0.0);
        assert_eq!(sum_distribution(13, 6), 0.0);
        assert_eq!(double_relative_probability(14, 6), 0.0);
    }

    #[test]
    fn test_double_relative_values() {
        // Snake eyes is always a double.
        assert!((double_relative_probability(2, 6) - 1.0).abs() < 1e-12);
        // One of the three ways to make 4 is (2, 2).
        assert!((double_relative_probability(4, 6) - 1.0 / 3.0).abs() < 1e-12);
        // 12 is only ever (6, 6).
        assert!((double_relative_probability(12, 6) - 1.0).abs() < 1e-12);
        assert_eq!(double_relative_probability(7, 6), 0.0);
    }

    #[test]
    fn test_double_mass_total() {
        // P(any double) = 1 / sides
        for sides in 1..=8 {
            let dice = Dice::new(sides).unwrap();
            let doubles: f64 = dice.outcomes().iter().map(DiceOutcome::double_mass).sum();
            assert!((doubles - 1.0 / sides as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_plus_double_mass() {
        let dice = Dice::new(4).unwrap();
        for outcome in dice.outcomes() {
            let sum = outcome.single_mass() + outcome.double_mass();
            assert!((sum - outcome.probability).abs() < 1e-12);
        }
    }

    #[test]
    fn test_one_sided_dice() {
        let dice = Dice::new(1).unwrap();
        assert_eq!(dice.outcomes().len(), 1);
        let only = dice.outcomes()[0];
        assert_eq!(only.total, 2);
        assert!((only.probability - 1.0).abs() < 1e-12);
        assert!((only.double_relative - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sides_rejected() {
        assert_eq!(Dice::new(0), Err(BoardError::InvalidSides { sides: 0 }));
    }

    #[test]
    fn test_oversized_dice_rejected() {
        assert_eq!(
            Dice::new(u32::MAX),
            Err(BoardError::InvalidSides { sides: u32::MAX })
        );
        assert_eq!(
            Dice::new(MAX_SIDES + 1),
            Err(BoardError::InvalidSides { sides: MAX_SIDES + 1 })
        );
        assert!(Dice::new(MAX_SIDES).is_ok());
    }

    #[test]
    fn test_huge_sides_no_overflow() {
        let sides = u32::MAX;
        let s = sides as f64;
        assert!((sum_distribution(5, sides) - 4.0 / (s * s)).abs() < 1e-30);
        assert!(sum_distribution(u32::MAX, sides) > 0.0);
        assert_eq!(double_relative_probability(2, sides), 1.0);
    }

    #[test]
    fn test_masses_never_negative() {
        for sides in 1..=40 {
            let dice = Dice::new(sides).unwrap();
            for outcome in dice.outcomes() {
                assert!(outcome.single_mass() >= 0.0, "{sides} sides, sum {}", outcome.total);
                assert!(outcome.double_mass() >= 0.0);
                assert!(outcome.double_relative <= 1.0);
            }
            let snake_eyes = dice.outcomes()[0];
            assert_eq!(snake_eyes.single_mass(), 0.0);
        }
    }
}
