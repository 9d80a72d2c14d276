//! Property-based tests for the dice model and the transition builder.

use proptest::prelude::*;

use occupancy_board::dice::{double_relative_probability, sum_distribution};
use occupancy_board::{build_transition_matrix, CompositeState, STATE_COUNT};

proptest! {
    // 1. The sum distribution is normalized
    #[test]
    fn sum_distribution_normalized(sides in 1u32..=20) {
        let total: f64 = (2..=2 * sides).map(|t| sum_distribution(t, sides)).sum();
        prop_assert!((total - 1.0).abs() < 1e-12, "sides={sides} total={total}");
    }

    // 2. The sum distribution is symmetric about sides + 1
    #[test]
    fn sum_distribution_symmetric(sides in 1u32..=20, offset in 0u32..40) {
        let t = 2 + offset % (2 * sides - 1);
        let mirror = 2 * sides + 2 - t;
        prop_assert_eq!(sum_distribution(t, sides), sum_distribution(mirror, sides));
    }

    // 3. Odd sums are never doubles
    #[test]
    fn odd_sums_have_no_doubles(sides in 1u32..=20, half in 1u32..=20) {
        let t = 2 * half + 1;
        prop_assert_eq!(double_relative_probability(t, sides), 0.0);
    }

    // 4. Each even sum carries exactly one double pair
    #[test]
    fn even_sums_carry_one_double(sides in 1u32..=20, half in 1u32..=20) {
        prop_assume!(half <= sides);
        let t = 2 * half;
        let joint = double_relative_probability(t, sides) * sum_distribution(t, sides);
        let expected = 1.0 / (sides as f64 * sides as f64);
        prop_assert!((joint - expected).abs() < 1e-12);
    }

    // 5. Composite indices round-trip
    #[test]
    fn composite_index_round_trip(index in 0usize..STATE_COUNT) {
        prop_assert_eq!(CompositeState::from_index(index).index(), index);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    // 6. Every column of the transition matrix is a distribution
    #[test]
    fn transition_columns_stochastic(sides in 2u32..=12) {
        let t = build_transition_matrix(sides).unwrap();
        for column in 0..STATE_COUNT {
            let sum = t.column_sum(column);
            prop_assert!((sum - 1.0).abs() < 1e-9, "sides={sides} column={column} sum={sum}");
        }
    }
}
