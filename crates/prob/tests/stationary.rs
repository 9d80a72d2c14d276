//! # Stationary Distribution Tests
//!
//! Both solvers on randomly generated chains:
//! - Strictly positive columns make the chain irreducible and aperiodic
//! - The null-space and power-iteration answers must agree
//! - The answer must be a fixed point of `T`

use proptest::prelude::*;

use occupancy_prob::{
    stationary_null_space, stationary_power_iteration, Dist, TransitionMatrix,
    NULL_SPACE_TOLERANCE,
};

/// Strategy: an `n × n` column-stochastic matrix with every entry positive.
fn positive_chain() -> impl Strategy<Value = TransitionMatrix> {
    (2usize..=8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0.05f64..1.0, n), n).prop_map(move |columns| {
            let mut m = TransitionMatrix::zeros(n);
            for (from, weights) in columns.iter().enumerate() {
                let total: f64 = weights.iter().sum();
                for (to, w) in weights.iter().enumerate() {
                    m.add_mass(from, to, w / total).unwrap();
                }
            }
            m
        })
    })
}

proptest! {
    #[test]
    fn null_space_is_fixed_point(m in positive_chain()) {
        let pi = stationary_null_space(&m, NULL_SPACE_TOLERANCE).unwrap();
        prop_assert!((pi.total() - 1.0).abs() < 1e-9);
        prop_assert!(pi.p.iter().all(|&x| x > 0.0));

        let after = m.apply(&pi).unwrap();
        prop_assert!(pi.tv_distance(&after).unwrap() < 1e-10);
    }

    #[test]
    fn solvers_agree(m in positive_chain()) {
        let exact = stationary_null_space(&m, NULL_SPACE_TOLERANCE).unwrap();
        let iterated = stationary_power_iteration(&m, 100_000, 1e-13).unwrap();
        prop_assert!(exact.tv_distance(&iterated).unwrap() < 1e-9);
    }
}

#[test]
fn test_block_diagonal_chain_is_rejected() {
    // Two closed classes {0, 1} and {2, 3}.
    let mut m = TransitionMatrix::zeros(4);
    for (from, to, p) in [
        (0, 0, 0.5),
        (0, 1, 0.5),
        (1, 0, 0.5),
        (1, 1, 0.5),
        (2, 2, 0.3),
        (2, 3, 0.7),
        (3, 2, 0.6),
        (3, 3, 0.4),
    ] {
        m.add_mass(from, to, p).unwrap();
    }
    m.validate().unwrap();

    assert!(matches!(
        stationary_null_space(&m, NULL_SPACE_TOLERANCE),
        Err(occupancy_prob::ProbError::NullSpaceDimension { dimension: 2 })
    ));
}

#[test]
fn test_uniform_is_stationary_for_doubly_stochastic() {
    let mut m = TransitionMatrix::zeros(3);
    for from in 0..3 {
        m.add_mass(from, (from + 1) % 3, 0.5).unwrap();
        m.add_mass(from, from, 0.5).unwrap();
    }
    let pi = stationary_null_space(&m, NULL_SPACE_TOLERANCE).unwrap();
    let uniform = Dist::uniform(3);
    assert!(pi.tv_distance(&uniform).unwrap() < 1e-12);
}
