//! # Ranking Tests
//!
//! End-to-end checks of the occupancy model:
//! - Known rankings for six- and four-sided dice
//! - Normalization of the composite and per-square distributions
//! - Repeated queries give identical answers

use occupancy_board::report::modal_string;
use occupancy_board::{OccupancyModel, SquareProbability, BOARD_SIZE, STATE_COUNT};

fn assert_ranking(ranking: &[SquareProbability], expected: &[(&str, f64)]) {
    for (square, (label, percent)) in ranking.iter().zip(expected) {
        assert_eq!(square.label, *label, "ranking was {:?}", &ranking[..expected.len()]);
        assert!(
            (square.probability * 100.0 - percent).abs() < 0.05,
            "{label}: {:.4}% vs expected {percent}%",
            square.probability * 100.0
        );
    }
}

// ============================================================================
// Known Rankings
// ============================================================================

#[test]
fn test_six_sided_ranking() {
    let model = OccupancyModel::with_sides(6).unwrap();
    let ranking = model.compute_probabilities().unwrap();

    assert_ranking(
        &ranking,
        &[
            ("JAIL", 6.24),
            ("E3", 3.18),
            ("GO", 3.10),
            ("D3", 3.09),
            ("R3", 3.07),
        ],
    );
    assert!(ranking[0].probability > ranking[1].probability);
    assert_eq!(modal_string(&ranking, 3), "102400");
}

#[test]
fn test_four_sided_ranking() {
    let model = OccupancyModel::with_sides(4).unwrap();
    let ranking = model.compute_probabilities().unwrap();

    assert_ranking(
        &ranking,
        &[
            ("JAIL", 7.02),
            ("R2", 3.62),
            ("E3", 3.29),
            ("D1", 3.23),
            ("R3", 3.11),
        ],
    );
    assert!(ranking[0].probability > ranking[1].probability);
    assert_eq!(modal_string(&ranking, 3), "101524");
}

#[test]
fn test_report_format() {
    let model = OccupancyModel::with_sides(6).unwrap();
    let report = model.report(5).unwrap();
    let labels: Vec<&str> = report
        .lines()
        .map(|line| line.split(" : ").next().unwrap())
        .collect();
    assert_eq!(labels, vec!["JAIL", "E3", "GO", "D3", "R3"]);
    for line in report.lines() {
        let percent = line.split(" : ").nth(1).unwrap();
        let digits = percent.strip_suffix('%').unwrap();
        assert_eq!(digits.split('.').nth(1).unwrap().len(), 3);
    }
}

// ============================================================================
// Distribution Properties
// ============================================================================

#[test]
fn test_stationary_vector_is_a_distribution() {
    for sides in 2..=8 {
        let model = OccupancyModel::with_sides(sides).unwrap();
        let stationary = model.stationary().unwrap();
        assert_eq!(stationary.len(), STATE_COUNT);
        assert!((stationary.total() - 1.0).abs() < 1e-9);
        assert!(stationary.p.iter().all(|&x| x >= -1e-9));
    }
}

#[test]
fn test_stationary_vector_is_fixed_point() {
    let model = OccupancyModel::with_sides(6).unwrap();
    let stationary = model.stationary().unwrap();
    let after = model.transition_matrix().apply(&stationary).unwrap();
    assert!(stationary.tv_distance(&after).unwrap() < 1e-10);
}

#[test]
fn test_square_marginals_sum_to_one() {
    for sides in [2, 4, 6, 10] {
        let model = OccupancyModel::with_sides(sides).unwrap();
        let ranking = model.compute_probabilities().unwrap();
        assert_eq!(ranking.len(), BOARD_SIZE);
        let total: f64 = ranking.iter().map(|s| s.probability).sum();
        assert!((total - 1.0).abs() < 1e-9, "{sides} sides: total {total}");
        for pair in ranking.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }
}

#[test]
fn test_go_to_jail_never_occupied() {
    let model = OccupancyModel::with_sides(6).unwrap();
    let ranking = model.compute_probabilities().unwrap();
    let g2j = ranking.iter().find(|s| s.label == "G2J").unwrap();
    assert!(g2j.probability.abs() < 1e-12);
    assert_eq!(ranking.last().unwrap().label, "G2J");
}

#[test]
fn test_one_sided_dice_cycle() {
    // Every roll is a double of 2: JAIL → U1 → C3 → JAIL.
    let model = OccupancyModel::with_sides(1).unwrap();
    let ranking = model.compute_probabilities().unwrap();
    let mut top: Vec<&str> = ranking[..3].iter().map(|s| s.label).collect();
    top.sort_unstable();
    assert_eq!(top, vec!["C3", "JAIL", "U1"]);
    for square in &ranking[..3] {
        assert!((square.probability - 1.0 / 3.0).abs() < 1e-9);
    }
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_compute_probabilities_idempotent() {
    let model = OccupancyModel::with_sides(6).unwrap();
    let first = model.compute_probabilities().unwrap();
    let second = model.compute_probabilities().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_models_are_independent() {
    let a = OccupancyModel::with_sides(6).unwrap();
    let b = OccupancyModel::with_sides(6).unwrap();
    assert_eq!(a.transition_matrix(), b.transition_matrix());
    assert_eq!(
        a.compute_probabilities().unwrap(),
        b.compute_probabilities().unwrap()
    );
}
