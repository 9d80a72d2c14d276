//! Weather Chain: Stationary Distributions Two Ways
//!
//! Run with: cargo run -p occupancy-prob --example weather_chain
//!
//! This example demonstrates:
//! - Building a column-stochastic matrix by accumulating mass
//! - Evolving a distribution step by step
//! - Solving T p = p exactly via the null space of T - I
//! - Reaching the same answer by power iteration

use occupancy_prob::{
    stationary_null_space, stationary_power_iteration, Dist, ProbError, TransitionMatrix,
    NULL_SPACE_TOLERANCE,
};

fn main() -> Result<(), ProbError> {
    println!("=== Weather Chain ===\n");

    // Sunny=0, Rainy=1
    let mut weather = TransitionMatrix::zeros(2);
    weather.add_mass(0, 0, 0.8)?;
    weather.add_mass(0, 1, 0.2)?;
    weather.add_mass(1, 0, 0.4)?;
    weather.add_mass(1, 1, 0.6)?;
    weather.validate()?;

    println!("Forecast starting from a sunny day:");
    let mut day = Dist::point(2, 0);
    for n in 0..6 {
        println!("  day {}: sunny {:.4}, rainy {:.4}", n, day.p[0], day.p[1]);
        day = weather.apply(&day)?;
    }
    println!();

    let exact = stationary_null_space(&weather, NULL_SPACE_TOLERANCE)?;
    println!("Null space of T - I:  {:?}", exact.p);

    let iterated = stationary_power_iteration(&weather, 1_000, 1e-12)?;
    println!("Power iteration:      {:?}", iterated.p);
    println!("TV distance:          {:.2e}", exact.tv_distance(&iterated)?);

    Ok(())
}
