//! # Occupancy Prob - Finite Markov Chains
//!
//! Generic machinery for discrete-time Markov chains on a finite state space:
//! distributions, transition matrices and their stationary distributions.
//!
//! ## Core Concepts
//!
//! - **Distributions are vectors**: `p[i]` = P(state = i), entries sum to 1
//! - **Transitions are column-stochastic matrices**: `T[j][i]` = P(next = j | current = i)
//! - **One step is a matrix-vector product**: `p' = T p`
//! - **Stationarity is a null space**: `T p = p` ⟺ `(T - I) p = 0`
//!
//! ## Example: Weather Markov Chain
//!
//! ```rust
//! use occupancy_prob::{stationary_null_space, TransitionMatrix, NULL_SPACE_TOLERANCE};
//!
//! // Weather: Sunny=0, Rainy=1
//! let mut weather = TransitionMatrix::zeros(2);
//! weather.add_mass(0, 0, 0.8).unwrap(); // Sunny → Sunny
//! weather.add_mass(0, 1, 0.2).unwrap(); // Sunny → Rainy
//! weather.add_mass(1, 0, 0.4).unwrap(); // Rainy → Sunny
//! weather.add_mass(1, 1, 0.6).unwrap(); // Rainy → Rainy
//!
//! let long_run = stationary_null_space(&weather, NULL_SPACE_TOLERANCE).unwrap();
//! assert!((long_run.p[0] - 2.0 / 3.0).abs() < 1e-9);
//! ```

mod dist;
mod error;
mod matrix;
mod nullspace;
mod stationary;

pub use dist::Dist;
pub use error::ProbError;
pub use matrix::TransitionMatrix;
pub use nullspace::null_space;
pub use stationary::{stationary_null_space, stationary_power_iteration};

/// Tolerance for probability comparisons.
pub const PROB_TOLERANCE: f64 = 1e-9;

/// Relative pivot tolerance used when extracting null spaces.
pub const NULL_SPACE_TOLERANCE: f64 = 1e-9;
