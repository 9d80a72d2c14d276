//! Stationary distributions of column-stochastic transition matrices.
//!
//! Two solvers are provided:
//!
//! - [`stationary_null_space`]: the exact route. A stationary `p` satisfies
//!   `T p = p`, i.e. `(T - I) p = 0`, so `p` spans the null space of `T - I`.
//! - [`stationary_power_iteration`]: repeatedly applies `T` to the uniform
//!   distribution until successive iterates agree.

use log::debug;

use crate::dist::Dist;
use crate::error::ProbError;
use crate::matrix::TransitionMatrix;
use crate::nullspace::null_space;

/// Stationary distribution from the null space of `T - I`.
///
/// # Errors
///
/// - [`ProbError::NullSpaceDimension`] unless the null space is exactly
///   one-dimensional at the given tolerance (a reducible chain has several
///   stationary vectors and none is singled out)
/// - [`ProbError::NegativeProbability`] if the null vector mixes signs
///
/// # Example
///
/// ```rust
/// use occupancy_prob::{stationary_null_space, TransitionMatrix};
///
/// let mut weather = TransitionMatrix::zeros(2);
/// weather.add_mass(0, 0, 0.8).unwrap();
/// weather.add_mass(0, 1, 0.2).unwrap();
/// weather.add_mass(1, 0, 0.4).unwrap();
/// weather.add_mass(1, 1, 0.6).unwrap();
///
/// let pi = stationary_null_space(&weather, 1e-9).unwrap();
/// assert!((pi.p[0] - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn stationary_null_space(
    matrix: &TransitionMatrix,
    tolerance: f64,
) -> Result<Dist, ProbError> {
    let basis = null_space(&matrix.minus_identity(), tolerance)?;
    debug!(
        "null space of T - I ({n}x{n}) has dimension {}",
        basis.len(),
        n = matrix.size()
    );

    match <[Vec<f64>; 1]>::try_from(basis) {
        Ok([v]) => Dist::from_null_vector(v),
        Err(basis) => Err(ProbError::NullSpaceDimension {
            dimension: basis.len(),
        }),
    }
}

/// Stationary distribution by power iteration from the uniform distribution.
///
/// Stops once the L1 distance between successive iterates drops below
/// `tolerance`. Converges for any irreducible aperiodic chain; periodic
/// chains oscillate and report [`ProbError::NotConverged`].
pub fn stationary_power_iteration(
    matrix: &TransitionMatrix,
    max_iter: usize,
    tolerance: f64,
) -> Result<Dist, ProbError> {
    let n = matrix.size();
    if n == 0 {
        return Err(ProbError::EmptyDistribution);
    }

    let mut dist = Dist::uniform(n);
    let mut residual = f64::INFINITY;

    for iteration in 0..max_iter {
        let next = matrix.apply(&dist)?;

        residual = dist
            .p
            .iter()
            .zip(next.p.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        if residual < tolerance {
            debug!("power iteration converged after {} iterations", iteration + 1);
            return Dist::from_weights(next.p);
        }

        dist = next;
    }

    Err(ProbError::NotConverged {
        iterations: max_iter,
        residual,
    })
}
