//! Column-stochastic transition matrices over a finite state space.

use crate::dist::Dist;
use crate::error::ProbError;
use crate::PROB_TOLERANCE;

/// A square transition matrix `T` where `T[j][i]` = P(next = j | current = i).
///
/// Each column is the outgoing distribution of one state, so a valid matrix
/// is column-stochastic. Entries start at zero and only ever grow through
/// [`TransitionMatrix::add_mass`]: several routes may lead to the same
/// destination and their probabilities accumulate.
///
/// # Example
///
/// ```rust
/// use occupancy_prob::{Dist, TransitionMatrix};
///
/// // Weather: Sunny=0, Rainy=1
/// let mut weather = TransitionMatrix::zeros(2);
/// weather.add_mass(0, 0, 0.8).unwrap();
/// weather.add_mass(0, 1, 0.2).unwrap();
/// weather.add_mass(1, 0, 0.4).unwrap();
/// weather.add_mass(1, 1, 0.6).unwrap();
/// weather.validate().unwrap();
///
/// let tomorrow = weather.apply(&Dist::point(2, 0)).unwrap();
/// assert!((tomorrow.p[0] - 0.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    /// `t[to][from]`
    t: Vec<Vec<f64>>,
    n: usize,
}

impl TransitionMatrix {
    /// An all-zero `n × n` accumulator.
    pub fn zeros(n: usize) -> Self {
        Self {
            t: vec![vec![0.0; n]; n],
            n,
        }
    }

    /// The identity transition: every state stays where it is.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.t[i][i] = 1.0;
        }
        m
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Add `amount` of probability to the move `from → to`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::IndexOutOfBounds`] if either state is outside the
    /// matrix and [`ProbError::NegativeProbability`] for a negative amount.
    pub fn add_mass(&mut self, from: usize, to: usize, amount: f64) -> Result<(), ProbError> {
        for index in [from, to] {
            if index >= self.n {
                return Err(ProbError::IndexOutOfBounds {
                    index,
                    size: self.n,
                });
            }
        }
        if amount < 0.0 {
            return Err(ProbError::NegativeProbability);
        }

        self.t[to][from] += amount;
        Ok(())
    }

    /// P(next = `to` | current = `from`).
    pub fn get(&self, to: usize, from: usize) -> Result<f64, ProbError> {
        self.t
            .get(to)
            .and_then(|row| row.get(from))
            .copied()
            .ok_or(ProbError::IndexOutOfBounds {
                index: to.max(from),
                size: self.n,
            })
    }

    /// Total outgoing probability of state `from`.
    pub fn column_sum(&self, from: usize) -> f64 {
        self.t.iter().map(|row| row[from]).sum()
    }

    /// Check that every column is a probability distribution.
    pub fn validate(&self) -> Result<(), ProbError> {
        if self.t.iter().flatten().any(|&x| x < 0.0) {
            return Err(ProbError::NegativeProbability);
        }

        for column in 0..self.n {
            let sum = self.column_sum(column);
            if (sum - 1.0).abs() > PROB_TOLERANCE {
                return Err(ProbError::ColumnNotNormalized { column, sum });
            }
        }
        Ok(())
    }

    /// Advance a distribution by one step: `q[j] = Σᵢ T[j][i] · p[i]`.
    pub fn apply(&self, dist: &Dist) -> Result<Dist, ProbError> {
        if dist.len() != self.n {
            return Err(ProbError::ShapeMismatch {
                expected: self.n,
                got: dist.len(),
            });
        }

        let p = self
            .t
            .iter()
            .map(|row| row.iter().zip(&dist.p).map(|(t, p)| t * p).sum())
            .collect();
        Ok(Dist { p })
    }

    /// The dense matrix `T - I`, whose null space holds the stationary vector.
    pub fn minus_identity(&self) -> Vec<Vec<f64>> {
        let mut a = self.t.clone();
        for (i, row) in a.iter_mut().enumerate() {
            row[i] -= 1.0;
        }
        a
    }

    /// Borrow the rows (`rows()[to][from]`).
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.t
    }
}
