//! Probability distributions over finite sets.

use crate::error::ProbError;
use crate::PROB_TOLERANCE;

/// A probability distribution over a finite set {0, 1, ..., n-1}.
///
/// Invariants:
/// - All probabilities are non-negative (up to [`PROB_TOLERANCE`])
/// - Probabilities sum to 1 (within tolerance)
///
/// # Example
///
/// ```rust
/// use occupancy_prob::Dist;
///
/// let coin = Dist::uniform(2);
/// assert!((coin.p[0] - 0.5).abs() < 1e-12);
///
/// let certain = Dist::point(3, 1);
/// assert_eq!(certain.p[1], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dist {
    /// Probability vector (sums to 1).
    pub p: Vec<f64>,
}

impl Dist {
    /// Create a new distribution from a probability vector.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The vector is empty
    /// - Any probability is negative
    /// - The probabilities don't sum to 1 (within tolerance)
    pub fn new(p: Vec<f64>) -> Result<Self, ProbError> {
        if p.is_empty() {
            return Err(ProbError::EmptyDistribution);
        }

        if p.iter().any(|&x| x < -PROB_TOLERANCE) {
            return Err(ProbError::NegativeProbability);
        }

        let sum: f64 = p.iter().sum();
        if (sum - 1.0).abs() > PROB_TOLERANCE {
            return Err(ProbError::NotNormalized { sum });
        }

        Ok(Self { p })
    }

    /// Create a distribution from unnormalized non-negative weights.
    ///
    /// ```rust
    /// use occupancy_prob::Dist;
    ///
    /// let d = Dist::from_weights(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert!((d.p[2] - 0.5).abs() < 1e-12);
    /// ```
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, ProbError> {
        if weights.is_empty() {
            return Err(ProbError::EmptyDistribution);
        }

        if weights.iter().any(|&x| x < 0.0) {
            return Err(ProbError::NegativeProbability);
        }

        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(ProbError::ZeroWeights);
        }

        let p: Vec<f64> = weights.iter().map(|w| w / sum).collect();
        Ok(Self { p })
    }

    /// Create a distribution from a null vector of unknown sign and scale.
    ///
    /// A linear solver may return `v` or `-v`, so the sign is flipped when the
    /// raw sum is negative before dividing by its magnitude. Entries that are
    /// negative only by rounding noise (above `-PROB_TOLERANCE`) are clamped
    /// to zero; anything more negative means the vector is not a
    /// distribution at all.
    ///
    /// ```rust
    /// use occupancy_prob::Dist;
    ///
    /// let d = Dist::from_null_vector(vec![-2.0, -6.0]).unwrap();
    /// assert!((d.p[0] - 0.25).abs() < 1e-12);
    /// assert!((d.p[1] - 0.75).abs() < 1e-12);
    /// ```
    pub fn from_null_vector(v: Vec<f64>) -> Result<Self, ProbError> {
        if v.is_empty() {
            return Err(ProbError::EmptyDistribution);
        }

        let sum: f64 = v.iter().sum();
        if sum.abs() <= f64::EPSILON {
            return Err(ProbError::ZeroWeights);
        }

        let sign = sum.signum();
        let scale = sum.abs();
        let mut p = Vec::with_capacity(v.len());
        for x in v {
            let value = sign * x / scale;
            if value < -PROB_TOLERANCE {
                return Err(ProbError::NegativeProbability);
            }
            p.push(value.max(0.0));
        }

        Ok(Self { p })
    }

    /// Create a uniform distribution over n elements.
    pub fn uniform(n: usize) -> Self {
        assert!(n > 0, "Cannot create uniform distribution over empty set");
        Self {
            p: vec![1.0 / n as f64; n],
        }
    }

    /// Create a point mass (Dirac delta) at index i.
    pub fn point(n: usize, i: usize) -> Self {
        assert!(i < n, "Index {} out of bounds for size {}", i, n);
        let mut p = vec![0.0; n];
        p[i] = 1.0;
        Self { p }
    }

    /// The number of outcomes in the sample space.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Check if the distribution is over an empty set (always false for valid Dist).
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Get the probability of outcome i.
    pub fn prob(&self, i: usize) -> Result<f64, ProbError> {
        self.p.get(i).copied().ok_or(ProbError::IndexOutOfBounds {
            index: i,
            size: self.p.len(),
        })
    }

    /// Total mass (1 up to rounding for a valid distribution).
    pub fn total(&self) -> f64 {
        self.p.iter().sum()
    }

    /// Marginalize a distribution laid out as consecutive blocks of `block`
    /// outcomes: entry `i` of the result is `Σₖ p[k * block + i]`.
    ///
    /// A product state `(k, i)` flattened as `k * block + i` loses its `k`
    /// coordinate.
    ///
    /// ```rust
    /// use occupancy_prob::Dist;
    ///
    /// let joint = Dist::new(vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    /// let marginal = joint.marginalize_blocks(2).unwrap();
    /// assert!((marginal.p[0] - 0.4).abs() < 1e-12);
    /// assert!((marginal.p[1] - 0.6).abs() < 1e-12);
    /// ```
    pub fn marginalize_blocks(&self, block: usize) -> Result<Dist, ProbError> {
        if block == 0 || self.p.len() % block != 0 {
            return Err(ProbError::ShapeMismatch {
                expected: block,
                got: self.p.len(),
            });
        }

        let mut result = vec![0.0; block];
        for chunk in self.p.chunks(block) {
            for (acc, &x) in result.iter_mut().zip(chunk) {
                *acc += x;
            }
        }
        Ok(Dist { p: result })
    }

    /// Total variation distance between two distributions.
    ///
    /// `TV(p, q) = 0.5 * Σ |p[i] - q[i]|`
    pub fn tv_distance(&self, other: &Dist) -> Result<f64, ProbError> {
        if self.p.len() != other.p.len() {
            return Err(ProbError::ShapeMismatch {
                expected: self.p.len(),
                got: other.p.len(),
            });
        }

        let sum: f64 = self
            .p
            .iter()
            .zip(other.p.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        Ok(sum / 2.0)
    }
}
