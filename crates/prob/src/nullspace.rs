//! Null-space extraction by Gauss–Jordan elimination.
//!
//! The matrix is reduced to row-echelon form with partial pivoting. Columns
//! whose best remaining pivot falls below `tolerance × max|aᵢⱼ|` are treated
//! as free; each free column yields one basis vector of the null space.
//!
//! ```text
//!   A x = 0        RREF(A) = [ I  F ]        x = [ -F ]
//!                            [ 0  0 ]            [  I ]
//! ```

use crate::error::ProbError;

/// Compute a basis of `{ x : A x ≈ 0 }` for a dense `m × n` matrix.
///
/// The returned vectors are not normalized; each has a `1` in the position
/// of its free column.
///
/// # Errors
///
/// Returns [`ProbError::ShapeMismatch`] if the rows have different lengths.
///
/// # Example
///
/// ```rust
/// use occupancy_prob::null_space;
///
/// // x + y = 0 has the null vector (-1, 1)
/// let basis = null_space(&[vec![1.0, 1.0], vec![2.0, 2.0]], 1e-9).unwrap();
/// assert_eq!(basis.len(), 1);
/// assert!((basis[0][0] + basis[0][1]).abs() < 1e-12);
/// ```
pub fn null_space(a: &[Vec<f64>], tolerance: f64) -> Result<Vec<Vec<f64>>, ProbError> {
    let m = a.len();
    let n = a.first().map_or(0, Vec::len);
    if let Some(row) = a.iter().find(|row| row.len() != n) {
        return Err(ProbError::ShapeMismatch {
            expected: n,
            got: row.len(),
        });
    }

    let mut r = a.to_vec();
    let scale = r.iter().flatten().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    let threshold = tolerance * scale;

    let mut pivots: Vec<usize> = Vec::with_capacity(n.min(m));
    let mut row = 0;

    for col in 0..n {
        if row == m {
            break;
        }

        let (best, magnitude) = (row..m)
            .map(|i| (i, r[i][col].abs()))
            .fold((row, -1.0), |acc, cur| if cur.1 > acc.1 { cur } else { acc });

        if magnitude <= threshold {
            continue;
        }

        r.swap(row, best);

        let pivot = r[row][col];
        for x in r[row].iter_mut() {
            *x /= pivot;
        }

        let pivot_row = r[row].clone();
        for (i, other) in r.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[col];
            if factor == 0.0 {
                continue;
            }
            for (x, p) in other.iter_mut().zip(&pivot_row) {
                *x -= factor * p;
            }
        }

        pivots.push(col);
        row += 1;
    }

    let mut is_pivot = vec![false; n];
    for &col in &pivots {
        is_pivot[col] = true;
    }

    let basis = (0..n)
        .filter(|&free| !is_pivot[free])
        .map(|free| {
            let mut v = vec![0.0; n];
            v[free] = 1.0;
            for (i, &col) in pivots.iter().enumerate() {
                v[col] = -r[i][free];
            }
            v
        })
        .collect();

    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(a: &[Vec<f64>], x: &[f64]) -> f64 {
        a.iter()
            .map(|row| row.iter().zip(x).map(|(a, x)| a * x).sum::<f64>().abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_full_rank_has_trivial_null_space() {
        let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        assert!(null_space(&a, 1e-9).unwrap().is_empty());
    }

    #[test]
    fn test_rank_one() {
        let a = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![-1.0, -2.0, -3.0],
        ];
        let basis = null_space(&a, 1e-9).unwrap();
        assert_eq!(basis.len(), 2);
        for v in &basis {
            assert!(residual(&a, v) < 1e-12);
        }
    }

    #[test]
    fn test_zero_matrix() {
        let a = vec![vec![0.0; 3]; 3];
        assert_eq!(null_space(&a, 1e-9).unwrap().len(), 3);
    }

    #[test]
    fn test_stochastic_minus_identity() {
        // Columns of T sum to 1, so 1ᵀ(T - I) = 0 and T - I is singular.
        let a = vec![
            vec![0.5 - 1.0, 0.2, 0.3],
            vec![0.25, 0.6 - 1.0, 0.3],
            vec![0.25, 0.2, 0.4 - 1.0],
        ];
        let basis = null_space(&a, 1e-9).unwrap();
        assert_eq!(basis.len(), 1);
        assert!(residual(&a, &basis[0]) < 1e-12);
        assert!(basis[0].iter().all(|&x| x > 0.0) || basis[0].iter().all(|&x| x < 0.0));
    }

    #[test]
    fn test_wide_matrix() {
        let a = vec![vec![1.0, -1.0, 0.0, 0.0]];
        let basis = null_space(&a, 1e-9).unwrap();
        assert_eq!(basis.len(), 3);
        for v in &basis {
            assert!(residual(&a, v) < 1e-12);
        }
    }

    #[test]
    fn test_ragged() {
        let a = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            null_space(&a, 1e-9),
            Err(ProbError::ShapeMismatch { expected: 2, got: 1 })
        ));
    }
}
