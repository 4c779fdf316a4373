//! Parallel Jacobsthal construction and Hadamard verification.
//!
//! This module provides rayon versions of the O(q²) and O(n³) kernels.
//! Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```ignore
//! use paley::parallel::{par_jacobsthal, par_verify_hadamard};
//!
//! assert_eq!(par_jacobsthal(27).unwrap(), paley::jacobsthal(27).unwrap());
//! assert!(par_verify_hadamard(&paley::hadamard(100).unwrap()));
//! ```
//!
//! # Performance
//!
//! Parallelism pays off for large orders (q or n in the hundreds). For small
//! matrices the sequential versions may be faster due to scheduling overhead.

use ndarray::Array2;
use rayon::prelude::*;

use crate::construct::{all_ones_minus_identity, character, entry};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::utils::is_prime_power;

/// Build the Jacobsthal matrix of order q with rows generated in parallel.
///
/// Produces the same matrix as [`crate::jacobsthal`].
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if q ≥ 3 is not a prime power.
pub fn par_jacobsthal(q: u32) -> Result<Matrix> {
    let n = q as usize;

    if q < 3 || q.is_power_of_two() {
        return Ok(all_ones_minus_identity(n));
    }

    if !is_prime_power(q) {
        return Err(Error::InvalidSize(q));
    }

    let chi = character(q)?;

    // Generate rows in parallel
    let rows: Vec<Vec<i8>> = (0..n)
        .into_par_iter()
        .map(|i| (0..n).map(|j| entry(&chi, i, j)).collect())
        .collect();

    let data = Array2::from_shape_vec((n, n), rows.into_iter().flatten().collect()).map_err(
        |e| Error::DimensionMismatch {
            expected: format!("{n}x{n} matrix"),
            actual: e.to_string(),
        },
    )?;

    Ok(Matrix::from_square(data))
}

/// Check that every entry is ±1 and M·Mᵗ = n·I, with row pairs checked in parallel.
///
/// Agrees with [`crate::matrix::verify_hadamard`]`(m).is_valid`.
#[must_use]
pub fn par_verify_hadamard(matrix: &Matrix) -> bool {
    let data = matrix.data();
    let n = matrix.order();

    if data.iter().any(|&v| v != 1 && v != -1) {
        return false;
    }

    let norm = i64::try_from(n).unwrap_or(i64::MAX);
    (0..n).into_par_iter().all(|i| {
        let row_i = data.row(i);
        (i..n).all(|j| {
            let dot: i64 = row_i
                .iter()
                .zip(data.row(j).iter())
                .map(|(&a, &b)| i64::from(a * b))
                .sum();
            dot == if i == j { norm } else { 0 }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::jacobsthal;
    use crate::matrix::verify_hadamard;
    use ndarray::array;

    #[test]
    fn test_par_jacobsthal_matches_sequential() {
        for q in [0u32, 1, 2, 3, 4, 5, 7, 8, 9, 25, 27, 49, 121] {
            assert_eq!(par_jacobsthal(q).unwrap(), jacobsthal(q).unwrap(), "q={q}");
        }
    }

    #[test]
    fn test_par_jacobsthal_invalid() {
        assert_eq!(par_jacobsthal(15).unwrap_err(), Error::InvalidSize(15));
    }

    #[test]
    fn test_par_verify_matches_sequential() {
        for n in [0usize, 1, 2, 4, 12, 20, 28, 36, 52, 64, 100] {
            let h = crate::hadamard(n).unwrap();
            assert!(par_verify_hadamard(&h), "n={n}");
            assert_eq!(par_verify_hadamard(&h), verify_hadamard(&h).is_valid);
        }
    }

    #[test]
    fn test_par_verify_rejects() {
        let not_orthogonal = Matrix::new(array![[1, 1], [1, 1]]).unwrap();
        assert!(!par_verify_hadamard(&not_orthogonal));

        let bad_entry = Matrix::new(array![[1, 0], [1, -1]]).unwrap();
        assert!(!par_verify_hadamard(&bad_entry));
    }
}
