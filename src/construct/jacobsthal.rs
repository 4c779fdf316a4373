//! Jacobsthal matrices.
//!
//! For an odd prime power q the Jacobsthal matrix is J[i][j] = chi(i - j),
//! where i and j are element labels of GF(q) and chi is the quadratic
//! character. It has a zero diagonal, zero row sums, and J·Jᵗ = qI − U.
//! It is symmetric when q ≡ 1 (mod 4) and antisymmetric when q ≡ 3 (mod 4).

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::gf::QuadraticCharacter;
use crate::matrix::Matrix;
use crate::utils::is_prime_power;

/// Build the Jacobsthal matrix of order q.
///
/// For q < 3 and for q a power of two, every nonzero element is a square,
/// and the result is U − I (zero diagonal, ones elsewhere).
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if q ≥ 3 is not a prime power.
///
/// # Example
///
/// ```
/// use paley::jacobsthal;
///
/// let j = jacobsthal(3).unwrap();
/// assert_eq!(j.to_vec(), vec![vec![0, -1, 1], vec![1, 0, -1], vec![-1, 1, 0]]);
///
/// // 9 = 3^2 uses GF(9) arithmetic, not the integers mod 9
/// let j9 = jacobsthal(9).unwrap();
/// assert!(paley::matrix::verify_jacobsthal(&j9).is_valid);
///
/// assert!(jacobsthal(6).is_err());
/// ```
pub fn jacobsthal(q: u32) -> Result<Matrix> {
    let n = q as usize;

    if q < 3 || q.is_power_of_two() {
        return Ok(all_ones_minus_identity(n));
    }

    if !is_prime_power(q) {
        return Err(Error::InvalidSize(q));
    }

    let chi = character(q)?;
    let data = Array2::from_shape_fn((n, n), |(i, j)| entry(&chi, i, j));

    Ok(Matrix::from_square(data))
}

/// U − I of order n.
pub(crate) fn all_ones_minus_identity(n: usize) -> Matrix {
    Matrix::from_square(Array2::from_shape_fn((n, n), |(i, j)| i8::from(i != j)))
}

/// The character table behind `jacobsthal(q)`, for an odd prime power q.
pub(crate) fn character(q: u32) -> Result<QuadraticCharacter> {
    QuadraticCharacter::new(q).map_err(|_| Error::InvalidSize(q))
}

/// J[i][j] = chi(i - j).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn entry(chi: &QuadraticCharacter, i: usize, j: usize) -> i8 {
    chi.chi(i as u32, j as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::verify_jacobsthal;
    use ndarray::Array2;

    #[test]
    fn test_small_orders_are_ones_minus_identity() {
        assert_eq!(jacobsthal(0).unwrap().order(), 0);
        assert_eq!(jacobsthal(1).unwrap().to_vec(), vec![vec![0]]);
        assert_eq!(jacobsthal(2).unwrap().to_vec(), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_powers_of_two() {
        for q in [4u32, 8, 16, 32] {
            let j = jacobsthal(q).unwrap();
            assert_eq!(j.order(), q as usize);
            assert!(verify_jacobsthal(&j).is_valid, "q={q}");
        }
    }

    #[test]
    fn test_jacobsthal_3() {
        let j = jacobsthal(3).unwrap();
        assert_eq!(
            j.to_vec(),
            vec![vec![0, -1, 1], vec![1, 0, -1], vec![-1, 1, 0]]
        );
    }

    #[test]
    fn test_gram_identity() {
        for q in [3u32, 5, 7, 9, 11, 13, 17, 19, 23, 25, 27, 29, 49, 81, 121, 125] {
            let j = jacobsthal(q).unwrap();
            let n = q as usize;
            let expected = Array2::<i64>::eye(n) * i64::from(q) - Array2::<i64>::ones((n, n));
            assert_eq!(j.gram(), expected, "q={q}");

            let result = verify_jacobsthal(&j);
            assert!(result.is_valid, "q={q}: {:?}", result.issues);
        }
    }

    #[test]
    fn test_symmetry_by_q_mod_4() {
        for q in [5u32, 9, 13, 25] {
            let j = jacobsthal(q).unwrap();
            assert_eq!(j.transpose(), j, "q={q}");
        }
        for q in [3u32, 7, 11, 27] {
            let j = jacobsthal(q).unwrap();
            assert_eq!(j.transpose(), j.negated(), "q={q}");
        }
    }

    #[test]
    fn test_extension_field_differs_from_integers_mod_q() {
        // chi over the integers mod 9 would make label 4 (= 2^2) a square
        let j = jacobsthal(9).unwrap();
        assert_eq!(j.get(4, 0), -1);
        assert_eq!(j.get(3, 0), 1);
    }

    #[test]
    fn test_invalid_sizes() {
        for q in [6u32, 10, 12, 15, 18, 20, 21] {
            assert_eq!(jacobsthal(q).unwrap_err(), Error::InvalidSize(q));
        }
    }
}
