//! Sylvester doubling.
//!
//! From a Hadamard matrix H of order n, `[[H, H], [H, -H]]` is a Hadamard
//! matrix of order 2n. Starting from H₁ = \[1\] this gives every power of two.
//!
//! ## Example
//!
//! ```
//! use paley::construct::{Construction, Sylvester};
//!
//! let h8 = Sylvester::new(8).unwrap().construct().unwrap();
//! assert!(h8.is_hadamard());
//! assert!(h8.rows().next().unwrap().iter().all(|&v| v == 1));
//! ```

use ndarray::{s, Array2};

use super::Construction;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Sylvester construction of order 2^m, starting from H₁ = \[1\].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sylvester {
    n: usize,
}

impl Sylvester {
    /// Create a Sylvester construction of order n.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is not a power of 2.
    ///
    /// # Example
    ///
    /// ```
    /// use paley::construct::Sylvester;
    ///
    /// assert!(Sylvester::new(1).is_ok());
    /// assert!(Sylvester::new(64).is_ok());
    ///
    /// assert!(Sylvester::new(0).is_err());
    /// assert!(Sylvester::new(12).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        if !n.is_power_of_two() {
            return Err(Error::invalid_params(format!(
                "Sylvester requires n to be a power of 2, got {n}"
            )));
        }

        Ok(Self { n })
    }
}

impl Construction for Sylvester {
    fn name(&self) -> &'static str {
        "Sylvester"
    }

    fn family(&self) -> &'static str {
        "H(2^m), m ≥ 0"
    }

    fn order(&self) -> usize {
        self.n
    }

    fn construct(&self) -> Result<Matrix> {
        let mut h = Array2::from_elem((self.n, self.n), 1i8);
        double_in_place(&mut h, 1, self.n.trailing_zeros());
        Ok(Matrix::from_square(h))
    }
}

/// One Sylvester doubling: `[[H, H], [H, -H]]`.
///
/// # Example
///
/// ```
/// use paley::construct::double;
///
/// let h12 = paley::hadamard(12).unwrap();
/// let h24 = double(&h12);
/// assert_eq!(h24.order(), 24);
/// assert!(h24.is_hadamard());
/// ```
#[must_use]
pub fn double(base: &Matrix) -> Matrix {
    let n = base.order();
    let mut h = Array2::zeros((2 * n, 2 * n));
    h.slice_mut(s![..n, ..n]).assign(base.data());
    double_in_place(&mut h, n, 1);
    Matrix::from_square(h)
}

/// Apply `times` doublings to the `size`×`size` top-left corner of `h`.
///
/// `h` must be at least `size * 2^times` square; entries outside the corner are overwritten.
pub(crate) fn double_in_place(h: &mut Array2<i8>, mut size: usize, times: u32) {
    for _ in 0..times {
        // h[..size, ..size] holds H_size
        let block = h.slice(s![..size, ..size]).to_owned();
        let end = 2 * size;

        h.slice_mut(s![..size, size..end]).assign(&block);
        h.slice_mut(s![size..end, ..size]).assign(&block);
        h.slice_mut(s![size..end, size..end])
            .assign(&block.mapv(|v| -v));

        size = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sylvester_small() {
        assert_eq!(
            Sylvester::new(1).unwrap().construct().unwrap().to_vec(),
            vec![vec![1]]
        );
        assert_eq!(
            Sylvester::new(2).unwrap().construct().unwrap().to_vec(),
            vec![vec![1, 1], vec![1, -1]]
        );
    }

    #[test]
    fn test_sylvester_powers_of_two() {
        for m in 0..=7 {
            let n = 1usize << m;
            let h = Sylvester::new(n).unwrap().construct().unwrap();
            assert_eq!(h.order(), n);
            assert!(h.is_hadamard(), "H({n})");
        }
    }

    #[test]
    fn test_sylvester_invalid() {
        for n in [0usize, 3, 5, 6, 7, 12, 20] {
            assert!(Sylvester::new(n).is_err(), "n={n}");
        }
    }

    #[test]
    fn test_double_quadrants() {
        let base = Matrix::new(array![[1, 1], [1, -1]]).unwrap();
        let h = double(&base);
        assert_eq!(
            h.to_vec(),
            vec![
                vec![1, 1, 1, 1],
                vec![1, -1, 1, -1],
                vec![1, 1, -1, -1],
                vec![1, -1, -1, 1],
            ]
        );
    }

    #[test]
    fn test_double_empty() {
        assert_eq!(double(&Matrix::empty()).order(), 0);
    }

    #[test]
    fn test_double_in_place_matches_repeated_double() {
        let base = Matrix::new(array![[1, 1, 1, 1], [-1, 1, -1, 1], [-1, 1, 1, -1], [-1, -1, 1, 1]])
            .unwrap();

        let mut h = Array2::zeros((16, 16));
        h.slice_mut(s![..4, ..4]).assign(base.data());
        double_in_place(&mut h, 4, 2);

        assert_eq!(Matrix::new(h).unwrap(), double(&double(&base)));
    }
}
