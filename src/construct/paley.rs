//! Paley constructions of Hadamard matrices.
//!
//! ## Paley I
//!
//! For a prime power q ≡ 3 (mod 4), bordering the Jacobsthal matrix J gives a
//! skew Hadamard matrix of order q + 1:
//!
//! ```text
//! H = [  1   1ᵗ  ]
//!     [ -1  J + I ]
//! ```
//!
//! ## Paley II
//!
//! For a prime power q ≡ 1 (mod 4), J is symmetric and the Hadamard matrix
//! has order 2(q + 1). It is a (q + 1)×(q + 1) grid of 2×2 blocks: diagonal
//! blocks are `[[1, -1], [-1, -1]]`, blocks in the first block row or column
//! and blocks where J is +1 are `[[1, 1], [1, -1]]`, and the rest are its negation.
//!
//! ## Example
//!
//! ```
//! use paley::construct::{Construction, PaleyOne, PaleyTwo};
//!
//! let h12 = PaleyOne::new(11).unwrap().construct().unwrap();
//! assert!(h12.is_skew_hadamard());
//!
//! let h36 = PaleyTwo::new(17).unwrap().construct().unwrap();
//! assert_eq!(h36.order(), 36);
//! assert!(h36.is_hadamard());
//! ```

use ndarray::Array2;

use super::jacobsthal::jacobsthal;
use super::Construction;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::utils::is_prime_power;

const SEED: [[i8; 2]; 2] = [[1, 1], [1, -1]];
const DIAGONAL_BLOCK: [[i8; 2]; 2] = [[1, -1], [-1, -1]];

/// Paley type I construction: order q + 1 for a prime power q ≡ 3 (mod 4).
///
/// # Example
///
/// ```
/// use paley::construct::PaleyOne;
///
/// assert!(PaleyOne::new(3).is_ok());    // order 4
/// assert!(PaleyOne::new(27).is_ok());   // order 28, over GF(3^3)
///
/// assert!(PaleyOne::new(5).is_err());   // 5 ≡ 1 (mod 4)
/// assert!(PaleyOne::new(15).is_err());  // not a prime power
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaleyOne {
    q: u32,
}

impl PaleyOne {
    /// Create a Paley I construction over GF(q).
    ///
    /// # Errors
    ///
    /// Returns an error if q is not a prime power or q ≢ 3 (mod 4).
    pub fn new(q: u32) -> Result<Self> {
        if !is_prime_power(q) {
            return Err(Error::invalid_params(format!(
                "PaleyOne requires a prime power, but {q} is not a prime power"
            )));
        }

        if q % 4 != 3 {
            return Err(Error::invalid_params(format!(
                "PaleyOne requires q ≡ 3 (mod 4), but {q} ≡ {} (mod 4)",
                q % 4
            )));
        }

        Ok(Self { q })
    }

    /// The field order q.
    #[must_use]
    pub fn q(&self) -> u32 {
        self.q
    }
}

impl Construction for PaleyOne {
    fn name(&self) -> &'static str {
        "PaleyI"
    }

    fn family(&self) -> &'static str {
        "H(q+1), q ≡ 3 (mod 4) prime power"
    }

    fn order(&self) -> usize {
        self.q as usize + 1
    }

    fn construct(&self) -> Result<Matrix> {
        let n = self.order();
        let j = jacobsthal(self.q)?;

        let data = Array2::from_shape_fn((n, n), |(r, c)| {
            if r == 0 || r == c {
                1
            } else if c == 0 {
                -1
            } else {
                j.get(r - 1, c - 1)
            }
        });

        Ok(Matrix::from_square(data))
    }
}

/// Paley type II construction: order 2(q + 1) for a prime power q ≡ 1 (mod 4).
///
/// # Example
///
/// ```
/// use paley::construct::{Construction, PaleyTwo};
///
/// // 52 = 2 * (25 + 1), built over GF(5^2)
/// let p = PaleyTwo::new(25).unwrap();
/// assert_eq!(p.order(), 52);
/// assert!(p.construct().unwrap().is_hadamard());
///
/// assert!(PaleyTwo::new(7).is_err());  // 7 ≡ 3 (mod 4)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaleyTwo {
    q: u32,
}

impl PaleyTwo {
    /// Create a Paley II construction over GF(q).
    ///
    /// # Errors
    ///
    /// Returns an error if q is not a prime power or q ≢ 1 (mod 4).
    pub fn new(q: u32) -> Result<Self> {
        if !is_prime_power(q) {
            return Err(Error::invalid_params(format!(
                "PaleyTwo requires a prime power, but {q} is not a prime power"
            )));
        }

        if q % 4 != 1 {
            return Err(Error::invalid_params(format!(
                "PaleyTwo requires q ≡ 1 (mod 4), but {q} ≡ {} (mod 4)",
                q % 4
            )));
        }

        Ok(Self { q })
    }

    /// The field order q.
    #[must_use]
    pub fn q(&self) -> u32 {
        self.q
    }
}

impl Construction for PaleyTwo {
    fn name(&self) -> &'static str {
        "PaleyII"
    }

    fn family(&self) -> &'static str {
        "H(2(q+1)), q ≡ 1 (mod 4) prime power"
    }

    fn order(&self) -> usize {
        2 * (self.q as usize + 1)
    }

    fn construct(&self) -> Result<Matrix> {
        let n = self.order();
        let j = jacobsthal(self.q)?;

        let data = Array2::from_shape_fn((n, n), |(r, c)| {
            let (block_r, block_c) = (r / 2, c / 2);
            let (i, k) = (r % 2, c % 2);

            if block_r == block_c {
                DIAGONAL_BLOCK[i][k]
            } else if block_r == 0 || block_c == 0 || j.get(block_r - 1, block_c - 1) > 0 {
                SEED[i][k]
            } else {
                -SEED[i][k]
            }
        });

        Ok(Matrix::from_square(data))
    }
}
