//! Square integer matrices and their Hadamard/Jacobsthal properties.
//!
//! ## Overview
//!
//! - [`Matrix`]: An immutable n×n matrix of small signed integers
//! - [`verify_hadamard`]: Check every entry is ±1 and M·Mᵗ = n·I
//! - [`verify_jacobsthal`]: Check the Jacobsthal identities for order q
//!
//! Constructions fill an [`ndarray::Array2`] and wrap it once finished;
//! a `Matrix` is never mutated after that.

mod verify;

pub use verify::{verify_hadamard, verify_jacobsthal, VerificationIssue, VerificationResult};

use ndarray::{Array2, ArrayView1};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A square matrix of small signed integers.
///
/// Hadamard matrices hold ±1 entries; Jacobsthal matrices also hold 0 on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    data: Array2<i8>,
}

impl Matrix {
    /// Wrap a square array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the array is not square.
    ///
    /// # Example
    ///
    /// ```
    /// use ndarray::array;
    /// use paley::Matrix;
    ///
    /// let m = Matrix::new(array![[1, 1], [1, -1]]).unwrap();
    /// assert!(m.is_hadamard());
    ///
    /// assert!(Matrix::new(array![[1, 1, 1], [1, -1, 1]]).is_err());
    /// ```
    pub fn new(data: Array2<i8>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: format!("{0}x{0} matrix", data.nrows()),
                actual: format!("{}x{} matrix", data.nrows(), data.ncols()),
            });
        }
        Ok(Self { data })
    }

    /// Wrap an array the caller built square.
    pub(crate) fn from_square(data: Array2<i8>) -> Self {
        debug_assert_eq!(data.nrows(), data.ncols());
        Self { data }
    }

    /// The 0×0 matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_square(Array2::zeros((0, 0)))
    }

    /// The order n of this n×n matrix.
    #[must_use]
    pub fn order(&self) -> usize {
        self.data.nrows()
    }

    /// Get the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.data[[row, col]]
    }

    /// Borrow the underlying array.
    #[must_use]
    pub fn data(&self) -> &Array2<i8> {
        &self.data
    }

    /// Take the underlying array.
    #[must_use]
    pub fn into_inner(self) -> Array2<i8> {
        self.data
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, i8>> + '_ {
        self.data.rows().into_iter()
    }

    /// Copy the entries into nested vectors, row by row.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vec<i8>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// The transpose Mᵗ.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_square(self.data.t().to_owned())
    }

    /// The matrix −M.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_square(self.data.mapv(|v| -v))
    }

    /// The Gram matrix M·Mᵗ, computed in `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use ndarray::Array2;
    ///
    /// let h = paley::hadamard(8).unwrap();
    /// assert_eq!(h.gram(), Array2::<i64>::eye(8) * 8);
    /// ```
    #[must_use]
    pub fn gram(&self) -> Array2<i64> {
        let wide = self.data.mapv(i64::from);
        wide.dot(&wide.t())
    }

    /// Whether every entry is ±1 and M·Mᵗ = n·I.
    #[must_use]
    pub fn is_hadamard(&self) -> bool {
        verify_hadamard(self).is_valid
    }

    /// Whether this is a Hadamard matrix with M + Mᵗ = 2I.
    #[must_use]
    pub fn is_skew_hadamard(&self) -> bool {
        let n = self.order();
        self.is_hadamard()
            && (0..n).all(|i| {
                (0..n).all(|j| {
                    let expected = if i == j { 2 } else { 0 };
                    self.get(i, j) + self.get(j, i) == expected
                })
            })
    }

    /// Flip row and column signs so the first row and first column are all +1.
    ///
    /// Sign changes of rows and columns preserve M·Mᵗ = n·I.
    ///
    /// # Example
    ///
    /// ```
    /// let h = paley::hadamard(12).unwrap().normalized();
    /// assert!(h.is_hadamard());
    /// assert!(h.rows().all(|row| row[0] == 1));
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut data = self.data.clone();
        if data.is_empty() {
            return Self::from_square(data);
        }

        for mut row in data.rows_mut() {
            if row[0] < 0 {
                row.mapv_inplace(|v| -v);
            }
        }
        for mut col in data.columns_mut() {
            if col[0] < 0 {
                col.mapv_inplace(|v| -v);
            }
        }

        Self::from_square(data)
    }
}

impl From<Matrix> for Array2<i8> {
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>2}")).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
