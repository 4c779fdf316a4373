//! Hadamard and Jacobsthal verification.
//!
//! Both checks collect every violation instead of stopping at the first, so
//! a failing construction can be diagnosed from the returned issues.

use crate::error::{Error, Result};

use super::Matrix;

/// Result of verifying a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the matrix passes verification.
    pub is_valid: bool,
    /// The order of the verified matrix.
    pub order: usize,
    /// Details about any issues found.
    pub issues: Vec<VerificationIssue>,
}

impl VerificationResult {
    fn from_issues(order: usize, issues: Vec<VerificationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            order,
            issues,
        }
    }

    /// Turn a failed verification into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] naming the first issue.
    pub fn into_result(self) -> Result<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(issue) => Err(Error::verification_failed(format!(
                "order {}: {issue:?} ({} issue(s) total)",
                self.order,
                self.issues.len()
            ))),
        }
    }
}

/// A specific issue found during verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationIssue {
    /// An entry is outside the allowed set of values.
    EntryOutOfRange {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The offending value.
        value: i8,
    },
    /// Two rows have the wrong inner product.
    NotOrthogonal {
        /// First row.
        row_a: usize,
        /// Second row.
        row_b: usize,
        /// Their inner product.
        dot: i64,
        /// The inner product required.
        expected: i64,
    },
    /// A Jacobsthal diagonal entry is not zero.
    NonZeroDiagonal {
        /// Row (and column) of the entry.
        index: usize,
        /// The offending value.
        value: i8,
    },
    /// A Jacobsthal row does not sum to zero.
    RowSumNonZero {
        /// The row.
        row: usize,
        /// Its sum.
        sum: i64,
    },
    /// J[i][j] is not ±J[j][i] with the sign fixed by q mod 4.
    WrongSymmetry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
    /// For q < 3 or q a power of two, the matrix must be U − I.
    NotAllOnesMinusIdentity {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The offending value.
        value: i8,
    },
}

/// Check the inner products of all row pairs against `expected(i, j)`.
fn check_gram(
    matrix: &Matrix,
    expected: impl Fn(usize, usize) -> i64,
    issues: &mut Vec<VerificationIssue>,
) {
    let gram = matrix.gram();
    let n = matrix.order();
    for row_a in 0..n {
        for row_b in row_a..n {
            let dot = gram[[row_a, row_b]];
            let want = expected(row_a, row_b);
            if dot != want {
                issues.push(VerificationIssue::NotOrthogonal {
                    row_a,
                    row_b,
                    dot,
                    expected: want,
                });
            }
        }
    }
}

/// Verify that every entry is ±1 and M·Mᵗ = n·I.
///
/// The Gram product is only formed once every entry has passed the range check.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use paley::matrix::{verify_hadamard, VerificationIssue};
/// use paley::Matrix;
///
/// assert!(verify_hadamard(&paley::hadamard(12).unwrap()).is_valid);
///
/// let bad = Matrix::new(array![[1, 1], [1, 1]]).unwrap();
/// let result = verify_hadamard(&bad);
/// assert!(!result.is_valid);
/// assert!(matches!(result.issues[0], VerificationIssue::NotOrthogonal { row_a: 0, row_b: 1, .. }));
/// ```
#[must_use]
pub fn verify_hadamard(matrix: &Matrix) -> VerificationResult {
    let n = matrix.order();
    let mut issues = Vec::new();

    for (row, values) in matrix.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if value != 1 && value != -1 {
                issues.push(VerificationIssue::EntryOutOfRange { row, col, value });
            }
        }
    }

    if issues.is_empty() {
        let diagonal = i64::try_from(n).unwrap_or(i64::MAX);
        check_gram(matrix, |i, j| if i == j { diagonal } else { 0 }, &mut issues);
    }

    VerificationResult::from_issues(n, issues)
}

/// Verify the Jacobsthal identities for a matrix of order q.
///
/// For q < 3 or q a power of two the only accepted matrix is U − I (zero
/// diagonal, ones elsewhere). For the remaining q the matrix must have a
/// zero diagonal, ±1 elsewhere, zero row sums, J·Jᵗ = qI − U, and be
/// symmetric when q ≡ 1 (mod 4) or antisymmetric when q ≡ 3 (mod 4).
///
/// # Example
///
/// ```
/// use paley::matrix::verify_jacobsthal;
///
/// for q in [3, 8, 9, 27] {
///     assert!(verify_jacobsthal(&paley::jacobsthal(q).unwrap()).is_valid);
/// }
/// ```
#[must_use]
pub fn verify_jacobsthal(matrix: &Matrix) -> VerificationResult {
    let q = matrix.order();
    let mut issues = Vec::new();

    if q < 3 || q.is_power_of_two() {
        for (row, values) in matrix.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let want = i8::from(row != col);
                if value != want {
                    issues.push(VerificationIssue::NotAllOnesMinusIdentity { row, col, value });
                }
            }
        }
        return VerificationResult::from_issues(q, issues);
    }

    for (row, values) in matrix.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if row == col {
                if value != 0 {
                    issues.push(VerificationIssue::NonZeroDiagonal { index: row, value });
                }
            } else if value != 1 && value != -1 {
                issues.push(VerificationIssue::EntryOutOfRange { row, col, value });
            }
        }
        let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
        if sum != 0 {
            issues.push(VerificationIssue::RowSumNonZero { row, sum });
        }
    }
    if !issues.is_empty() {
        return VerificationResult::from_issues(q, issues);
    }

    let sign: i8 = if q % 4 == 1 { 1 } else { -1 };
    for row in 0..q {
        for col in row + 1..q {
            if matrix.get(row, col) != sign * matrix.get(col, row) {
                issues.push(VerificationIssue::WrongSymmetry { row, col });
            }
        }
    }

    let q_wide = i64::try_from(q).unwrap_or(i64::MAX);
    check_gram(matrix, |i, j| if i == j { q_wide - 1 } else { -1 }, &mut issues);

    VerificationResult::from_issues(q, issues)
}
