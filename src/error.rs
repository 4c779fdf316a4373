//! Error types for the paley library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! variants for Galois field setup, Jacobsthal and Hadamard construction,
//! builder configuration, and matrix verification.

use thiserror::Error;

/// The main error type for the paley library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Galois Field Errors ============
    /// The specified order is not a prime power.
    #[error("order {0} is not a prime power (must be p^k for prime p and k >= 1)")]
    NotPrimePower(u32),

    /// A quadratic character was requested for a field order that is not a prime power.
    #[error("invalid field size {0}: the quadratic character needs a prime power order")]
    InvalidFieldSize(u32),

    /// Element value is out of range for the specified field.
    #[error("element {value} is out of range for GF({order}), must be in 0..{order}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The order of the field.
        order: u32,
    },

    /// No irreducible polynomial could be found for the specified field order.
    #[error("no irreducible polynomial available for GF({0})")]
    NoIrreduciblePolynomial(u32),

    // ============ Construction Errors ============
    /// A Jacobsthal matrix was requested for an order that is not a prime power.
    #[error("invalid Jacobsthal size {0}: q must be a prime power")]
    InvalidSize(u32),

    /// No Hadamard matrix of this order exists.
    ///
    /// Raised for odd orders above 1 and for orders ≡ 2 (mod 4) above 2.
    #[error("no Hadamard matrix of order {0} exists (order must be 1, 2 or a multiple of 4)")]
    NoSolution(usize),

    /// The Paley and Sylvester constructions cannot reach this order.
    ///
    /// This is not a proof that no Hadamard matrix of this order exists.
    #[error(
        "no construction found for a Hadamard matrix of order {0} \
         (order is not (prime power + 1) * 2^k; existence is not ruled out)"
    )]
    NoConstructionFound(usize),

    // ============ Parameter Validation Errors ============
    /// Invalid builder or construction parameters.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Verification Errors ============
    /// Verification of matrix properties failed.
    #[error("verification failed: {message}")]
    VerificationFailed {
        /// Description of what verification failed.
        message: String,
    },

    /// Matrix dimensions are inconsistent.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },
}

/// A specialized `Result` type for paley operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new `VerificationFailed` error.
    #[must_use]
    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            message: message.into(),
        }
    }

    /// Whether this error proves that no matrix of the requested order exists.
    ///
    /// Only [`Error::NoSolution`] is a proof; [`Error::NoConstructionFound`]
    /// merely reports the limits of the construction family.
    #[must_use]
    pub fn proves_nonexistence(&self) -> bool {
        matches!(self, Self::NoSolution(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotPrimePower(6);
        assert!(err.to_string().contains('6'));
        assert!(err.to_string().contains("prime power"));

        let err = Error::InvalidSize(12);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("Jacobsthal"));

        let err = Error::NoSolution(6);
        assert!(err.to_string().contains("order 6"));

        let err = Error::NoConstructionFound(92);
        assert!(err.to_string().contains("92"));
        assert!(err.to_string().contains("not ruled out"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::NoSolution(6), Error::NoSolution(6));
        assert_ne!(Error::NoSolution(6), Error::NoSolution(10));
        assert_ne!(Error::NoSolution(92), Error::NoConstructionFound(92));
    }

    #[test]
    fn test_proves_nonexistence() {
        assert!(Error::NoSolution(6).proves_nonexistence());
        assert!(!Error::NoConstructionFound(92).proves_nonexistence());
        assert!(!Error::InvalidSize(6).proves_nonexistence());
    }
}
