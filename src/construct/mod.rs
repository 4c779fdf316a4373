//! Hadamard and Jacobsthal matrix constructions.
//!
//! ## Available Constructions
//!
//! | Construction | Order | Requirements |
//! |-------------|-------|--------------|
//! | [`PaleyOne`] | q + 1 | Prime power q ≡ 3 (mod 4) |
//! | [`PaleyTwo`] | 2(q + 1) | Prime power q ≡ 1 (mod 4) |
//! | [`Sylvester`] | 2^m | None |
//! | [`double`] | 2n | A Hadamard matrix of order n |
//!
//! [`jacobsthal`] builds the matrix both Paley constructions start from.
//!
//! ## Usage
//!
//! All constructions implement the [`Construction`] trait:
//!
//! ```
//! use paley::construct::{Construction, PaleyOne};
//!
//! let paley = PaleyOne::new(7).unwrap();
//! let h = paley.construct().expect("construction failed");
//!
//! assert_eq!(h.order(), 8);
//! assert!(h.is_hadamard());
//! ```
//!
//! ## Strategies
//!
//! [`Strategy`] is the unit of selection used by [`crate::HadamardBuilder`]:
//! given an order n it decides whether it applies, and which [`Step`] it would take.

mod jacobsthal;
mod paley;
mod sylvester;

pub use self::jacobsthal::jacobsthal;
pub use paley::{PaleyOne, PaleyTwo};
pub use sylvester::{double, Sylvester};

#[cfg(feature = "parallel")]
pub(crate) use self::jacobsthal::{all_ones_minus_identity, character, entry};
pub(crate) use sylvester::double_in_place;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::HadamardBuilder;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::utils::is_prime_power;

/// Trait for Hadamard matrix construction algorithms.
pub trait Construction: Send + Sync {
    /// Get the name of this construction method.
    fn name(&self) -> &'static str;

    /// Get a description of the family of matrices this construction produces.
    fn family(&self) -> &'static str;

    /// Get the order of the matrix this construction produces.
    fn order(&self) -> usize;

    /// Build the matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if an underlying field or Jacobsthal matrix cannot be built.
    fn construct(&self) -> Result<Matrix>;
}

/// A way of reaching a Hadamard order, tried in the builder's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Order q + 1 for a prime power q ≡ 3 (mod 4).
    PaleyI,
    /// Order 2(q + 1) for n ≡ 4 (mod 8) and a prime power q.
    PaleyII,
    /// Order 2m from a Hadamard matrix of order m.
    Sylvester,
}

impl Strategy {
    /// The default priority: Paley I, then Paley II, then Sylvester doubling.
    pub const DEFAULT: [Strategy; 3] = [Strategy::PaleyI, Strategy::PaleyII, Strategy::Sylvester];

    /// Get the name of this strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PaleyI => "PaleyI",
            Self::PaleyII => "PaleyII",
            Self::Sylvester => "Sylvester",
        }
    }

    /// Get a description of the orders this strategy reaches.
    #[must_use]
    pub fn family(&self) -> &'static str {
        match self {
            Self::PaleyI => "H(q+1), q ≡ 3 (mod 4) prime power",
            Self::PaleyII => "H(2(q+1)), q ≡ 1 (mod 4) prime power",
            Self::Sylvester => "H(2m) from H(m)",
        }
    }

    /// The step this strategy would take for order n, if it applies.
    ///
    /// # Example
    ///
    /// ```
    /// use paley::construct::{Step, Strategy};
    ///
    /// assert_eq!(Strategy::PaleyI.step(12), Some(Step::PaleyI { q: 11 }));
    /// assert_eq!(Strategy::PaleyI.step(36), None);   // 35 is not a prime power
    /// assert_eq!(Strategy::PaleyII.step(36), Some(Step::PaleyII { q: 17 }));
    /// assert_eq!(Strategy::Sylvester.step(40), Some(Step::Sylvester { half: 20 }));
    /// ```
    #[must_use]
    pub fn step(self, n: usize) -> Option<Step> {
        match self {
            Self::PaleyI => {
                let q = u32::try_from(n.checked_sub(1)?).ok()?;
                (q % 4 == 3 && is_prime_power(q)).then_some(Step::PaleyI { q })
            }
            Self::PaleyII => {
                if n % 8 != 4 {
                    return None;
                }
                let q = u32::try_from((n / 2).checked_sub(1)?).ok()?;
                is_prime_power(q).then_some(Step::PaleyII { q })
            }
            Self::Sylvester => (n >= 2 && n % 2 == 0).then_some(Step::Sylvester { half: n / 2 }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a Hadamard construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Orders 0, 1 and 2, written down directly.
    Trivial(usize),
    /// Paley I over GF(q).
    PaleyI {
        /// The field order.
        q: u32,
    },
    /// Paley II over GF(q).
    PaleyII {
        /// The field order.
        q: u32,
    },
    /// Sylvester doubling of a matrix of order `half`.
    Sylvester {
        /// Order of the matrix being doubled.
        half: usize,
    },
}

impl Step {
    /// The order of the matrix this step produces.
    #[must_use]
    pub fn order(&self) -> usize {
        match *self {
            Self::Trivial(n) => n,
            Self::PaleyI { q } => q as usize + 1,
            Self::PaleyII { q } => 2 * (q as usize + 1),
            Self::Sylvester { half } => 2 * half,
        }
    }

    /// The strategy that produces this step, if any.
    #[must_use]
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Self::Trivial(_) => None,
            Self::PaleyI { .. } => Some(Strategy::PaleyI),
            Self::PaleyII { .. } => Some(Strategy::PaleyII),
            Self::Sylvester { .. } => Some(Strategy::Sylvester),
        }
    }

    /// Build the matrix for this step.
    ///
    /// A Sylvester step builds its half-order matrix with [`Strategy::DEFAULT`];
    /// use [`construct_with`](Self::construct_with) to pick the strategies.
    /// Plans never use a Sylvester step as their base, so this only matters
    /// for steps built by hand or taken from [`available_steps`](crate::available_steps).
    ///
    /// # Errors
    ///
    /// Returns an error if the step's parameters do not describe a valid construction.
    ///
    /// # Example
    ///
    /// ```
    /// use paley::construct::Step;
    ///
    /// let h = Step::PaleyII { q: 9 }.construct().unwrap();
    /// assert_eq!(h.order(), 20);
    /// assert!(h.is_hadamard());
    ///
    /// assert!(Step::PaleyI { q: 9 }.construct().is_err());
    /// ```
    pub fn construct(&self) -> Result<Matrix> {
        self.construct_with(&Strategy::DEFAULT)
    }

    /// Build the matrix for this step, planning a Sylvester step's half-order
    /// matrix with the given strategies.
    ///
    /// # Errors
    ///
    /// Returns an error if the step's parameters do not describe a valid
    /// construction, or if the strategies cannot reach the half order.
    ///
    /// # Example
    ///
    /// ```
    /// use paley::construct::{Step, Strategy};
    ///
    /// let step = Step::Sylvester { half: 12 };
    /// assert!(step.construct_with(&[Strategy::PaleyI]).is_ok());
    /// // 12 -> 6 is a dead end when only halving is allowed
    /// assert!(step.construct_with(&[Strategy::Sylvester]).is_err());
    /// ```
    pub fn construct_with(&self, strategies: &[Strategy]) -> Result<Matrix> {
        match *self {
            Self::Trivial(0) => Ok(Matrix::empty()),
            Self::Trivial(n) => Sylvester::new(n)?.construct(),
            Self::PaleyI { q } => PaleyOne::new(q)?.construct(),
            Self::PaleyII { q } => PaleyTwo::new(q)?.construct(),
            Self::Sylvester { half } => {
                let builder = HadamardBuilder::new().strategies(strategies);
                Ok(double(&builder.build(half)?))
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trivial(n) => write!(f, "Trivial({n})"),
            Self::PaleyI { q } => write!(f, "PaleyI q={q}"),
            Self::PaleyII { q } => write!(f, "PaleyII q={q}"),
            Self::Sylvester { half } => write!(f, "Sylvester half={half}"),
        }
    }
}
