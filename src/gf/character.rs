//! Quadratic character of element differences in GF(q).
//!
//! The Jacobsthal matrix needs chi(x - y) for every pair of field elements.
//! For prime q the field is the integers mod q. For q = p^k with k > 1 the
//! labels 0..q are *not* integers mod q: label i is the polynomial whose
//! coefficients are the base-p digits of i, and differences are taken in
//! GF(p)[x] / (f) for an irreducible f of degree k.

use crate::error::{Error, Result};
use crate::utils::factor_prime_power;

use super::DynamicGf;

/// How the elements of GF(q) are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRep {
    /// GF(p) as integers mod p.
    IntegerMod(u32),
    /// GF(p^k), k > 1, as polynomials of degree < k over GF(p).
    ExtensionField {
        /// The characteristic p.
        prime: u32,
        /// The extension degree k.
        degree: u32,
    },
}

impl FieldRep {
    /// Pick the representation for a field of order q.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldSize`] if q is not a prime power.
    ///
    /// # Example
    ///
    /// ```
    /// use paley::gf::FieldRep;
    ///
    /// assert_eq!(FieldRep::for_order(11).unwrap(), FieldRep::IntegerMod(11));
    /// assert_eq!(
    ///     FieldRep::for_order(27).unwrap(),
    ///     FieldRep::ExtensionField { prime: 3, degree: 3 }
    /// );
    /// assert!(FieldRep::for_order(12).is_err());
    /// ```
    pub fn for_order(q: u32) -> Result<Self> {
        let f = factor_prime_power(q).ok_or(Error::InvalidFieldSize(q))?;
        Ok(if f.is_prime() {
            Self::IntegerMod(q)
        } else {
            Self::ExtensionField {
                prime: f.prime,
                degree: f.exponent,
            }
        })
    }

    /// The field order q.
    #[must_use]
    pub fn order(&self) -> u32 {
        match *self {
            Self::IntegerMod(p) => p,
            Self::ExtensionField { prime, degree } => prime.pow(degree),
        }
    }

    /// The field characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        match *self {
            Self::IntegerMod(p) => p,
            Self::ExtensionField { prime, .. } => prime,
        }
    }
}

#[derive(Debug, Clone)]
enum Arithmetic {
    IntegerMod,
    ExtensionField(DynamicGf),
}

/// Precomputed quadratic character for one field.
///
/// The residue table is built once; each query is a field subtraction and a lookup.
///
/// # Example
///
/// ```
/// use paley::gf::QuadraticCharacter;
///
/// let chi = QuadraticCharacter::new(7).unwrap();
/// assert!(chi.is_square(3, 1));   // 3 - 1 = 2 ≡ 3^2 (mod 7)
/// assert!(!chi.is_square(4, 1));  // 4 - 1 = 3 is not a square mod 7
/// ```
#[derive(Debug, Clone)]
pub struct QuadraticCharacter {
    rep: FieldRep,
    arithmetic: Arithmetic,
    /// residues[d] is true iff the element encoded by d is a nonzero square
    residues: Vec<bool>,
}

impl QuadraticCharacter {
    /// Build the character table for GF(q).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldSize`] if q is not a prime power.
    pub fn new(q: u32) -> Result<Self> {
        let rep = FieldRep::for_order(q)?;

        let (arithmetic, residues) = match rep {
            FieldRep::IntegerMod(p) => {
                // k^2 ≡ (p - k)^2, so k = 1..=p/2 already yields every square
                let mut residues = vec![false; p as usize];
                for k in 1..=u64::from(p / 2) {
                    residues[(k * k % u64::from(p)) as usize] = true;
                }
                (Arithmetic::IntegerMod, residues)
            }
            FieldRep::ExtensionField { .. } => {
                let field = DynamicGf::new(q).map_err(|_| Error::InvalidFieldSize(q))?;
                let residues = field.elements().map(|e| e.is_quadratic_residue()).collect();
                (Arithmetic::ExtensionField(field), residues)
            }
        };

        Ok(Self {
            rep,
            arithmetic,
            residues,
        })
    }

    /// The field representation in use.
    #[must_use]
    pub fn rep(&self) -> FieldRep {
        self.rep
    }

    /// The field order q.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.rep.order()
    }

    /// The encoding of x - y. Labels must lie in `0..q` for every field kind.
    fn difference(&self, x: u32, y: u32) -> u32 {
        let q = self.order();
        assert!(
            x < q && y < q,
            "element labels ({x}, {y}) out of range for GF({q})"
        );
        match &self.arithmetic {
            Arithmetic::IntegerMod => (x + q - y) % q,
            Arithmetic::ExtensionField(field) => field.tables().sub(x, y),
        }
    }

    /// Whether x - y is a nonzero square in GF(q).
    ///
    /// # Panics
    ///
    /// Panics if x or y is not in `0..q`.
    #[must_use]
    pub fn is_square(&self, x: u32, y: u32) -> bool {
        self.residues[self.difference(x, y) as usize]
    }

    /// Like [`is_square`](Self::is_square), but rejects labels outside `0..q`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if x or y is not in `0..q`.
    pub fn try_is_square(&self, x: u32, y: u32) -> Result<bool> {
        let order = self.order();
        if let Some(value) = [x, y].into_iter().find(|&v| v >= order) {
            return Err(Error::ElementOutOfRange { value, order });
        }
        Ok(self.is_square(x, y))
    }

    /// chi(x - y): 0 if x = y, 1 if x - y is a nonzero square, -1 otherwise.
    ///
    /// # Panics
    ///
    /// Panics if x or y is not in `0..q`.
    #[must_use]
    pub fn chi(&self, x: u32, y: u32) -> i8 {
        let d = self.difference(x, y);
        if d == 0 {
            0
        } else if self.residues[d as usize] {
            1
        } else {
            -1
        }
    }
}

/// Whether x - y is a nonzero square in GF(q), with x and y element labels in `0..q`.
///
/// Builds a [`QuadraticCharacter`] per call; reuse one for repeated queries.
///
/// # Errors
///
/// Returns [`Error::InvalidFieldSize`] if q is not a prime power, and
/// [`Error::ElementOutOfRange`] if x or y is not in `0..q`.
///
/// # Example
///
/// ```
/// use paley::gf::is_square;
///
/// // In GF(9) = GF(3)[x]/(x^2 + 1), label 4 is 1 + x, which is not a square,
/// // although 4 = 2^2 in the integers mod 9
/// assert!(!is_square(9, 4, 0).unwrap());
/// // label 3 is x = (2 + x)^2
/// assert!(is_square(9, 3, 0).unwrap());
///
/// assert!(is_square(6, 1, 0).is_err());
/// ```
pub fn is_square(q: u32, x: u32, y: u32) -> Result<bool> {
    QuadraticCharacter::new(q)?.try_is_square(x, y)
}
