//! Dynamic Galois field and element types.
//!
//! The field order is chosen at runtime: Jacobsthal matrices are needed for
//! whatever prime power the Paley constructions select.

use std::fmt;
use std::sync::Arc;

use super::GfTables;
use crate::error::{Error, Result};

/// A dynamically-configured Galois field.
///
/// Holds the precomputed arithmetic tables for a Galois field of order
/// q = p^n. The tables are reference-counted, so cloning is cheap.
///
/// # Example
///
/// ```
/// use paley::gf::DynamicGf;
///
/// let gf9 = DynamicGf::new(9).unwrap();
/// let x = gf9.element(3); // the polynomial x
///
/// // x^2 = -1 in GF(3)[x] / (x^2 + 1)
/// assert_eq!(x.pow(2).to_u32(), 2);
/// ```
#[derive(Clone)]
pub struct DynamicGf {
    tables: Arc<GfTables>,
}

impl DynamicGf {
    /// Create a new Galois field of the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not a prime power or no irreducible
    /// polynomial can be found for it.
    ///
    /// ```
    /// use paley::gf::DynamicGf;
    ///
    /// assert!(DynamicGf::new(7).is_ok());   // Prime field
    /// assert!(DynamicGf::new(9).is_ok());   // Extension field GF(3^2)
    /// assert!(DynamicGf::new(6).is_err());  // 6 is not a prime power
    /// ```
    pub fn new(order: u32) -> Result<Self> {
        let tables = GfTables::new_extension(order)?;
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Get the field order (number of elements).
    #[must_use]
    pub fn order(&self) -> u32 {
        self.tables.order()
    }

    /// Get the field characteristic (the prime p where q = p^n).
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.tables.characteristic()
    }

    /// Get the extension degree (n where q = p^n).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.degree()
    }

    /// Create a field element from its integer encoding.
    ///
    /// Values outside `0..order` are reduced modulo the order.
    #[must_use]
    pub fn element(&self, value: u32) -> GfElement {
        GfElement {
            value: value % self.tables.order(),
            field: self.clone(),
        }
    }

    /// Create a field element, rejecting values outside `0..order`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `value >= order`.
    pub fn try_element(&self, value: u32) -> Result<GfElement> {
        if value >= self.order() {
            return Err(Error::ElementOutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(self.element(value))
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> GfElement {
        self.element(0)
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> GfElement {
        self.element(1)
    }

    /// Iterate over all elements of the field in encoding order.
    pub fn elements(&self) -> impl Iterator<Item = GfElement> + '_ {
        (0..self.order()).map(move |v| self.element(v))
    }

    /// Iterate over all non-zero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = GfElement> + '_ {
        (1..self.order()).map(move |v| self.element(v))
    }

    /// Access the underlying tables for direct operations.
    #[must_use]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }
}

impl fmt::Debug for DynamicGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for DynamicGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() == 1 {
            write!(f, "GF({})", self.order())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.degree())
        }
    }
}

/// An element of a dynamic Galois field.
///
/// Holds the element encoding and a handle to its field.
#[derive(Clone)]
pub struct GfElement {
    value: u32,
    field: DynamicGf,
}

impl GfElement {
    /// Get the integer encoding of this element.
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        self.value
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &DynamicGf {
        &self.field
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    fn with_value(&self, value: u32) -> Self {
        Self {
            value,
            field: self.field.clone(),
        }
    }

    /// Additive inverse (-a).
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with_value(self.field.tables.neg(self.value))
    }

    /// Checked multiplicative inverse.
    ///
    /// Returns `None` if called on zero.
    #[must_use]
    pub fn checked_inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| self.with_value(self.field.tables.inv(self.value)))
    }

    /// Field addition.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.with_value(self.field.tables.add(self.value, rhs.value))
    }

    /// Field subtraction.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.with_value(self.field.tables.sub(self.value, rhs.value))
    }

    /// Field multiplication.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.with_value(self.field.tables.mul(self.value, rhs.value))
    }

    /// Exponentiation by squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        self.with_value(self.field.tables.pow(self.value, exp))
    }

    /// Quadratic character of this element.
    ///
    /// Returns:
    /// - `0` if self is zero
    /// - `1` if self is a non-zero square
    /// - `-1` otherwise
    ///
    /// In odd characteristic this is Euler's criterion: a nonzero element
    /// is a square iff a^((q-1)/2) = 1. In characteristic 2 squaring is a
    /// bijection, so every nonzero element is a square.
    #[must_use]
    pub fn chi(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.field.characteristic() == 2
            || self.pow((self.field.order() - 1) / 2).is_one()
        {
            1
        } else {
            -1
        }
    }

    /// Check if this element is a non-zero square.
    #[must_use]
    pub fn is_quadratic_residue(&self) -> bool {
        self.chi() == 1
    }
}

impl PartialEq for GfElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.order() == other.field.order()
    }
}

impl Eq for GfElement {}

impl std::hash::Hash for GfElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.field.order().hash(state);
    }
}

impl fmt::Debug for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl fmt::Display for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::ops::Add for GfElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        GfElement::add(&self, &rhs)
    }
}

impl std::ops::Sub for GfElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        GfElement::sub(&self, &rhs)
    }
}

impl std::ops::Mul for GfElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        GfElement::mul(&self, &rhs)
    }
}

impl std::ops::Neg for GfElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        GfElement::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let gf7 = DynamicGf::new(7).unwrap();
        assert_eq!(gf7.order(), 7);
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.degree(), 1);

        let gf9 = DynamicGf::new(9).unwrap();
        assert_eq!(gf9.order(), 9);
        assert_eq!(gf9.characteristic(), 3);
        assert_eq!(gf9.degree(), 2);
    }

    #[test]
    fn test_invalid_order() {
        for q in [0, 1, 6, 10, 12] {
            assert!(DynamicGf::new(q).is_err(), "GF({q}) should not exist");
        }
    }

    #[test]
    fn test_try_element() {
        let gf5 = DynamicGf::new(5).unwrap();
        assert_eq!(gf5.try_element(4).unwrap().to_u32(), 4);
        assert_eq!(
            gf5.try_element(5).unwrap_err(),
            Error::ElementOutOfRange { value: 5, order: 5 }
        );
    }

    #[test]
    fn test_element_operators() {
        let gf5 = DynamicGf::new(5).unwrap();
        let a = gf5.element(3);
        let b = gf5.element(2);

        assert_eq!((a.clone() + b.clone()).to_u32(), 0);
        assert_eq!((a.clone() - b.clone()).to_u32(), 1);
        assert_eq!((a.clone() * b).to_u32(), 1);
        assert_eq!((-a.clone()).to_u32(), 2);
        assert_eq!(a.checked_inv().unwrap().to_u32(), 2); // 3 * 2 = 6 ≡ 1
        assert!(gf5.zero().checked_inv().is_none());
    }

    #[test]
    fn test_chi_prime_field() {
        // Squares mod 7: 1, 2, 4
        let gf7 = DynamicGf::new(7).unwrap();
        let chis: Vec<i8> = gf7.elements().map(|e| e.chi()).collect();
        assert_eq!(chis, vec![0, 1, 1, -1, 1, -1, -1]);
    }

    #[test]
    fn test_chi_extension_field_half_squares() {
        for q in [9u32, 25, 27, 49] {
            let gf = DynamicGf::new(q).unwrap();
            let squares = gf.units().filter(GfElement::is_quadratic_residue).count();
            assert_eq!(squares as u32, (q - 1) / 2, "GF({q})");

            // Every square of a unit is flagged as a residue
            for u in gf.units() {
                assert!(u.mul(&u).is_quadratic_residue(), "GF({q}) {u}^2");
            }
        }
    }

    #[test]
    fn test_chi_characteristic_two() {
        let gf8 = DynamicGf::new(8).unwrap();
        assert!(gf8.units().all(|u| u.chi() == 1));
        assert_eq!(gf8.zero().chi(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(DynamicGf::new(7).unwrap().to_string(), "GF(7)");
        assert_eq!(DynamicGf::new(9).unwrap().to_string(), "GF(3^2)");
        assert_eq!(format!("{:?}", DynamicGf::new(9).unwrap().element(5)), "GF(3^2)[5]");
    }
}
