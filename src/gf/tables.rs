//! Precomputed arithmetic tables for Galois fields.
//!
//! Elements of GF(p^n) are encoded as integers whose base-p digits are the
//! coefficients of a polynomial of degree < n over GF(p):
//! a_0 + a_1*p + ... + a_{n-1}*p^{n-1}. For n = 1 this is plain integer
//! arithmetic mod p.

use crate::error::{Error, Result};
use crate::utils::{factor_prime_power, is_prime, mod_pow};

use super::poly::get_irreducible_poly;

/// Precomputed arithmetic tables for a Galois field.
///
/// Addition and multiplication tables take O(q²) memory; negation and
/// inversion tables take O(q).
#[derive(Debug, Clone)]
pub struct GfTables {
    order: u32,
    characteristic: u32,
    degree: u32,
    /// Multiplication table: mul[a * order + b] = a * b
    mul: Vec<u32>,
    /// Addition table: add[a * order + b] = a + b
    add: Vec<u32>,
    /// inv[a] = a^(-1); inv[0] is unused
    inv: Vec<u32>,
    /// neg[a] = -a
    neg: Vec<u32>,
}

impl GfTables {
    /// Create arithmetic tables for a prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not prime.
    pub fn new_prime(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrimePower(p));
        }

        let order = p as usize;
        let mut add = vec![0u32; order * order];
        let mut mul = vec![0u32; order * order];

        for a in 0..p {
            for b in 0..p {
                let idx = a as usize * order + b as usize;
                #[allow(clippy::cast_possible_truncation)]
                let product = (u64::from(a) * u64::from(b) % u64::from(p)) as u32;
                add[idx] = (a + b) % p;
                mul[idx] = product;
            }
        }

        let neg = (0..p).map(|a| if a == 0 { 0 } else { p - a }).collect();

        // Fermat: a^(-1) = a^(p-2) mod p
        let inv = (0..p)
            .map(|a| {
                if a == 0 {
                    0
                } else {
                    #[allow(clippy::cast_possible_truncation)]
                    let inv = mod_pow(u64::from(a), u64::from(p - 2), u64::from(p)) as u32;
                    inv
                }
            })
            .collect();

        Ok(Self {
            order: p,
            characteristic: p,
            degree: 1,
            mul,
            add,
            inv,
            neg,
        })
    }

    /// Create arithmetic tables for GF(q) where q = p^n.
    ///
    /// Prime orders are delegated to [`GfTables::new_prime`].
    ///
    /// # Errors
    ///
    /// Returns an error if `q` is not a prime power or if no irreducible
    /// polynomial can be found for this field.
    pub fn new_extension(q: u32) -> Result<Self> {
        let factorization = factor_prime_power(q).ok_or(Error::NotPrimePower(q))?;

        if factorization.is_prime() {
            return Self::new_prime(q);
        }

        let p = factorization.prime;
        let n = factorization.exponent;
        let irr_poly = get_irreducible_poly(p, n).ok_or(Error::NoIrreduciblePolynomial(q))?;

        Ok(Self::build_extension_tables(p, n, &irr_poly))
    }

    fn build_extension_tables(p: u32, n: u32, irr_poly: &[u32]) -> Self {
        let order = p.pow(n);
        let size = order as usize;

        let mut add = vec![0u32; size * size];
        let mut mul = vec![0u32; size * size];

        for a in 0..order {
            for b in 0..order {
                let idx = a as usize * size + b as usize;
                add[idx] = poly_add(a, b, p, n);
                mul[idx] = poly_mul(a, b, p, n, irr_poly);
            }
        }

        let neg = (0..order).map(|a| poly_neg(a, p, n)).collect();

        let mut tables = Self {
            order,
            characteristic: p,
            degree: n,
            mul,
            add,
            inv: Vec::new(),
            neg,
        };

        // The multiplicative group has order q - 1, so a^(-1) = a^(q-2)
        tables.inv = (0..order)
            .map(|a| if a == 0 { 0 } else { tables.pow(a, order - 2) })
            .collect();

        tables
    }

    /// Get the field order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the field characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Get the extension degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    fn index(&self, a: u32, b: u32) -> usize {
        a as usize * self.order as usize + b as usize
    }

    /// Add two field elements.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else {
            self.add[self.index(a, b)]
        }
    }

    /// Subtract two field elements.
    #[must_use]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else {
            self.add[self.index(a, self.neg[b as usize])]
        }
    }

    /// Multiply two field elements.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        self.mul[self.index(a, b)]
    }

    /// Divide two field elements.
    ///
    /// # Panics
    ///
    /// Panics if b is zero.
    #[must_use]
    pub fn div(&self, a: u32, b: u32) -> u32 {
        assert!(b != 0, "division by zero");
        self.mul(a, self.inv[b as usize])
    }

    /// Get the additive inverse (negation) of an element.
    #[must_use]
    pub fn neg(&self, a: u32) -> u32 {
        self.neg[a as usize]
    }

    /// Get the multiplicative inverse of an element.
    ///
    /// # Panics
    ///
    /// Panics if a is zero.
    #[must_use]
    pub fn inv(&self, a: u32) -> u32 {
        assert!(a != 0, "inverse of zero");
        self.inv[a as usize]
    }

    /// Compute a^exp using repeated squaring with table lookups.
    #[must_use]
    pub fn pow(&self, mut base: u32, mut exp: u32) -> u32 {
        let mut result = 1u32;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            exp >>= 1;
            base = self.mul(base, base);
        }
        result
    }
}

/// Add two polynomials represented as integers (coefficient-wise mod p).
fn poly_add(a: u32, b: u32, p: u32, n: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    let mut result = 0u32;
    let mut pow_p = 1u32;

    for _ in 0..n {
        result += (a % p + b % p) % p * pow_p;
        a /= p;
        b /= p;
        pow_p *= p;
    }

    result
}

/// Negate a polynomial (negate each coefficient mod p).
fn poly_neg(a: u32, p: u32, n: u32) -> u32 {
    let mut a = a;
    let mut result = 0u32;
    let mut pow_p = 1u32;

    for _ in 0..n {
        result += (p - a % p) % p * pow_p;
        a /= p;
        pow_p *= p;
    }

    result
}

/// Multiply two polynomials and reduce modulo the irreducible polynomial.
fn poly_mul(a: u32, b: u32, p: u32, n: u32, irr_poly: &[u32]) -> u32 {
    let n = n as usize;
    let p64 = u64::from(p);
    let coeffs = |mut v: u32| -> Vec<u64> {
        (0..n)
            .map(|_| {
                let c = u64::from(v % p);
                v /= p;
                c
            })
            .collect()
    };
    let a_coeffs = coeffs(a);
    let b_coeffs = coeffs(b);

    let mut product = vec![0u64; 2 * n - 1];
    for (i, &ai) in a_coeffs.iter().enumerate() {
        for (j, &bj) in b_coeffs.iter().enumerate() {
            product[i + j] = (product[i + j] + ai * bj) % p64;
        }
    }

    // x^n = -(c_{n-1}*x^{n-1} + ... + c_0) modulo the irreducible polynomial
    for i in (n..product.len()).rev() {
        let coef = product[i];
        if coef != 0 {
            product[i] = 0;
            for (j, &c) in irr_poly.iter().enumerate() {
                let idx = i - n + j;
                product[idx] = (product[idx] + p64 - coef * u64::from(c) % p64) % p64;
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let encoded = product[..n].iter().rev().fold(0u64, |acc, &c| acc * p64 + c) as u32;
    encoded
}
