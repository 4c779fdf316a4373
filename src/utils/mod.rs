//! Number-theoretic helpers: primality, prime powers and modular arithmetic.
//!
//! These are the predicates that drive field-size selection for the
//! Jacobsthal and Paley constructions.

mod primality;

pub use primality::{
    check_prime_power, factor_prime_power, is_prime, is_prime_power, smallest_prime_factor,
    PrimePowerCheck, PrimePowerFactorization,
};

/// Integer square root: the largest `r` with `r * r <= n`.
///
/// # Examples
///
/// ```
/// use paley::utils::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(24), 4);
/// assert_eq!(isqrt(25), 5);
/// assert_eq!(isqrt(u32::MAX), 65_535);
/// ```
#[must_use]
pub fn isqrt(n: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut r = f64::from(n).sqrt() as u32;
    while u64::from(r) * u64::from(r) > u64::from(n) {
        r -= 1;
    }
    while u64::from(r + 1) * u64::from(r + 1) <= u64::from(n) {
        r += 1;
    }
    r
}

/// Compute `base^exp mod modulus` using binary exponentiation.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use paley::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 2^10 = 1024, 1024 mod 1000 = 24
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 3^5 = 243, 243 mod 7 = 5
/// ```
#[must_use]
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    base %= modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }

    result
}

#[allow(clippy::cast_possible_truncation)]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(modulus)) as u64
}
