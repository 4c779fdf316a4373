//! Primality testing and prime power factorization.
//!
//! Orders in this domain stay in the low thousands, so everything here is
//! plain trial division by odd candidates up to `sqrt(n)`.

use super::isqrt;

/// Result of factoring a prime power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimePowerFactorization {
    /// The prime base.
    pub prime: u32,
    /// The exponent (power).
    pub exponent: u32,
}

impl PrimePowerFactorization {
    /// Compute the value p^k.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.prime).pow(self.exponent)
    }

    /// Whether the factored number is the prime itself (k = 1).
    #[must_use]
    pub fn is_prime(&self) -> bool {
        self.exponent == 1
    }

    /// The smallest prime factor of the exponent k, or `None` when k = 1.
    #[must_use]
    pub fn smallest_exponent_prime_factor(&self) -> Option<u32> {
        smallest_prime_factor(self.exponent)
    }
}

/// Outcome of [`check_prime_power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimePowerCheck {
    /// Whether n = p^k for a prime p and k >= 1.
    pub is_power: bool,
    /// Smallest prime factor of k; `None` when n is itself prime or not a prime power.
    pub smallest_exponent_prime_factor: Option<u32>,
}

/// Test if a number is prime.
///
/// # Examples
///
/// ```
/// use paley::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(3));
/// assert!(!is_prime(4));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    (3..=isqrt(n)).step_by(2).all(|d| n % d != 0)
}

/// Get the smallest prime factor of n.
///
/// Returns `None` if n < 2.
///
/// # Examples
///
/// ```
/// use paley::utils::smallest_prime_factor;
///
/// assert_eq!(smallest_prime_factor(1), None);
/// assert_eq!(smallest_prime_factor(35), Some(5));
/// assert_eq!(smallest_prime_factor(37), Some(37));
/// ```
#[must_use]
pub fn smallest_prime_factor(n: u32) -> Option<u32> {
    if n < 2 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    Some(
        (3..=isqrt(n))
            .step_by(2)
            .find(|d| n % d == 0)
            .unwrap_or(n),
    )
}

/// Factor a number as a prime power if possible.
///
/// Returns `Some` if `n = p^k` for some prime p and k >= 1,
/// otherwise returns `None`.
///
/// # Examples
///
/// ```
/// use paley::utils::{factor_prime_power, PrimePowerFactorization};
///
/// assert_eq!(factor_prime_power(8), Some(PrimePowerFactorization { prime: 2, exponent: 3 }));
/// assert_eq!(factor_prime_power(9), Some(PrimePowerFactorization { prime: 3, exponent: 2 }));
/// assert_eq!(factor_prime_power(7), Some(PrimePowerFactorization { prime: 7, exponent: 1 }));
/// assert_eq!(factor_prime_power(6), None);  // 2 * 3
/// assert_eq!(factor_prime_power(1), None);
/// assert_eq!(factor_prime_power(0), None);
/// ```
#[must_use]
pub fn factor_prime_power(n: u32) -> Option<PrimePowerFactorization> {
    let prime = smallest_prime_factor(n)?;

    let mut rest = n;
    let mut exponent = 0;
    while rest % prime == 0 {
        rest /= prime;
        exponent += 1;
    }

    (rest == 1).then_some(PrimePowerFactorization { prime, exponent })
}

/// Test if a number is a prime power (p^k for some prime p and k >= 1).
///
/// # Examples
///
/// ```
/// use paley::utils::is_prime_power;
///
/// assert!(is_prime_power(2));   // 2^1
/// assert!(is_prime_power(8));   // 2^3
/// assert!(is_prime_power(27));  // 3^3
/// assert!(!is_prime_power(6));  // 2 * 3
/// assert!(!is_prime_power(1));
/// ```
#[must_use]
pub fn is_prime_power(n: u32) -> bool {
    factor_prime_power(n).is_some()
}

/// Decide whether n is a prime power and report the smallest prime factor of its exponent.
///
/// For a prime n the exponent is 1, which has no prime factor, so the factor is `None`.
///
/// # Examples
///
/// ```
/// use paley::utils::check_prime_power;
///
/// let c = check_prime_power(64); // 2^6
/// assert!(c.is_power);
/// assert_eq!(c.smallest_exponent_prime_factor, Some(2));
///
/// let c = check_prime_power(13);
/// assert!(c.is_power);
/// assert_eq!(c.smallest_exponent_prime_factor, None);
///
/// assert!(!check_prime_power(15).is_power);
/// ```
#[must_use]
pub fn check_prime_power(n: u32) -> PrimePowerCheck {
    match factor_prime_power(n) {
        Some(f) => PrimePowerCheck {
            is_power: true,
            smallest_exponent_prime_factor: f.smallest_exponent_prime_factor(),
        },
        None => PrimePowerCheck {
            is_power: false,
            smallest_exponent_prime_factor: None,
        },
    }
}
