//! Property-based tests for Hadamard and Jacobsthal construction.
//!
//! Uses proptest to check the construction invariants across many orders.

use proptest::prelude::*;
use paley::catalogue::unreachable_orders;
use paley::gf::QuadraticCharacter;
use paley::matrix::{verify_hadamard, verify_jacobsthal};
use paley::utils::{check_prime_power, is_prime};
use paley::{hadamard, hadamard_exists, is_prime_power, jacobsthal, Error, HadamardBuilder};

/// Odd prime powers below 200.
fn odd_prime_powers() -> Vec<u32> {
    (3..200).filter(|&q| q % 2 == 1 && is_prime_power(q)).collect()
}

// =============================================================================
// Hadamard Construction Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every matrix hadamard(n) returns satisfies H·Hᵗ = nI with ±1 entries
    #[test]
    fn prop_built_matrices_are_hadamard(k in 0usize..=40) {
        let n = 4 * k;
        if let Ok(h) = hadamard(n) {
            prop_assert_eq!(h.order(), n);
            let result = verify_hadamard(&h);
            prop_assert!(result.is_valid, "H({}) issues: {:?}", n, result.issues);
        }
    }

    /// The existence check and the builder agree
    #[test]
    fn prop_exists_iff_build(n in 0usize..=400) {
        prop_assert_eq!(hadamard_exists(n), HadamardBuilder::new().plan(n).is_ok());
        if n <= 160 {
            prop_assert_eq!(hadamard_exists(n), hadamard(n).is_ok());
        }
    }

    /// A plan's base order times 2^doublings is the requested order
    #[test]
    fn prop_plan_reaches_order(n in 0usize..=10_000) {
        if let Ok(plan) = HadamardBuilder::new().plan(n) {
            prop_assert_eq!(plan.base().order() << plan.doublings(), n);
        }
    }

    /// Normalizing rows and columns keeps a Hadamard matrix Hadamard
    #[test]
    fn prop_normalized_is_hadamard(k in 1usize..=25) {
        let n = 4 * k;
        if let Ok(h) = hadamard(n) {
            let normalized = h.normalized();
            prop_assert!(normalized.is_hadamard());
            prop_assert!(normalized.rows().all(|row| row[0] == 1));
        }
    }
}

proptest! {
    /// Odd orders above 1 have no Hadamard matrix
    #[test]
    fn prop_odd_orders_have_no_solution(m in 1usize..10_000) {
        let n = 2 * m + 1;
        prop_assert!(!hadamard_exists(n));
        prop_assert_eq!(HadamardBuilder::new().plan(n).unwrap_err(), Error::NoSolution(n));
    }

    /// Orders ≡ 2 (mod 4) above 2 have no Hadamard matrix
    #[test]
    fn prop_two_mod_four_has_no_solution(m in 1usize..10_000) {
        let n = 4 * m + 2;
        prop_assert!(!hadamard_exists(n));
        prop_assert_eq!(HadamardBuilder::new().plan(n).unwrap_err(), Error::NoSolution(n));
    }

    /// Prime powers are exactly the numbers with a single distinct prime factor
    #[test]
    fn prop_prime_power_matches_trial_division(n in 0u32..20_000) {
        let distinct = (2..=n).filter(|&p| n % p == 0 && is_prime(p)).count();
        let expected = n >= 2 && distinct == 1;
        prop_assert_eq!(is_prime_power(n), expected);
        prop_assert_eq!(check_prime_power(n).is_power, expected);
    }
}

// =============================================================================
// Jacobsthal and Character Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// J·Jᵗ = qI − U for every odd prime power q
    #[test]
    fn prop_jacobsthal_identity(idx in 0usize..1000) {
        let qs = odd_prime_powers();
        let q = qs[idx % qs.len()];
        let j = jacobsthal(q).unwrap();
        let result = verify_jacobsthal(&j);
        prop_assert!(result.is_valid, "J({}) issues: {:?}", q, result.issues);
    }

    /// chi(y - x) = chi(-1) · chi(x - y)
    #[test]
    fn prop_character_reflection(idx in 0usize..1000, x in 0u32..1000, y in 0u32..1000) {
        let qs = odd_prime_powers();
        let q = qs[idx % qs.len()];
        let (x, y) = (x % q, y % q);
        let chi = QuadraticCharacter::new(q).unwrap();
        let sign = if q % 4 == 1 { 1 } else { -1 };
        prop_assert_eq!(chi.chi(y, x), sign * chi.chi(x, y));
    }

    /// Half of the nonzero elements of GF(q) are squares
    #[test]
    fn prop_half_the_units_are_squares(idx in 0usize..1000) {
        let qs = odd_prime_powers();
        let q = qs[idx % qs.len()];
        let chi = QuadraticCharacter::new(q).unwrap();
        let squares = (1..q).filter(|&d| chi.is_square(d, 0)).count();
        prop_assert_eq!(squares as u32, (q - 1) / 2);
    }
}

#[test]
fn test_known_gaps() {
    assert_eq!(unreachable_orders(200), vec![92, 116, 156, 172, 184, 188]);
    assert_eq!(hadamard(92).unwrap_err(), Error::NoConstructionFound(92));
    assert_eq!(hadamard(6).unwrap_err(), Error::NoSolution(6));
}

#[test]
fn test_jacobsthal_rejects_composites() {
    for q in [6u32, 10, 12, 14, 15, 21, 33, 35] {
        assert_eq!(jacobsthal(q).unwrap_err(), Error::InvalidSize(q));
    }
}
