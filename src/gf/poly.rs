//! Irreducible polynomials for extension field construction.
//!
//! An irreducible polynomial of degree n over GF(p) is required to construct
//! GF(p^n). A polynomial is represented by its coefficients
//! [c_0, c_1, ..., c_{n-1}] where the polynomial is:
//! x^n + c_{n-1}*x^{n-1} + ... + c_1*x + c_0
//!
//! Note: The leading coefficient (for x^n) is always 1 and is implicit.

use crate::utils::is_prime;

/// Well-known irreducible polynomials for common field orders.
///
/// Orders not listed here fall back to [`find_irreducible_poly`].
pub static IRREDUCIBLE_POLYS: &[(u32, u32, &[u32])] = &[
    // GF(2^n) - Binary extension fields
    // x^2 + x + 1
    (2, 2, &[1, 1]),
    // x^3 + x + 1
    (2, 3, &[1, 1, 0]),
    // x^4 + x + 1
    (2, 4, &[1, 1, 0, 0]),
    // x^5 + x^2 + 1
    (2, 5, &[1, 0, 1, 0, 0]),
    // x^6 + x + 1
    (2, 6, &[1, 1, 0, 0, 0, 0]),
    // x^7 + x^3 + 1
    (2, 7, &[1, 0, 0, 1, 0, 0, 0]),
    // x^8 + x^4 + x^3 + x + 1 (AES polynomial)
    (2, 8, &[1, 1, 0, 1, 1, 0, 0, 0]),
    // GF(3^n) - Ternary extension fields
    // x^2 + 1
    (3, 2, &[1, 0]),
    // x^3 + 2x + 1
    (3, 3, &[1, 2, 0]),
    // x^4 + 2x^3 + 2
    (3, 4, &[2, 0, 0, 2]),
    // GF(5^n)
    // x^2 + 2
    (5, 2, &[2, 0]),
    // x^3 + x + 1
    (5, 3, &[1, 1, 0]),
    // GF(7^2): x^2 + 1
    (7, 2, &[1, 0]),
    // GF(11^2): x^2 + 1
    (11, 2, &[1, 0]),
    // GF(13^2): x^2 + 2
    (13, 2, &[2, 0]),
];

/// Get an irreducible polynomial for GF(p^n).
///
/// Uses the built-in table when possible and searches otherwise.
/// Returns `None` if p is not prime or n is zero.
#[must_use]
pub fn get_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(poly_p, poly_n, _)| poly_p == p && poly_n == n)
        .map(|&(_, _, coeffs)| coeffs.to_vec())
        .or_else(|| find_irreducible_poly(p, n))
}

/// Find the first monic irreducible polynomial of degree n over GF(p).
///
/// Candidates are enumerated with c_0 varying fastest.
///
/// # Example
///
/// ```
/// use paley::gf::find_irreducible_poly;
///
/// // x^2 + 1 is irreducible over GF(3) since -1 is not a square mod 3
/// assert_eq!(find_irreducible_poly(3, 2), Some(vec![1, 0]));
/// assert_eq!(find_irreducible_poly(4, 2), None); // 4 is not prime
/// ```
#[must_use]
pub fn find_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    if !is_prime(p) || n == 0 {
        return None;
    }
    if n == 1 {
        return Some(vec![0]);
    }

    let candidates = u64::from(p).checked_pow(n)?;
    (0..candidates)
        .map(|index| digits(index, p, n as usize))
        // c_0 = 0 means x divides the polynomial
        .filter(|coeffs| coeffs[0] != 0)
        .find(|coeffs| is_irreducible(p, coeffs))
}

/// Check whether the monic polynomial with the given low coefficients is irreducible over GF(p).
///
/// A degree-n polynomial is reducible iff it has a monic factor of degree at most n/2.
/// Returns false when p is not prime.
#[must_use]
pub fn is_irreducible(p: u32, coeffs: &[u32]) -> bool {
    let n = coeffs.len();
    if n == 0 || !is_prime(p) {
        return false;
    }

    let mut f: Vec<u64> = coeffs.iter().map(|&c| u64::from(c % p)).collect();
    f.push(1);

    for d in 1..=n / 2 {
        let Some(count) = u64::from(p).checked_pow(d as u32) else {
            return false;
        };
        for index in 0..count {
            let mut g: Vec<u64> = digits(index, p, d).into_iter().map(u64::from).collect();
            g.push(1);
            if divides(&g, &f, u64::from(p)) {
                return false;
            }
        }
    }

    true
}

/// Base-p digits of `index`, least significant first.
fn digits(mut index: u64, p: u32, len: usize) -> Vec<u32> {
    let p = u64::from(p);
    (0..len)
        .map(|_| {
            #[allow(clippy::cast_possible_truncation)]
            let digit = (index % p) as u32;
            index /= p;
            digit
        })
        .collect()
}

/// Whether the monic polynomial g divides f over GF(p).
fn divides(g: &[u64], f: &[u64], p: u64) -> bool {
    let dg = g.len() - 1;
    let mut r = f.to_vec();

    for i in (dg..r.len()).rev() {
        let c = r[i];
        if c != 0 {
            for (j, &gj) in g.iter().enumerate() {
                let idx = i - dg + j;
                r[idx] = (r[idx] + p - c * gj % p) % p;
            }
        }
    }

    r[..dg].iter().all(|&c| c == 0)
}
