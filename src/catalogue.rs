//! Catalogue of the Hadamard orders the default strategies reach.
//!
//! Hadamard matrices are conjectured to exist for every multiple of 4, but
//! the Paley and Sylvester constructions only reach orders of the form
//! (q + 1)·2^k and 2(q + 1)·2^k. This module lists both sides of that line.

use crate::builder::{ConstructionPlan, HadamardBuilder};

/// Plans for every order up to `limit` (inclusive) the default strategies reach.
///
/// Orders 0, 1 and 2 are included.
///
/// # Example
///
/// ```
/// use paley::catalogue::reachable_orders;
///
/// let plans = reachable_orders(20);
/// let orders: Vec<usize> = plans.iter().map(|p| p.order()).collect();
/// assert_eq!(orders, vec![0, 1, 2, 4, 8, 12, 16, 20]);
///
/// for plan in &plans {
///     println!("{plan}");
/// }
/// ```
#[must_use]
pub fn reachable_orders(limit: usize) -> Vec<ConstructionPlan> {
    let builder = HadamardBuilder::new();
    (0..=limit).filter_map(|n| builder.plan(n).ok()).collect()
}

/// Multiples of 4 up to `limit` (inclusive) the default strategies cannot reach.
///
/// These are gaps in the construction family, not orders where no Hadamard
/// matrix exists.
///
/// # Example
///
/// ```
/// use paley::catalogue::unreachable_orders;
///
/// assert_eq!(unreachable_orders(200), vec![92, 116, 156, 172, 184, 188]);
/// ```
#[must_use]
pub fn unreachable_orders(limit: usize) -> Vec<usize> {
    let builder = HadamardBuilder::new();
    (4..=limit)
        .step_by(4)
        .filter(|&n| !builder.exists(n))
        .collect()
}
