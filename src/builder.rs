//! Builder pattern for constructing Hadamard matrices.
//!
//! The builder picks a construction for a requested order without the caller
//! needing to know which one applies.
//!
//! # Example
//!
//! ```
//! use paley::HadamardBuilder;
//!
//! // Automatically selects the construction
//! let h = HadamardBuilder::new().build(20).unwrap();
//!
//! assert_eq!(h.order(), 20);
//! assert!(h.is_hadamard());
//! ```
//!
//! # Construction Selection
//!
//! For an order n the builder works through these cases:
//!
//! 1. n = 0, 1, 2 are written down directly
//! 2. Other orders not divisible by 4 have no Hadamard matrix ([`Error::NoSolution`])
//! 3. Otherwise the first applicable [`Strategy`] in priority order is taken
//!    (default: Paley I, Paley II, Sylvester doubling)
//! 4. Sylvester doubling repeats the analysis for n/2
//! 5. If nothing applies, [`Error::NoConstructionFound`] is returned
//!
//! The whole analysis is captured in a [`ConstructionPlan`] before any matrix
//! is built, so [`HadamardBuilder::exists`] and [`HadamardBuilder::build`]
//! always agree.

use std::fmt;

use ndarray::{s, Array2};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::{double_in_place, Step, Strategy};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Emit at `info` when verbose, `debug` otherwise.
macro_rules! trace_step {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

/// A resolved construction: a base step followed by Sylvester doublings.
///
/// # Example
///
/// ```
/// use paley::construct::Step;
/// use paley::HadamardBuilder;
///
/// let plan = HadamardBuilder::new().plan(40).unwrap();
/// assert_eq!(plan.base(), Step::PaleyI { q: 19 });
/// assert_eq!(plan.doublings(), 1);
/// assert_eq!(plan.to_string(), "H(40) = Sylvester^1(PaleyI q=19)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructionPlan {
    order: usize,
    base: Step,
    doublings: u32,
}

impl ConstructionPlan {
    /// The order of the final matrix.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The construction the doublings start from.
    #[must_use]
    pub fn base(&self) -> Step {
        self.base
    }

    /// The number of Sylvester doublings applied to the base.
    #[must_use]
    pub fn doublings(&self) -> u32 {
        self.doublings
    }

    /// Build the matrix this plan describes.
    ///
    /// The base matrix is written into the top-left corner of the final
    /// array and doubled in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the base step cannot be built, the base order
    /// times 2^doublings is not the plan's order, or an order × order array
    /// cannot be addressed.
    pub fn materialize(&self) -> Result<Matrix> {
        let addressable = self
            .order
            .checked_mul(self.order)
            .is_some_and(|cells| isize::try_from(cells).is_ok());
        if !addressable {
            return Err(Error::invalid_params(format!(
                "order {} is too large to materialize",
                self.order
            )));
        }

        let base = self.base.construct()?;
        let base_order = base.order();

        let reached = 1usize
            .checked_shl(self.doublings)
            .and_then(|factor| base_order.checked_mul(factor));
        if reached != Some(self.order) {
            return Err(Error::invalid_params(format!(
                "plan for order {} starts from order {base_order} with {} doublings",
                self.order, self.doublings
            )));
        }

        if self.doublings == 0 {
            return Ok(base);
        }

        let mut h = Array2::zeros((self.order, self.order));
        h.slice_mut(s![..base_order, ..base_order])
            .assign(base.data());
        double_in_place(&mut h, base_order, self.doublings);

        Ok(Matrix::from_square(h))
    }
}

impl fmt::Display for ConstructionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.doublings == 0 {
            write!(f, "H({}) = {}", self.order, self.base)
        } else {
            write!(
                f,
                "H({}) = Sylvester^{}({})",
                self.order, self.doublings, self.base
            )
        }
    }
}

/// Builder for constructing Hadamard matrices.
///
/// # Example
///
/// ```
/// use paley::construct::Strategy;
/// use paley::HadamardBuilder;
///
/// // Default strategies
/// let h = HadamardBuilder::new().build(12).unwrap();
/// assert!(h.is_skew_hadamard());  // Paley I, q = 11
///
/// // Restrict to Paley II, logging each step at info level
/// let h = HadamardBuilder::new()
///     .strategies(&[Strategy::PaleyII])
///     .verbose(true)
///     .build(12)
///     .unwrap();
/// assert!(h.is_hadamard());
/// assert!(!h.is_skew_hadamard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HadamardBuilder {
    strategies: Vec<Strategy>,
    verbose: bool,
}

impl Default for HadamardBuilder {
    fn default() -> Self {
        Self {
            strategies: Strategy::DEFAULT.to_vec(),
            verbose: false,
        }
    }
}

impl HadamardBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategies to try, in priority order.
    ///
    /// An empty list makes every later call fail with [`Error::InvalidParams`].
    #[must_use]
    pub fn strategies(mut self, strategies: &[Strategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    /// Log construction steps at `info` instead of `debug`.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve the construction for order n without building anything.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParams`] if no strategies are configured
    /// - [`Error::NoSolution`] if n > 2 is not a multiple of 4
    /// - [`Error::NoConstructionFound`] if no strategy reaches n
    ///
    /// # Example
    ///
    /// ```
    /// use paley::{Error, HadamardBuilder};
    ///
    /// let builder = HadamardBuilder::new();
    /// assert_eq!(builder.plan(36).unwrap().to_string(), "H(36) = PaleyII q=17");
    /// assert_eq!(builder.plan(6).unwrap_err(), Error::NoSolution(6));
    /// assert_eq!(builder.plan(92).unwrap_err(), Error::NoConstructionFound(92));
    /// ```
    pub fn plan(&self, n: usize) -> Result<ConstructionPlan> {
        if self.strategies.is_empty() {
            return Err(Error::invalid_params("at least one strategy is required"));
        }

        if n > 2 && n % 4 != 0 {
            debug!(order = n, "order is odd or 2 mod 4, no Hadamard matrix exists");
            return Err(Error::NoSolution(n));
        }

        let mut order = n;
        let mut doublings = 0u32;
        let base = loop {
            if order <= 2 {
                break Step::Trivial(order);
            }

            if order % 4 != 0 {
                debug!(order = n, half = order, "halving reached an order that is 2 mod 4");
                return Err(Error::NoConstructionFound(n));
            }

            match self.strategies.iter().find_map(|s| s.step(order)) {
                Some(Step::Sylvester { half }) => {
                    trace_step!(self.verbose, order, half, "Sylvester doubling");
                    order = half;
                    doublings += 1;
                }
                Some(step) => break step,
                None => {
                    debug!(order = n, stuck_at = order, "no strategy applies");
                    return Err(Error::NoConstructionFound(n));
                }
            }
        };

        let plan = ConstructionPlan {
            order: n,
            base,
            doublings,
        };
        trace_step!(self.verbose, order = n, %plan, "planned construction");
        Ok(plan)
    }

    /// Whether [`HadamardBuilder::build`] would succeed for order n.
    #[must_use]
    pub fn exists(&self, n: usize) -> bool {
        self.plan(n).is_ok()
    }

    /// Build a Hadamard matrix of order n.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`HadamardBuilder::plan`].
    pub fn build(&self, n: usize) -> Result<Matrix> {
        let plan = self.plan(n)?;
        let matrix = plan.materialize()?;
        trace_step!(
            self.verbose,
            order = n,
            base = %plan.base(),
            doublings = plan.doublings(),
            "built Hadamard matrix"
        );
        Ok(matrix)
    }
}

/// Build a Hadamard matrix of order n with the default strategies.
///
/// # Errors
///
/// - [`Error::NoSolution`] if n > 2 is not a multiple of 4
/// - [`Error::NoConstructionFound`] if the Paley and Sylvester constructions cannot reach n
///
/// # Example
///
/// ```
/// use paley::{hadamard, Error};
///
/// let h = hadamard(4).unwrap();
/// assert_eq!(
///     h.to_vec(),
///     vec![
///         vec![1, 1, 1, 1],
///         vec![-1, 1, -1, 1],
///         vec![-1, 1, 1, -1],
///         vec![-1, -1, 1, 1],
///     ]
/// );
///
/// assert_eq!(hadamard(6).unwrap_err(), Error::NoSolution(6));
/// assert_eq!(hadamard(92).unwrap_err(), Error::NoConstructionFound(92));
/// ```
pub fn hadamard(n: usize) -> Result<Matrix> {
    HadamardBuilder::new().build(n)
}

/// Whether [`hadamard`] succeeds for order n.
///
/// This reports what the Paley and Sylvester constructions reach, not
/// whether a Hadamard matrix of order n exists at all.
///
/// # Example
///
/// ```
/// use paley::hadamard_exists;
///
/// assert!(hadamard_exists(2));
/// assert!(hadamard_exists(28));
/// assert!(!hadamard_exists(10));
/// assert!(!hadamard_exists(92));
/// ```
#[must_use]
pub fn hadamard_exists(n: usize) -> bool {
    HadamardBuilder::new().exists(n)
}

/// Every step the given strategies could take at order n, in priority order.
///
/// # Example
///
/// ```
/// use paley::available_steps;
/// use paley::construct::{Step, Strategy};
///
/// let steps = available_steps(20, &Strategy::DEFAULT);
/// assert_eq!(
///     steps,
///     vec![Step::PaleyI { q: 19 }, Step::PaleyII { q: 9 }, Step::Sylvester { half: 10 }]
/// );
/// ```
#[must_use]
pub fn available_steps(n: usize, strategies: &[Strategy]) -> Vec<Step> {
    strategies.iter().filter_map(|s| s.step(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_orders() {
        assert_eq!(hadamard(0).unwrap().order(), 0);
        assert_eq!(hadamard(1).unwrap().to_vec(), vec![vec![1]]);
        assert_eq!(hadamard(2).unwrap().to_vec(), vec![vec![1, 1], vec![1, -1]]);
    }

    #[test]
    fn test_no_solution() {
        for n in [3usize, 5, 6, 7, 9, 10, 14, 18, 22, 101] {
            let err = hadamard(n).unwrap_err();
            assert_eq!(err, Error::NoSolution(n));
            assert!(err.proves_nonexistence());
            assert!(!hadamard_exists(n));
        }
    }

    #[test]
    fn test_no_construction_found() {
        for n in [92usize, 116, 156, 172, 184, 188] {
            let err = hadamard(n).unwrap_err();
            assert_eq!(err, Error::NoConstructionFound(n));
            assert!(!err.proves_nonexistence());
            assert!(!hadamard_exists(n));
        }
    }

    #[test]
    fn test_plans() {
        let builder = HadamardBuilder::new();
        let cases = [
            (4, Step::PaleyI { q: 3 }, 0),
            (12, Step::PaleyI { q: 11 }, 0),
            (16, Step::PaleyI { q: 7 }, 1),
            (20, Step::PaleyI { q: 19 }, 0),
            (28, Step::PaleyI { q: 27 }, 0),
            (36, Step::PaleyII { q: 17 }, 0),
            (40, Step::PaleyI { q: 19 }, 1),
            (52, Step::PaleyII { q: 25 }, 0),
            (100, Step::PaleyII { q: 49 }, 0),
        ];
        for (n, base, doublings) in cases {
            let plan = builder.plan(n).unwrap();
            assert_eq!(plan.order(), n);
            assert_eq!(plan.base(), base, "n={n}");
            assert_eq!(plan.doublings(), doublings, "n={n}");
        }
    }

    #[test]
    fn test_built_matrices_are_hadamard() {
        for n in (0..=100).filter(|&n| hadamard_exists(n)) {
            let h = hadamard(n).unwrap();
            assert_eq!(h.order(), n);
            assert!(h.is_hadamard(), "n={n}");
        }
    }

    #[test]
    fn test_exists_matches_build() {
        for n in 0..=200 {
            assert_eq!(hadamard_exists(n), hadamard(n).is_ok(), "n={n}");
        }
    }

    #[test]
    fn test_forced_paley_two() {
        let builder = HadamardBuilder::new().strategies(&[Strategy::PaleyII]);
        for n in [12usize, 20, 28, 52, 100] {
            let h = builder.build(n).unwrap();
            assert!(h.is_hadamard(), "n={n}");
        }
        assert_eq!(builder.build(8).unwrap_err(), Error::NoConstructionFound(8));
    }

    #[test]
    fn test_forced_sylvester() {
        let builder = HadamardBuilder::new().strategies(&[Strategy::Sylvester]);
        let plan = builder.plan(64).unwrap();
        assert_eq!(plan.base(), Step::Trivial(2));
        assert_eq!(plan.doublings(), 5);
        assert!(builder.build(64).unwrap().is_hadamard());
        assert_eq!(builder.build(12).unwrap_err(), Error::NoConstructionFound(12));
    }

    #[test]
    fn test_empty_strategies() {
        let builder = HadamardBuilder::new().strategies(&[]);
        assert!(matches!(builder.plan(4), Err(Error::InvalidParams { .. })));
        assert!(!builder.exists(4));
    }

    #[test]
    fn test_verbose_builds_same_matrix() {
        let quiet = HadamardBuilder::new().build(24).unwrap();
        let verbose = HadamardBuilder::new().verbose(true).build(24).unwrap();
        assert_eq!(quiet, verbose);
    }

    #[test]
    fn test_materialize_rejects_inconsistent_plan() {
        let plan = ConstructionPlan {
            order: 24,
            base: Step::PaleyI { q: 11 },
            doublings: 2,
        };
        assert!(matches!(
            plan.materialize(),
            Err(Error::InvalidParams { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_materialize_rejects_unaddressable_order() {
        let n = 1usize << 40;
        let plan = HadamardBuilder::new().plan(n).unwrap();
        assert_eq!(plan.order(), n);
        assert!(matches!(
            plan.materialize(),
            Err(Error::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_plan_display() {
        let builder = HadamardBuilder::new();
        assert_eq!(builder.plan(2).unwrap().to_string(), "H(2) = Trivial(2)");
        assert_eq!(builder.plan(12).unwrap().to_string(), "H(12) = PaleyI q=11");
        assert_eq!(
            builder.plan(96).unwrap().to_string(),
            "H(96) = Sylvester^1(PaleyI q=47)"
        );
    }
}
