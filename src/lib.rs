//! # Paley
//!
//! Hadamard matrices from the Paley and Sylvester constructions, with the
//! Jacobsthal matrices and finite-field arithmetic behind them.
//!
//! ## Overview
//!
//! A Hadamard matrix of order n is an n×n matrix H of ±1 entries with
//! H·Hᵗ = n·I. They are used in:
//! - **Design of Experiments**: Plackett-Burman screening designs
//! - **Coding Theory**: Hadamard and Reed-Muller codes
//! - **Signal Processing**: Walsh-Hadamard transforms
//!
//! This library provides:
//! - Paley I, Paley II and Sylvester constructions, chosen automatically
//! - Jacobsthal matrices over GF(q) for every prime power q, including
//!   extension fields such as GF(9), GF(25) and GF(27)
//! - An existence check that always agrees with construction
//! - Verification of Hadamard and Jacobsthal properties
//!
//! ## Quick Start
//!
//! ```rust
//! use paley::hadamard;
//!
//! let h = hadamard(12).unwrap();
//!
//! assert_eq!(h.order(), 12);
//! assert!(h.is_hadamard());
//! ```
//!
//! Or configure the builder:
//!
//! ```rust
//! use paley::construct::Strategy;
//! use paley::HadamardBuilder;
//!
//! let builder = HadamardBuilder::new()
//!     .strategies(&[Strategy::PaleyII, Strategy::Sylvester])
//!     .verbose(true);
//!
//! let plan = builder.plan(52).unwrap();
//! assert_eq!(plan.to_string(), "H(52) = PaleyII q=25");
//! assert!(builder.build(52).unwrap().is_hadamard());
//! ```
//!
//! ## Which orders are reachable?
//!
//! Orders 1 and 2, and multiples of 4 of the form (q + 1)·2^k or
//! 2(q + 1)·2^k for a prime power q. Other orders fail with
//! [`Error::NoSolution`] when no Hadamard matrix can exist, and with
//! [`Error::NoConstructionFound`] when one may exist but these constructions
//! do not reach it (the first such order is 92).
//!
//! ## Logging
//!
//! Construction steps are reported through [`tracing`] at `debug` level, or
//! `info` with [`HadamardBuilder::verbose`]. No subscriber is installed.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of matrices and plans
//! - `parallel`: Enable parallel Jacobsthal construction and verification using rayon
//! - `python`: Enable Python bindings via PyO3

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod catalogue;
pub mod construct;
pub mod error;
pub mod gf;
pub mod matrix;
#[cfg(feature = "python")]
pub mod python;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{
        available_steps, hadamard, hadamard_exists, ConstructionPlan, HadamardBuilder,
    };
    pub use crate::construct::{
        double, jacobsthal, Construction, PaleyOne, PaleyTwo, Step, Strategy, Sylvester,
    };
    pub use crate::error::{Error, Result};
    pub use crate::gf::{is_square, DynamicGf, FieldRep, GfElement, QuadraticCharacter};
    pub use crate::matrix::{verify_hadamard, verify_jacobsthal, Matrix, VerificationResult};
    pub use crate::utils::{check_prime_power, factor_prime_power, is_prime, is_prime_power};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_jacobsthal, par_verify_hadamard};
}

// Re-export commonly used items at crate root
pub use builder::{available_steps, hadamard, hadamard_exists, ConstructionPlan, HadamardBuilder};
pub use construct::jacobsthal;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use utils::{is_prime, is_prime_power};

#[cfg(feature = "parallel")]
pub use parallel::{par_jacobsthal, par_verify_hadamard};
