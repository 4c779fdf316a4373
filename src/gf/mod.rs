//! Galois field (finite field) arithmetic.
//!
//! Fields GF(q) for prime powers q, with just enough machinery to evaluate
//! the quadratic character used by the Paley constructions.
//!
//! ## Overview
//!
//! - [`DynamicGf`]: Runtime-configured field with precomputed tables
//! - [`GfElement`]: Element in a dynamic Galois field
//! - [`FieldRep`]: Whether GF(q) is integers mod p or a polynomial extension
//! - [`QuadraticCharacter`]: Cached chi(x - y) over element labels `0..q`
//!
//! ## Example
//!
//! ```
//! use paley::gf::{DynamicGf, QuadraticCharacter};
//!
//! let gf7 = DynamicGf::new(7).unwrap();
//! let a = gf7.element(3);
//! let b = gf7.element(5);
//! assert_eq!((a.clone() + b.clone()).to_u32(), 1);  // 3 + 5 = 8 ≡ 1 (mod 7)
//! assert_eq!((a * b).to_u32(), 1);                  // 3 * 5 = 15 ≡ 1 (mod 7)
//!
//! let chi = QuadraticCharacter::new(25).unwrap();
//! let squares = (1..25).filter(|&d| chi.is_square(d, 0)).count();
//! assert_eq!(squares, 12);
//! ```

mod character;
mod element;
mod poly;
mod tables;

pub use character::{is_square, FieldRep, QuadraticCharacter};
pub use element::{DynamicGf, GfElement};
pub use poly::{find_irreducible_poly, get_irreducible_poly, is_irreducible, IRREDUCIBLE_POLYS};
pub use tables::GfTables;
