//! Basic usage example for the paley library.
//!
//! This example builds Hadamard matrices with each construction, verifies
//! them, and shows the orders the constructions cannot reach.

use paley::catalogue::unreachable_orders;
use paley::matrix::{verify_hadamard, verify_jacobsthal};
use paley::{hadamard, jacobsthal, Error, HadamardBuilder};

fn main() {
    println!("Paley Library - Basic Usage Example\n");

    // Jacobsthal matrix over GF(7)
    println!("Jacobsthal matrix of order 7:");
    let j7 = jacobsthal(7).expect("Failed to construct J(7)");
    println!("{j7}");
    if verify_jacobsthal(&j7).is_valid {
        println!("✓ J·Jᵗ = 7I − U");
    }
    println!();

    // Paley I: order 12 from q = 11
    let builder = HadamardBuilder::new();
    let plan = builder.plan(12).expect("Failed to plan H(12)");
    println!("{plan}");
    let h12 = plan.materialize().expect("Failed to construct H(12)");
    println!("{h12}");
    println!("  Skew: {}", h12.is_skew_hadamard());
    println!();

    // Orders built over extension fields and by doubling
    for n in [28, 36, 52, 40, 100] {
        let plan = builder.plan(n).expect("Failed to plan");
        let h = plan.materialize().expect("Failed to construct");

        let result = verify_hadamard(&h);
        if result.is_valid {
            println!("✓ {plan}");
        } else {
            println!("✗ {plan}");
            for issue in &result.issues {
                println!("  Issue: {issue:?}");
            }
        }
    }
    println!();

    // Orders that fail, and why
    for n in [6, 92] {
        match hadamard(n) {
            Ok(_) => println!("H({n}) built"),
            Err(e @ Error::NoSolution(_)) => println!("H({n}): {e}"),
            Err(e) => println!("H({n}): {e} (proof of nonexistence: {})", e.proves_nonexistence()),
        }
    }
    println!();

    println!("Unreachable multiples of 4 up to 400:");
    println!("  {:?}", unreachable_orders(400));
}
