//! Benchmarks for Galois field arithmetic and the quadratic character.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use paley::gf::{DynamicGf, QuadraticCharacter};

fn bench_gf_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Multiplication");

    for order in [7u32, 23, 9, 27, 125] {
        let gf = DynamicGf::new(order).unwrap();

        group.bench_with_input(BenchmarkId::new("order", order), &gf, |b, gf| {
            let a = gf.element(3);
            let b_elem = gf.element(5);
            b.iter(|| {
                let mut result = a.clone();
                for _ in 0..100 {
                    result = result.mul(&b_elem);
                }
                result
            });
        });
    }

    group.finish();
}

fn bench_gf_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Creation");

    for order in [7u32, 23, 9, 27, 125] {
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, &order| {
            b.iter(|| DynamicGf::new(order).unwrap());
        });
    }

    group.finish();
}

fn bench_character(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadratic Character");

    for order in [127u32, 125, 121] {
        group.bench_with_input(BenchmarkId::new("new", order), &order, |b, &order| {
            b.iter(|| QuadraticCharacter::new(order).unwrap());
        });

        let chi = QuadraticCharacter::new(order).unwrap();
        group.bench_with_input(BenchmarkId::new("all_pairs", order), &chi, |b, chi| {
            b.iter(|| {
                (0..order)
                    .flat_map(|x| (0..order).map(move |y| (x, y)))
                    .filter(|&(x, y)| chi.is_square(x, y))
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gf_multiplication, bench_gf_creation, bench_character);
criterion_main!(benches);
