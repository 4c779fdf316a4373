use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use paley::construct::{Construction, PaleyOne, PaleyTwo, Sylvester};
use paley::{hadamard, jacobsthal, HadamardBuilder};

fn bench_jacobsthal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Jacobsthal");

    // Prime fields, then extension fields
    for q in [11u32, 43, 127, 9, 27, 125] {
        group.bench_with_input(BenchmarkId::from_parameter(q), &q, |b, &q| {
            b.iter(|| jacobsthal(q).unwrap());
        });
    }
    group.finish();
}

fn bench_paley(c: &mut Criterion) {
    let mut group = c.benchmark_group("Paley");

    for q in [11u32, 43, 127] {
        group.bench_with_input(BenchmarkId::new("I", q), &q, |b, &q| {
            let paley = PaleyOne::new(q).unwrap();
            b.iter(|| paley.construct().unwrap());
        });
    }
    for q in [13u32, 49, 125] {
        group.bench_with_input(BenchmarkId::new("II", q), &q, |b, &q| {
            let paley = PaleyTwo::new(q).unwrap();
            b.iter(|| paley.construct().unwrap());
        });
    }
    group.finish();
}

fn bench_sylvester(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sylvester");

    for m in [4u32, 6, 8] {
        let n = 1usize << m;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let sylvester = Sylvester::new(n).unwrap();
            b.iter(|| sylvester.construct().unwrap());
        });
    }
    group.finish();
}

fn bench_builder_auto(c: &mut Criterion) {
    let mut group = c.benchmark_group("Builder_Auto");

    // Compare planning overhead with full construction
    group.bench_function("plan_1000_orders", |b| {
        let builder = HadamardBuilder::new();
        b.iter(|| (0..1000).filter(|&n| builder.exists(n)).count());
    });

    for n in [100usize, 160, 256] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter(|| hadamard(n).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_jacobsthal,
    bench_paley,
    bench_sylvester,
    bench_builder_auto
);
criterion_main!(benches);
