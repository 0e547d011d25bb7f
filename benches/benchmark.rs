use calc_rs::calculate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const INPUT: &str = "1 + 3 * (4 - 2) / (2 - 1) + sqr(4)";

fn calculate_benchmark(c: &mut Criterion) {
    c.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(INPUT)).unwrap())
    });

    let nested = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    c.bench_function("calculate_nested", |b| {
        b.iter(|| calculate(black_box(&nested)).unwrap())
    });
}

criterion_group!(benches, calculate_benchmark);
criterion_main!(benches);
