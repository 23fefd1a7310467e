//! Benchmarks for the two kernels across input sizes

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use judge_kernels::{add, find_pair, DigitChain};
use std::hint::black_box;

/// Pair only completes at the last element, so every lookup misses first
fn bench_find_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pair");

    for size in &[100usize, 1_000, 10_000, 100_000] {
        let mut values: Vec<i64> = (0..*size as i64).map(|i| i * 2).collect();
        let target = values[0] + 1;
        if let Some(last) = values.last_mut() {
            *last = 1;
        }

        group.bench_with_input(BenchmarkId::new("worst_case", size), &values, |b, values| {
            b.iter(|| find_pair(black_box(values), black_box(target)))
        });
    }

    group.finish();
}

/// All-nines operands keep the carry alive through every digit
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_chain_add");

    for digits in &[10usize, 100, 1_000, 10_000] {
        let nines = "9".repeat(*digits);
        let a: DigitChain = nines.parse().unwrap();
        let b: DigitChain = "1".parse().unwrap();

        group.bench_with_input(
            BenchmarkId::new("carry_chain", digits),
            &(a, b),
            |bench, (a, b)| bench.iter(|| add(black_box(a), black_box(b))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_pair, bench_add);
criterion_main!(benches);
