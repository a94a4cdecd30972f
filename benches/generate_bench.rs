//! Benchmark for a full generation pass

use criterion::{criterion_group, criterion_main, Criterion};
use qualgen::qualifiers::format_qualifiers;
use qualgen::{generate_to, GeneratorConfig};
use std::hint::black_box;

fn bench_full_pass(c: &mut Criterion) {
    let config = GeneratorConfig::default();

    c.bench_function("generate_builtin_to_sink", |b| {
        b.iter(|| generate_to(black_box(&config), std::io::sink()).unwrap())
    });
}

fn bench_format_only(c: &mut Criterion) {
    let config = GeneratorConfig::default();

    c.bench_function("format_all_combinations", |b| {
        b.iter(|| {
            config
                .combinations()
                .map(|combination| format_qualifiers(black_box(&combination)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_full_pass, bench_format_only);
criterion_main!(benches);
