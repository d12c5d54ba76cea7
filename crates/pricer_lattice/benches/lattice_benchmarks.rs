//! Criterion benchmarks for the CRR lattice kernel.
//!
//! Measures the full pricing pipeline across step counts to characterise
//! the O(N²) node walk, and isolates the forward lattice build from the
//! backward induction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::{OptionStyle, OptionType, PricingParams};
use pricer_lattice::{crr, induction, price, EngineConfig, ModelConstants};

fn scenario(steps: usize, style: OptionStyle) -> PricingParams {
    PricingParams::new(
        0.05,
        0.25,
        0.02,
        100.0,
        100.0,
        1.0,
        Some(steps),
        OptionType::Call,
        style,
    )
    .unwrap()
}

/// Benchmark the full pipeline for European and American styles.
fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");
    let config = EngineConfig::default();

    for steps in [252, 1000, 4000] {
        for style in [OptionStyle::European, OptionStyle::American] {
            let params = scenario(steps, style);
            group.bench_with_input(
                BenchmarkId::new(style.as_str(), steps),
                &params,
                |b, params| {
                    b.iter(|| price(black_box(params), &config).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the pipeline stages in isolation.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    for steps in [252, 1000] {
        let params = scenario(steps, OptionStyle::American);
        let constants = ModelConstants::derive(&params).unwrap();

        group.bench_with_input(
            BenchmarkId::new("stock_lattice", steps),
            &params,
            |b, params| {
                b.iter(|| crr::build_stock_lattice(black_box(params), &constants));
            },
        );

        let stock = crr::build_stock_lattice(&params, &constants);
        group.bench_with_input(
            BenchmarkId::new("backward_induction", steps),
            &stock,
            |b, stock| {
                b.iter(|| induction::induct(&params, &constants, black_box(stock)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_price, bench_stages);
criterion_main!(benches);
