//! Benchmark for layer pipeline query performance.
//!
//! TARGET: 1,000,000 block-column queries per second on a full pipeline
//!
//! Run with: cargo bench --package strata_layers --bench layer_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_layers::{Area, LayerStack, WorldSeed};

fn full_pipeline() -> Area<u8> {
    LayerStack::source(WorldSeed::new(42), &[0u8, 1, 2, 3, 4, 5, 6, 7])
        .expect("non-empty candidates")
        .fuzzy_zoom()
        .zoom_n(3)
        .voronoi()
        .build()
        .build()
}

fn benchmark_single_query(c: &mut Criterion) {
    let mut area = full_pipeline();

    c.bench_function("single_cell_query", |b| {
        let mut x = 0i32;
        b.iter(|| {
            x = x.wrapping_add(31);
            black_box(area.get(black_box(x), black_box(x.wrapping_mul(7))))
        });
    });
}

fn benchmark_chunk_traversal(c: &mut Criterion) {
    let mut area = full_pipeline();

    let mut group = c.benchmark_group("chunk_traversal");
    group.throughput(Throughput::Elements(16 * 16));
    group.bench_function("16x16_row_major", |b| {
        let mut cx = 0i32;
        b.iter(|| {
            cx = cx.wrapping_add(16);
            for x in cx..cx + 16 {
                for z in 0..16 {
                    black_box(area.get(x, z));
                }
            }
        });
    });
    group.finish();
}

fn benchmark_million_queries(c: &mut Criterion) {
    let mut area = full_pipeline();

    let mut group = c.benchmark_group("million_queries");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);
    group.bench_function("1M_row_major", |b| {
        b.iter(|| {
            for i in 0..1_000_000_i32 {
                let x = i % 1000;
                let z = i / 1000;
                black_box(area.get(x, z));
            }
        });
    });
    group.finish();
}

fn benchmark_concurrent_facade(c: &mut Criterion) {
    let field = LayerStack::source(WorldSeed::new(42), &[0u8, 1, 2, 3])
        .expect("non-empty candidates")
        .zoom_n(2)
        .build_concurrent();

    c.bench_function("concurrent_single_thread_query", |b| {
        let mut x = 0i32;
        b.iter(|| {
            x = x.wrapping_add(13);
            black_box(field.get(black_box(x), black_box(-x)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_query,
    benchmark_chunk_traversal,
    benchmark_million_queries,
    benchmark_concurrent_facade
);
criterion_main!(benches);
