//! Performance benchmarks for building display rows
//!
//! Measures `build` over growing catalogs with and without filters.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shelf::models::CatalogItem;
use shelf::state::FilterCriteria;
use shelf::view_model::build;

/// Generate a catalog grouped into categories of 25 items, every third one out of stock
fn generate_catalog(items: usize) -> Vec<CatalogItem> {
    (0..items)
        .map(|i| {
            CatalogItem::new(
                format!("Category {}", i / 25),
                format!("Product {:05}", i),
                format!("${}", i % 100),
                i % 3 != 0,
            )
        })
        .collect()
}

fn bench_build_unfiltered(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_unfiltered");
    let criteria = FilterCriteria::default();

    for size in [100, 1_000, 10_000].iter() {
        let catalog = generate_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(build(black_box(catalog), &criteria)))
        });
    }

    group.finish();
}

fn bench_build_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_filtered");
    let criteria = FilterCriteria::new("PRODUCT 000", true);

    for size in [100, 1_000, 10_000].iter() {
        let catalog = generate_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(build(black_box(catalog), &criteria)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_unfiltered, bench_build_filtered);
criterion_main!(benches);
