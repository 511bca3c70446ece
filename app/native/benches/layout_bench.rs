//! Benchmarks for the layout engine's hot paths.
//!
//! Run with: `cargo bench -p tricol`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `layouts`: Both strategies' `apply` at various tile counts
//! - `layouts_4k`: The same on a 4K screen
//! - `resize`: `adjust` followed by `apply`, as a drag produces it
//! - `partition`: Raw weighted splits and weight adjustment
//! - `grouping`: Group selection for both layouts

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tricol_lib::config::{LayoutConfig, LayoutKind};
use tricol_lib::tiling::layout::grouping::Grouping;
use tricol_lib::tiling::layout::helpers::split_weighted;
use tricol_lib::tiling::layout::weights::adjust_weights;
use tricol_lib::tiling::state::tiles_with_ids;
use tricol_lib::tiling::{Axis, Edge, Rect, ResizeDelta, TileId};

// ============================================================================
// Test Data
// ============================================================================

/// Creates a standard 1080p screen frame for benchmarks.
fn screen_1080p() -> Rect {
    Rect::new(0.0, 25.0, 1920.0, 1055.0) // With menu bar offset
}

/// Creates a 4K screen frame for benchmarks.
fn screen_4k() -> Rect { Rect::new(0.0, 25.0, 3840.0, 2135.0) }

const GAP: f64 = 8.0;

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");
    let screen = screen_1080p();
    let config = LayoutConfig::default();

    for count in [1, 2, 4, 8, 12, 16] {
        for kind in LayoutKind::ALL {
            let strategy = kind.create(&config);
            let mut tiles = tiles_with_ids(count);

            group.bench_with_input(BenchmarkId::new(kind.as_str(), count), &count, |b, _| {
                b.iter(|| strategy.apply(black_box(&mut tiles), black_box(&screen), GAP));
            });
        }
    }

    group.finish();
}

fn bench_layouts_4k(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts_4k");
    let screen = screen_4k();
    let config = LayoutConfig {
        master_capacity: 3,
        ..LayoutConfig::default()
    };

    for count in [4, 16, 32] {
        for kind in LayoutKind::ALL {
            let strategy = kind.create(&config);
            let mut tiles = tiles_with_ids(count);

            group.bench_with_input(BenchmarkId::new(kind.as_str(), count), &count, |b, _| {
                b.iter(|| strategy.apply(black_box(&mut tiles), black_box(&screen), GAP));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Resize Benchmarks
// ============================================================================

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let screen = screen_1080p();
    let config = LayoutConfig::default();

    for kind in LayoutKind::ALL {
        let mut strategy = kind.create(&config);
        let mut tiles = tiles_with_ids(9);
        strategy.apply(&mut tiles, &screen, GAP);

        // Alternating drags keep the weights from running into their clamps.
        let mut sign = 1.0;
        group.bench_function(BenchmarkId::new("diagonal_drag", kind.as_str()), |b| {
            b.iter(|| {
                sign = -sign;
                let delta = ResizeDelta::new(0.0, 4.0 * sign, 0.0, 3.0 * sign);
                strategy.adjust(&screen, &mut tiles, black_box(TileId(4)), delta, GAP);
                strategy.apply(&mut tiles, &screen, GAP);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Partition Benchmarks
// ============================================================================

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let screen = screen_1080p();

    for count in [2usize, 8, 32] {
        let weights: Vec<f64> = (1..=count).map(|i| 1.0 + (i % 3) as f64).collect();

        group.bench_with_input(BenchmarkId::new("split_weighted", count), &count, |b, _| {
            b.iter(|| {
                split_weighted(black_box(&screen), black_box(&weights), GAP, Axis::Vertical)
            });
        });

        group.bench_with_input(BenchmarkId::new("adjust_weights", count), &count, |b, _| {
            b.iter(|| {
                adjust_weights(
                    black_box(&screen),
                    black_box(&weights),
                    GAP,
                    count / 2,
                    Edge::Trailing,
                    black_box(12.0),
                    Axis::Vertical,
                )
            });
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    group.bench_function("columns", |b| {
        b.iter(|| Grouping::columns(black_box(17), black_box(3)));
    });

    group.bench_function("rows", |b| {
        b.iter(|| Grouping::rows(black_box(17)));
    });

    group.bench_function("locate", |b| {
        let grouping = Grouping::columns(17, 3);
        b.iter(|| grouping.locate(black_box(15)));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_layouts,
    bench_layouts_4k,
    bench_resize,
    bench_partition,
    bench_grouping,
);

criterion_main!(benches);
