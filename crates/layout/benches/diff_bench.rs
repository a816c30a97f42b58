//! Criterion benchmarks for the diff engine and store history.
//!
//! Benchmarks:
//!   - compute_diff over two 500-room layouts with 10% of rooms moved
//!   - compute_diff of a layout against itself
//!   - 100 undoable edits followed by 100 undos
//!
//! Run with: cargo bench -p layout --bench diff_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use layout::{compute_diff, Layout, LayoutStore, Room, RoomEdit};

fn grid_layout(n: usize) -> Layout {
    let rooms = (0..n)
        .map(|i| {
            let (col, row) = ((i % 25) as f64, (i / 25) as f64);
            Room::new(format!("Room {i}"), 3.0, col * 3.5, row * 3.5)
        })
        .collect();
    Layout::new(rooms)
}

// ---------------------------------------------------------------------------
// Benchmark: compute_diff
// ---------------------------------------------------------------------------

fn bench_compute_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_diff");

    let a = grid_layout(500);
    let mut b = a.clone();
    for room in b.rooms.iter_mut().step_by(10) {
        room.x += 1.0;
    }

    group.bench_function("500_rooms_10pct_moved", |bench| {
        bench.iter(|| black_box(compute_diff(black_box(&a), black_box(&b))));
    });

    group.bench_function("500_rooms_identical", |bench| {
        bench.iter(|| black_box(compute_diff(black_box(&a), black_box(&a))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: history
// ---------------------------------------------------------------------------

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_history");
    let base = grid_layout(50);

    group.bench_function("100_edits_100_undos", |bench| {
        bench.iter(|| {
            let mut store = LayoutStore::with_layout(base.clone());
            for i in 0..100 {
                let _ = store.edit_room("Room 0", RoomEdit::X(i as f64));
            }
            for _ in 0..100 {
                store.undo();
            }
            black_box(store.layout().rooms.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_diff, bench_history);
criterion_main!(benches);
