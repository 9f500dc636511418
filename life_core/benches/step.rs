//! Step throughput for a few grid sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use life_core::{CellMatrix, CoreGrid, GridBounds, ALIVE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Roughly a third of the cells alive, same seed every run
fn seeded(rows: usize, cols: usize) -> CellMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut matrix = CellMatrix::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(1.0 / 3.0) { matrix[(row, col)] = ALIVE; }
        }
    }
    matrix
}

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_grid_step");
    let bounds = GridBounds::new([4, 4], [1024, 1024]);

    for size in [64usize, 256, 1024].iter() {
        let mut grid = CoreGrid::new(seeded(*size, *size), bounds).expect("valid seed");

        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter(|| {
                grid.step();
                black_box(grid.alive_cell_count());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_step);
criterion_main!(benches);
