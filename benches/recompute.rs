use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trellis::{
    Grid, GridArea, Insets, MaxSize, NullSink, Placement, Spacing, StaticTarget, Viewport,
};

fn build_dashboard_grid(columns: usize, rows: usize) -> Grid {
    let mut grid = Grid::new(
        columns,
        rows,
        StaticTarget::new(Viewport::sized(1920, 1080)),
        NullSink,
    )
    .expect("grid");
    grid.set_offsets(Insets::uniform(8));
    grid.set_padding(Insets::uniform(2));
    grid.set_spacing(Spacing::uniform(4));
    for col in 0..columns as i32 {
        for row in 0..rows as i32 {
            grid.attach(
                format!("panel-{col}-{row}"),
                Placement::new(GridArea::cell(col, row)),
            );
        }
    }
    grid.attach(
        "banner",
        Placement::new(GridArea::span(0, 0, columns as i32, 1)),
    );
    grid.attach(
        "badge",
        Placement::new(GridArea::cell(-1, -1)).with_max_size(MaxSize::both(64, 24)),
    );
    grid
}

fn recompute_small_grid(c: &mut Criterion) {
    let mut grid = build_dashboard_grid(4, 3);
    c.bench_function("recompute_4x3", |b| {
        b.iter(|| {
            let pass = grid.recompute().expect("pass");
            black_box(pass.placed.len());
        });
    });
}

fn recompute_dense_grid(c: &mut Criterion) {
    let mut grid = build_dashboard_grid(16, 12);
    c.bench_function("recompute_16x12", |b| {
        b.iter(|| {
            let pass = grid.recompute().expect("pass");
            black_box(pass.placed.len());
        });
    });
}

criterion_group!(benches, recompute_small_grid, recompute_dense_grid);
criterion_main!(benches);
