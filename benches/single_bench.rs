use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::Point;
use grid_waypoints::{CompositeWalkable, FlagStore, GridBounds, MapFlags, Pathfinder};
use std::hint::black_box;

// A long serpentine corridor: every other row is walled off except for an opening that
// alternates between the left and right side.
fn serpentine(n: i32) -> FlagStore {
    let mut store = FlagStore::new();
    store.add_region(Point::new(-1, -1), Point::new(n, n), MapFlags::GROUND);
    for y in (1..n - 1).step_by(3) {
        let (from, to) = if (y / 3) % 2 == 0 { (0, n - 4) } else { (3, n - 1) };
        store.add_region(Point::new(from, y), Point::new(to, y), MapFlags::OBSTACLE);
    }
    store
}

fn serpentine_bench(c: &mut Criterion) {
    const N: i32 = 64;
    let store = serpentine(N);
    let walkable = CompositeWalkable::new(&store, 0.0);
    let mut pathfinder = Pathfinder::with_bounds(GridBounds::new(0, 0, N - 1, N - 1).unwrap());
    let start = Point::new(0, 0);
    let end = Point::new(0, N - 1);
    c.bench_function("serpentine 64x64", |b| {
        b.iter(|| black_box(pathfinder.find_path(start, end, Some(&walkable)).unwrap()))
    });
}

criterion_group!(benches, serpentine_bench);
criterion_main!(benches);
