use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::Point;
use grid_waypoints::{
    CompositeWalkable, Components, FlagStore, GridBounds, MapFlags, Pathfinder, Walkable,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: i32 = 96;
const N_SCENARIOS: usize = 64;

/// Random arena with scattered square obstacles, similar in density to the maps agents
/// typically walk on.
fn random_arena(rng: &mut StdRng) -> FlagStore {
    let mut store = FlagStore::new();
    store.add_region(Point::new(-2, -2), Point::new(N + 1, N + 1), MapFlags::GROUND);
    for _ in 0..N * 2 {
        let x = rng.gen_range(0..N - 3);
        let y = rng.gen_range(0..N - 3);
        let size = rng.gen_range(1..4);
        store.add_region(
            Point::new(x, y),
            Point::new(x + size - 1, y + size - 1),
            MapFlags::OBSTACLE,
        );
    }
    store
}

fn scenarios(rng: &mut StdRng, walkable: &dyn Walkable) -> Vec<(Point, Point)> {
    let mut random_free = || loop {
        let p = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if walkable.is_walkable(p.x, p.y) {
            return p;
        }
    };
    (0..N_SCENARIOS)
        .map(|_| (random_free(), random_free()))
        .collect()
}

fn arena_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let store = random_arena(&mut rng);
    let bounds = GridBounds::new(0, 0, N - 1, N - 1).unwrap();
    let mut pathfinder = Pathfinder::with_bounds(bounds);
    for radius in [0.0, 1.0] {
        let walkable = CompositeWalkable::new(&store, radius);
        let queries = scenarios(&mut rng, &walkable);
        let components = Components::generate(bounds, Some(&walkable));

        c.bench_function(format!("arena, raw A* (radius {radius})").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &queries {
                    black_box(pathfinder.find_raw_path(*start, *end, Some(&walkable)).unwrap());
                }
            })
        });
        c.bench_function(format!("arena, A* + optimizer (radius {radius})").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &queries {
                    black_box(pathfinder.find_path(*start, *end, Some(&walkable)).unwrap());
                }
            })
        });
        c.bench_function(
            format!("arena, components + A* + optimizer (radius {radius})").as_str(),
            |b| {
                b.iter(|| {
                    for (start, end) in &queries {
                        if components.reachable(start, end) {
                            black_box(pathfinder.find_path(*start, *end, Some(&walkable)).unwrap());
                        }
                    }
                })
            },
        );
    }
}

criterion_group!(benches, arena_bench);
criterion_main!(benches);
