/// Fuzzes the pathfinding system by checking for many random grids that a path is found exactly
/// when the goal is reachable by being part of the same connected component, and that the
/// optimized waypoints never cut through cells the policy rejects.
use grid_util::Point;
use grid_waypoints::{
    waypoints_to_path, CompositeWalkable, Components, FlagStore, GridBounds, MapFlags, Pathfinder,
    Walkable,
};
use itertools::Itertools;
use rand::prelude::*;

const BLOCKERS: [MapFlags; 4] = [
    MapFlags::OBSTACLE,
    MapFlags::HOLE,
    MapFlags::MONSTER,
    MapFlags::PLAYER,
];

fn random_store(n: i32, rng: &mut StdRng, density: f64, keep_free: &[Point]) -> FlagStore {
    let mut store = FlagStore::new();
    store.add_region(Point::new(-2, -2), Point::new(n + 1, n + 1), MapFlags::GROUND);
    for x in 0..n {
        for y in 0..n {
            if rng.gen_bool(density) && !keep_free.contains(&Point::new(x, y)) {
                store.add_flag(x, y, *BLOCKERS.choose(rng).unwrap());
            }
        }
    }
    store
}

fn check_walkable_cells(cells: &[Point], start: Point, walkable: &dyn Walkable, store: &FlagStore) {
    for p in cells.iter().filter(|p| **p != start) {
        if !walkable.is_walkable(p.x, p.y) {
            println!("{}", store);
            panic!("{:?} in {:?} is not walkable", p, cells);
        }
    }
}

#[test]
fn fuzz() {
    const N: i32 = 12;
    const N_GRIDS: usize = 1500;
    let mut rng = StdRng::seed_from_u64(0);
    let bounds = GridBounds::new(0, 0, N - 1, N - 1).unwrap();
    let mut pathfinder = Pathfinder::with_bounds(bounds);
    let start = Point::new(0, 0);
    let end = Point::new(N - 1, N - 1);
    for radius in [0.0, 0.5, 1.0] {
        for _ in 0..N_GRIDS {
            let store = random_store(N, &mut rng, 0.3, &[start, end]);
            let walkable = CompositeWalkable::new(&store, radius);
            let components = Components::generate(bounds, Some(&walkable));
            let reachable = components.reachable(&start, &end);
            let path = pathfinder.find_path(start, end, Some(&walkable)).unwrap();
            // Show the grid if the search disagrees with the components
            if path.is_some() != reachable {
                println!("radius {radius}\n{store}");
            }
            assert_eq!(path.is_some(), reachable);
            if let Some(path) = path {
                assert_eq!(path.last(), Some(&end));
                let mut waypoints = vec![start];
                waypoints.extend(path.iter().copied());
                for (a, b) in waypoints.iter().tuple_windows() {
                    assert_ne!(a, b);
                }
                check_walkable_cells(&waypoints_to_path(&waypoints), start, &walkable, &store);
            }
        }
    }
}

#[test]
fn fuzz_raw_paths_are_king_moves() {
    const N: i32 = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let mut pathfinder = Pathfinder::with_bounds(GridBounds::new(0, 0, N - 1, N - 1).unwrap());
    for _ in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let store = random_store(N, &mut rng, 0.35, &[start, end]);
        let walkable = |x: i32, y: i32| store.can_stand(x, y);
        let Some(path) = pathfinder.find_raw_path(start, end, Some(&walkable)).unwrap() else {
            continue;
        };
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for (a, b) in path.iter().tuple_windows() {
            let (dx, dy) = ((a.x - b.x).abs(), (a.y - b.y).abs());
            assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "{:?} -> {:?}", a, b);
        }
        check_walkable_cells(&path, start, &walkable, &store);
    }
}
