use grid_util::Point;
use grid_waypoints::{CompositeWalkable, FlagStore, MapFlags, Pathfinder};

// In this example a path is found on a map with shape
// .......
// .S.#...
// ...#...
// ...#.E.
// .......
// S marks the start
// E marks the end
fn main() {
    let mut store = FlagStore::new();
    store.add_region(Point::new(0, 0), Point::new(6, 4), MapFlags::GROUND);
    store.add_region(Point::new(3, 1), Point::new(3, 3), MapFlags::OBSTACLE);
    println!("{}", store);

    let mut pathfinder = Pathfinder::new();
    pathfinder.init(store.map_range().unwrap());
    let walkable = |x: i32, y: i32| store.can_stand(x, y);
    let start = Point::new(1, 3);
    let end = Point::new(5, 1);
    match pathfinder.find_path(start, end, Some(&walkable)) {
        Ok(Some(path)) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(None) => println!("No path from {:?} to {:?}", start, end),
        Err(e) => println!("Invalid request: {}", e),
    }
    // A wider agent needs a free cell around it, which this small map does not offer.
    let wide = CompositeWalkable::new(&store, 0.5);
    println!("{:?}", pathfinder.find_path(start, end, Some(&wide)));
}
