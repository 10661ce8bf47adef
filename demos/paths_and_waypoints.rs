use grid_util::Point;
use grid_waypoints::{waypoints_to_path, FlagStore, GridBounds, MapFlags, Pathfinder};

/// This example illustrates the type of output [Pathfinder::find_path] gives. It is a minimal
/// representation that can be expanded using [waypoints_to_path].
/// A path is found on a 5x5 map with shape
/// ....E
/// .....
/// .....
/// .#...
/// S....
/// where
/// - S marks the start
/// - E marks the end
fn main() {
    let mut store = FlagStore::new();
    store.add_region(Point::new(0, 0), Point::new(4, 4), MapFlags::GROUND);
    store.add_flag(1, 1, MapFlags::OBSTACLE);
    println!("{}", store);
    let walkable = |x: i32, y: i32| store.can_stand(x, y);
    let mut pathfinder = Pathfinder::with_bounds(GridBounds::new(0, 0, 4, 4).unwrap());
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    if let Ok(Some(path)) = pathfinder.find_raw_path(start, end, Some(&walkable)) {
        println!("Raw path:");
        for p in &path {
            println!("{:?}", p);
        }
    }
    if let Ok(Some(waypoints)) = pathfinder.find_path(start, end, Some(&walkable)) {
        println!("Waypoints:");
        for p in &waypoints {
            println!("{:?}", p);
        }
        // The start cell was trimmed from the waypoints, put it back before expanding.
        let mut full = vec![start];
        full.extend(waypoints);
        println!("Expanded path:");
        println!("{:?}", waypoints_to_path(&full));
    }
}
