use grid_util::Point;
use grid_waypoints::{
    grid_to_world, world_to_grid, CompositeWalkable, FlagStore, MapFlags, PathFollower,
    Pathfinder,
};

// Moves an agent through a doorway at a fixed frame rate, printing its position every frame.
fn main() {
    let mut store = FlagStore::new();
    store.add_region(Point::new(-1, -1), Point::new(12, 8), MapFlags::GROUND);
    store.add_region(Point::new(6, -1), Point::new(6, 8), MapFlags::WALL | MapFlags::OBSTACLE);
    store.remove_region(Point::new(6, 2), Point::new(6, 4), MapFlags::WALL | MapFlags::OBSTACLE);
    println!("{}", store);

    let mut pathfinder = Pathfinder::new();
    pathfinder.init(store.map_range().unwrap());
    let walkable = CompositeWalkable::new(&store, 0.0);

    let mut position = grid_to_world(Point::new(1, 7));
    let target = world_to_grid(10.2, 0.7);
    let start = world_to_grid(position.0, position.1);
    let path = match pathfinder.find_path(start, target, Some(&walkable)) {
        Ok(Some(path)) => path,
        Ok(None) => {
            println!("Target is unreachable");
            return;
        }
        Err(e) => {
            println!("Invalid request: {}", e);
            return;
        }
    };
    println!("Waypoints: {:?}", path);

    let mut follower = PathFollower::new(3.0);
    follower.set_path(path);
    let dt = 1.0 / 60.0;
    let mut frame = 0;
    while !follower.is_finished() {
        position = follower.advance(position, dt);
        frame += 1;
        println!("frame {frame}: ({:.2}, {:.2})", position.0, position.1);
    }
}
