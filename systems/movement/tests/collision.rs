use corridor_core::{CollisionPolicy, MoveIntent};
use corridor_system_movement::Movement;
use corridor_world::{arenas, Grid};
use glam::DVec2;

const RADIUS: f64 = 0.2;

fn bordered_16x16() -> Grid {
    arenas::arena16()
}

#[test]
fn oversized_displacement_into_a_wall_is_rejected() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::SplitAxis);
    // Standing just inside the border wall at column 15 and pushing east by
    // more than the remaining open distance.
    let position = DVec2::new(14.5, 8.5);
    let committed = movement.resolve(&grid, position, DVec2::new(0.5, 0.0), RADIUS);

    assert_eq!(committed.x, position.x);
    assert_eq!(committed.y, position.y);
}

#[test]
fn sliding_along_a_wall_commits_the_parallel_axis() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::SplitAxis);
    // Diagonal push into the east border: X is rejected, Y still commits.
    let position = DVec2::new(14.7, 8.5);
    let committed = movement.resolve(&grid, position, DVec2::new(0.2, 0.1), RADIUS);

    assert_eq!(committed.x, position.x);
    assert!((committed.y - 8.6).abs() < 1e-12);
}

#[test]
fn combined_policy_rejects_the_whole_diagonal() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::CombinedAxis);
    // The full displacement lands inside the border wall, so neither axis
    // moves.
    let position = DVec2::new(14.7, 8.5);
    let committed = movement.resolve(&grid, position, DVec2::new(0.5, 0.1), RADIUS);

    assert_eq!(committed, position);
}

#[test]
fn combined_policy_commits_open_destinations() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::CombinedAxis);
    let position = DVec2::new(8.5, 8.5);
    let committed = movement.resolve(&grid, position, DVec2::new(0.1, 0.1), RADIUS);

    assert_eq!(committed, DVec2::new(8.6, 8.6));
}

#[test]
fn open_floor_commits_both_axes_under_split_axis() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::SplitAxis);
    let position = DVec2::new(8.5, 8.5);
    let committed = movement.resolve(&grid, position, DVec2::new(0.1, -0.1), RADIUS);

    assert!((committed.x - 8.6).abs() < 1e-12);
    assert!((committed.y - 8.4).abs() < 1e-12);
}

#[test]
fn full_frame_of_input_resolves_through_displacement() {
    let grid = bordered_16x16();
    let movement = Movement::new(CollisionPolicy::SplitAxis);
    let intent = MoveIntent {
        forward: true,
        ..MoveIntent::default()
    };
    let dir = DVec2::new(1.0, 0.0);
    let displacement = movement.displacement(intent, dir, 0.1);
    let committed = movement.resolve(&grid, DVec2::new(8.5, 8.5), displacement, RADIUS);

    assert!((committed.x - 8.6).abs() < 1e-12);
    assert_eq!(committed.y, 8.5);
}
