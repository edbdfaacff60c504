use corridor_core::{GridPos, Side};
use corridor_system_raycast::cast;
use corridor_world::{arenas, Grid};
use glam::DVec2;

fn enclosed_3x3() -> Grid {
    Grid::from_ascii(&["###", "#.#", "###"]).expect("valid grid")
}

#[test]
fn enclosed_grid_hits_an_adjacent_wall_for_any_direction() {
    let grid = enclosed_3x3();
    let origin = DVec2::new(1.5, 1.5);

    for i in 0..360 {
        let angle = f64::from(i).to_radians();
        let ray = DVec2::new(angle.cos(), angle.sin());
        let hit = cast(&grid, origin, ray);

        // Only the eight border cells are reachable from the center cell.
        let dx = i64::from(hit.cell.column()) - 1;
        let dy = i64::from(hit.cell.row()) - 1;
        assert!(dx.abs() <= 1 && dy.abs() <= 1);
        assert!(dx != 0 || dy != 0, "hit must leave the origin cell");
        assert!(hit.perp_distance > 0.0);
    }
}

#[test]
fn axis_aligned_ray_reports_the_x_face() {
    let grid = enclosed_3x3();
    let hit = cast(&grid, DVec2::new(1.5, 1.5), DVec2::new(1.0, 0.0));

    assert_eq!(hit.cell, GridPos::new(2, 1));
    assert_eq!(hit.side, Side::X);
    assert_eq!(hit.step_x, 1);
    assert!((hit.perp_distance - 0.5).abs() < 1e-12);
}

#[test]
fn zero_direction_component_never_limits_the_traversal() {
    let grid = enclosed_3x3();
    // Straight down: the X component is zero, so its delta is infinite and
    // every step advances Y.
    let hit = cast(&grid, DVec2::new(1.5, 1.5), DVec2::new(0.0, 1.0));

    assert_eq!(hit.cell, GridPos::new(1, 2));
    assert_eq!(hit.side, Side::Y);
    assert!((hit.perp_distance - 0.5).abs() < 1e-12);
}

#[test]
fn diagonal_corner_tie_breaks_toward_y() {
    let grid = Grid::from_ascii(&["####", "#..#", "#..#", "####"]).expect("valid grid");
    // Aimed exactly at the corner shared by (2, 2), (1, 2) and (2, 1): the
    // initial side distances tie, so the first advance crosses a Y line.
    let ray = DVec2::new(std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2);
    let hit = cast(&grid, DVec2::new(1.5, 1.5), ray);

    assert_eq!(hit.side, Side::Y);
    assert_eq!(hit.cell, GridPos::new(2, 3));
}

#[test]
fn sample_arena_corridor_hits_the_expected_cell() {
    let grid = arenas::arena32();
    let hit = cast(&grid, DVec2::new(8.5, 8.5), DVec2::new(1.0, 0.0));

    assert_eq!(hit.cell, GridPos::new(9, 8));
    assert_eq!(hit.side, Side::X);
    assert!((hit.perp_distance - 0.5).abs() < 1e-12);
}

#[test]
fn west_facing_ray_measures_from_the_east_edge() {
    let grid = enclosed_3x3();
    let hit = cast(&grid, DVec2::new(1.25, 1.5), DVec2::new(-1.0, 0.0));

    assert_eq!(hit.cell, GridPos::new(0, 1));
    assert_eq!(hit.step_x, -1);
    // Wall face is the east edge of cell 0 at x = 1.
    assert!((hit.perp_distance - 0.25).abs() < 1e-12);
}
