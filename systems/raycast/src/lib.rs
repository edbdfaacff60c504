#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Ray generation and grid traversal for the Corridor renderer.
//!
//! One ray direction is precomputed per screen column from the camera
//! direction and plane; traversal walks the grid cell by cell with a DDA
//! until it strikes a wall and returns an immutable [`RayHit`] record.

use corridor_core::{CameraVectors, GridPos, RayHit, Side};
use corridor_world::Grid;
use glam::DVec2;

/// Per-column ray directions spanning the camera plane.
///
/// Entry `x` equals `dir + plane * cameraX(x)` where `cameraX` maps column 0
/// to −1 and the last column to +1. The table is rebuilt in full whenever
/// the heading changes; there are no partial updates.
#[derive(Clone, Debug)]
pub struct RayTable {
    rays: Vec<DVec2>,
}

impl RayTable {
    /// Creates a table for `width` screen columns, initialized from the
    /// provided camera vectors.
    #[must_use]
    pub fn new(width: u32, vectors: CameraVectors) -> Self {
        let mut table = Self {
            rays: vec![DVec2::ZERO; width as usize],
        };
        table.rebuild(vectors);
        table
    }

    /// Overwrites every entry from the camera direction and plane.
    ///
    /// O(width); called once at startup and again on every frame whose
    /// turning input changed the heading.
    pub fn rebuild(&mut self, vectors: CameraVectors) {
        let width = self.rays.len();
        for (x, ray) in self.rays.iter_mut().enumerate() {
            let camera_x = 2.0 * x as f64 / width as f64 - 1.0;
            *ray = vectors.dir + vectors.plane * camera_x;
        }
    }

    /// Number of screen columns covered by the table.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.rays.len() as u32
    }

    /// Ray direction for the addressed screen column.
    #[must_use]
    pub fn ray(&self, column: u32) -> DVec2 {
        self.rays[column as usize]
    }
}

/// Walks the grid from `origin` along `ray` until a wall cell is struck.
///
/// The exact DDA: the ray-parameter cost of crossing one cell is
/// `|1 / ray|` per axis (a zero component yields infinity, which simply
/// keeps that axis from ever being the limiting one); each iteration
/// advances whichever accumulated side distance is smaller and records the
/// crossed axis. Ties advance Y, matching the strict `<` comparison — the
/// deliberate tie-break for rays aimed exactly at a cell corner.
///
/// The returned perpendicular distance is recomputed from the struck cell
/// edge rather than the accumulated side distance, which is biased one step
/// ahead; using the edge keeps walls straight across the viewport.
///
/// # Panics
///
/// Panics if the traversal fails to strike a wall within `columns + rows`
/// steps. The solid border enforced at grid construction makes this
/// unreachable; exceeding it means the map invariant was broken.
#[must_use]
pub fn cast(grid: &Grid, origin: DVec2, ray: DVec2) -> RayHit {
    let mut map_x = origin.x.floor() as i64;
    let mut map_y = origin.y.floor() as i64;

    let delta_dist_x = (1.0 / ray.x).abs();
    let delta_dist_y = (1.0 / ray.y).abs();

    let (step_x, mut side_dist_x) = if ray.x < 0.0 {
        (-1_i64, (origin.x - map_x as f64) * delta_dist_x)
    } else {
        (1_i64, (map_x as f64 + 1.0 - origin.x) * delta_dist_x)
    };
    let (step_y, mut side_dist_y) = if ray.y < 0.0 {
        (-1_i64, (origin.y - map_y as f64) * delta_dist_y)
    } else {
        (1_i64, (map_y as f64 + 1.0 - origin.y) * delta_dist_y)
    };

    let step_cap = grid.columns() as u64 + grid.rows() as u64;
    let mut side = Side::Y;

    for _ in 0..step_cap {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            side = Side::Y;
        }

        let cell = GridPos::new(map_x as u32, map_y as u32);
        if grid.is_wall(cell) {
            let perp_distance = match side {
                Side::X => {
                    let edge = if step_x == 1 { map_x } else { map_x + 1 } as f64;
                    (edge - origin.x) / ray.x
                }
                Side::Y => {
                    let edge = if step_y == 1 { map_y } else { map_y + 1 } as f64;
                    (edge - origin.y) / ray.y
                }
            };
            return RayHit {
                cell,
                side,
                step_x: step_x as i8,
                step_y: step_y as i8,
                perp_distance,
            };
        }
    }

    panic!(
        "ray from ({}, {}) escaped a {}x{} grid; the solid border invariant was broken",
        origin.x,
        origin.y,
        grid.columns(),
        grid.rows()
    );
}
