#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player movement and collision for the Corridor renderer.
//!
//! Movement is a pure system: it derives a candidate displacement from the
//! held keys and resolves it against the grid, returning the committed
//! position without touching any shared state. The collision strategy is
//! selected once at construction.

use corridor_core::{CollisionPolicy, GridPos, MoveIntent};
use corridor_world::Grid;
use glam::DVec2;

/// Pure system that turns key state into committed player positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Movement {
    policy: CollisionPolicy,
}

impl Movement {
    /// Creates a movement system with the provided collision policy.
    #[must_use]
    pub const fn new(policy: CollisionPolicy) -> Self {
        Self { policy }
    }

    /// The collision policy this system resolves with.
    #[must_use]
    pub const fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Candidate displacement for one frame of held keys.
    ///
    /// Forward/back contribute `±dir · speed` and the strafe keys
    /// `±perp(dir) · speed`; active keys sum. Diagonals are deliberately
    /// not normalized, so moving on two axes at once is faster.
    #[must_use]
    pub fn displacement(&self, intent: MoveIntent, dir: DVec2, speed: f64) -> DVec2 {
        let mut displacement = DVec2::ZERO;
        if intent.forward {
            displacement += dir * speed;
        }
        if intent.back {
            displacement -= dir * speed;
        }
        if intent.strafe_left {
            displacement += DVec2::new(dir.y, -dir.x) * speed;
        }
        if intent.strafe_right {
            displacement += DVec2::new(-dir.y, dir.x) * speed;
        }
        displacement
    }

    /// Resolves a displacement against the grid and returns the committed
    /// position.
    ///
    /// Split-axis: each axis is probed independently with the probe point
    /// pushed `radius` further along that axis's direction of travel, and
    /// whichever axis passes is committed — rejecting one axis while
    /// committing the other produces wall-sliding. The Y probe reads the
    /// already-committed X column. Combined-axis: the single destination
    /// cell of the full displacement is probed without inflation and both
    /// axes commit together or not at all.
    #[must_use]
    pub fn resolve(
        &self,
        grid: &Grid,
        position: DVec2,
        displacement: DVec2,
        radius: f64,
    ) -> DVec2 {
        let target = position + displacement;
        match self.policy {
            CollisionPolicy::SplitAxis => {
                let mut committed = position;

                let probe_x = target.x + axis_sign(displacement.x) * radius;
                if !blocked(grid, probe_x, position.y) {
                    committed.x = target.x;
                }

                let probe_y = target.y + axis_sign(displacement.y) * radius;
                if !blocked(grid, committed.x, probe_y) {
                    committed.y = target.y;
                }

                committed
            }
            CollisionPolicy::CombinedAxis => {
                if blocked(grid, target.x, target.y) {
                    position
                } else {
                    target
                }
            }
        }
    }
}

/// Sign of a displacement component with zero preserved, so an idle axis
/// does not inflate its own probe.
fn axis_sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Whether the cell containing `(x, y)` blocks movement.
///
/// Coordinates that floor below zero cannot be represented as a cell index
/// and count as blocked; the solid border makes them unreachable anyway.
fn blocked(grid: &Grid, x: f64, y: f64) -> bool {
    let column = x.floor();
    let row = y.floor();
    if column < 0.0 || row < 0.0 {
        return true;
    }
    grid.is_wall(GridPos::new(column as u32, row as u32))
}
