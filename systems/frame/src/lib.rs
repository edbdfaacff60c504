#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame orchestration for the Corridor renderer.
//!
//! The frame driver owns the pose, the trigonometry cache, and the ray
//! table, and advances one frame at a time: movement, heading update,
//! conditional table rebuild, then one traversal and projection per screen
//! column. Adapters own the actual window and pixels; the driver only
//! produces draw directives.

use corridor_core::{
    CameraVectors, CollisionPolicy, MoveIntent, Pose, Tuning, TuningError, WallSlice,
};
use corridor_system_movement::Movement;
use corridor_system_projection::Projector;
use corridor_system_raycast::{cast, RayTable};
use corridor_system_trig::AngleTable;
use corridor_world::Grid;

/// Lifecycle state of the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The loop keeps ticking.
    Running,
    /// The close signal was observed; the adapter should release its
    /// resources and exit.
    Terminating,
}

/// External input consumed by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Movement keys held during the frame.
    pub intent: MoveIntent,
    /// Horizontal mouse travel since the previous frame.
    pub mouse_delta_x: f64,
    /// Whether the platform requested the loop to stop.
    pub close_requested: bool,
}

/// Owns the pose and the precomputed tables and advances the simulation one
/// frame at a time.
#[derive(Debug)]
pub struct FrameDriver {
    tuning: Tuning,
    pose: Pose,
    movement: Movement,
    projector: Projector,
    angles: AngleTable,
    rays: RayTable,
    vectors: CameraVectors,
    tables_heading: f64,
    status: FrameStatus,
}

impl FrameDriver {
    /// Creates a driver from validated tuning, the wall texture width
    /// reported by the rendering collaborator, a spawn pose, and the
    /// collision policy.
    pub fn new(
        tuning: Tuning,
        texture_width: u32,
        pose: Pose,
        policy: CollisionPolicy,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;

        let angles = AngleTable::new(tuning.angle_buckets);
        let heading = angles.lookup(pose.heading);
        let vectors = CameraVectors::from_heading(heading.sin, heading.cos, tuning.fov_plane_scale);
        let rays = RayTable::new(tuning.screen_width, vectors);
        let projector = Projector::new(&tuning, texture_width);

        Ok(Self {
            tuning,
            pose,
            movement: Movement::new(policy),
            projector,
            angles,
            rays,
            vectors,
            tables_heading: pose.heading,
            status: FrameStatus::Running,
        })
    }

    /// Current player pose.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> FrameStatus {
        self.status
    }

    /// Tuning the driver was constructed with.
    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advances one frame.
    ///
    /// Order per tick: resolve movement against the grid using the current
    /// heading, accumulate the turn input into the heading (unbounded; only
    /// the trig lookup wraps), rebuild the camera vectors and ray table if
    /// the heading changed, then cast and project every screen column into
    /// `slices`. The slice buffer is cleared and refilled; its length always
    /// equals the configured screen width afterwards.
    pub fn advance(
        &mut self,
        grid: &Grid,
        input: TickInput,
        slices: &mut Vec<WallSlice>,
    ) -> FrameStatus {
        if input.intent.any() {
            let displacement =
                self.movement
                    .displacement(input.intent, self.vectors.dir, self.tuning.move_speed);
            self.pose.position = self.movement.resolve(
                grid,
                self.pose.position,
                displacement,
                self.tuning.collision_radius,
            );
        }

        self.pose.heading += input.mouse_delta_x * self.tuning.turn_speed;

        if self.pose.heading != self.tables_heading {
            let heading = self.angles.lookup(self.pose.heading);
            self.vectors = CameraVectors::from_heading(
                heading.sin,
                heading.cos,
                self.tuning.fov_plane_scale,
            );
            self.rays.rebuild(self.vectors);
            self.tables_heading = self.pose.heading;
        }

        slices.clear();
        slices.reserve(self.tuning.screen_width as usize);
        for column in 0..self.tuning.screen_width {
            let ray = self.rays.ray(column);
            let hit = cast(grid, self.pose.position, ray);
            slices.push(
                self.projector
                    .project(hit, ray, self.vectors.dir, self.pose.position),
            );
        }

        if input.close_requested {
            self.status = FrameStatus::Terminating;
        }
        self.status
    }
}
