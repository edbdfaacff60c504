#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Corridor renderer.
//!
//! This crate defines the vocabulary that connects the world, the pure
//! rendering systems, and the adapters: grid coordinates and cell states,
//! the player pose, the immutable per-column traversal result, the
//! per-column draw directive, and the tuning parameters that configure the
//! engine. Systems consume these values and respond exclusively with new
//! immutable records; no ambient state crosses a crate boundary.

use std::{error::Error, fmt};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Traversable floor; rays pass through and the player may occupy it.
    Open,
    /// Solid wall; terminates ray traversal and blocks movement.
    Wall,
}

/// Location of a single grid cell expressed as column and row indices.
///
/// The grid is indexed `[row][column]`, matching the `[y][x]` convention of
/// the traversal math: a cell's column is its integer X coordinate and its
/// row is its integer Y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    column: u32,
    row: u32,
}

impl GridPos {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column (X) index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row (Y) index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Which grid axis a ray crossed last before striking a wall.
///
/// Determines which wall face is visible: crossing an X grid line exposes a
/// vertical, X-facing face; crossing a Y grid line exposes a horizontal,
/// Y-facing face. Projection selects its distance and texture formulas by
/// this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The ray last stepped along the X axis.
    X,
    /// The ray last stepped along the Y axis.
    Y,
}

/// Immutable result of tracing one ray through the grid.
///
/// Produced by the traversal system and consumed by projection; carries no
/// hidden traversal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// The first wall cell struck by the ray.
    pub cell: GridPos,
    /// Axis crossed on the final step, selecting the struck wall face.
    pub side: Side,
    /// Direction the traversal stepped along X: `-1` or `+1`.
    pub step_x: i8,
    /// Direction the traversal stepped along Y: `-1` or `+1`.
    pub step_y: i8,
    /// Perpendicular distance from the player to the struck wall face,
    /// measured from the wall edge rather than the accumulated ray
    /// parameter, which keeps walls straight across the viewport.
    pub perp_distance: f64,
}

/// Continuous player pose within the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Position in grid units; the integer parts identify the occupied cell.
    pub position: DVec2,
    /// Heading in radians. Accumulates without bound as the player turns;
    /// wrapping into `[0, 2π)` happens only at trigonometry lookup.
    pub heading: f64,
}

impl Pose {
    /// Creates a pose from a position and an initial heading.
    #[must_use]
    pub const fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }
}

/// Snapshot of the movement keys held during one frame.
///
/// Keys are independent rather than mutually exclusive: opposing keys cancel
/// and orthogonal keys sum into diagonal motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Move along the heading vector.
    pub forward: bool,
    /// Move against the heading vector.
    pub back: bool,
    /// Strafe to the left of the heading vector.
    pub strafe_left: bool,
    /// Strafe to the right of the heading vector.
    pub strafe_right: bool,
}

impl MoveIntent {
    /// Reports whether any movement key is held.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.forward || self.back || self.strafe_left || self.strafe_right
    }
}

/// Strategy used to resolve candidate displacements against the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionPolicy {
    /// Test the X and Y components independently, each inflated by the
    /// collision radius along its direction of travel, committing whichever
    /// axis passes. Rejecting one axis while committing the other lets the
    /// player slide along walls.
    #[default]
    SplitAxis,
    /// Test the single destination cell of the full displacement and commit
    /// both axes together only when that cell is open.
    CombinedAxis,
}

/// Draw directive for one screen column.
///
/// The rendering adapter fills the ceiling color above `draw_start`, the
/// floor color below `draw_end`, and stretches column `tex_column` of the
/// wall texture over `[draw_start, draw_end]` tinted by `shade`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlice {
    /// First screen row covered by the wall, clamped to the viewport.
    pub draw_start: u32,
    /// Last screen row covered by the wall, clamped to the viewport.
    pub draw_end: u32,
    /// Texture column sampled for this screen column.
    pub tex_column: u32,
    /// Grayscale tint applied uniformly to the sampled texels; 255 is
    /// unattenuated.
    pub shade: u8,
}

/// Engine tuning parameters.
///
/// Fixed for the lifetime of a frame driver; the command-line adapter may
/// override the defaults from a TOML file before startup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Rendered viewport width in columns.
    pub screen_width: u32,
    /// Rendered viewport height in rows.
    pub screen_height: u32,
    /// Number of discretized buckets in the sine/cosine tables.
    pub angle_buckets: u32,
    /// Length of the camera plane vector; 0.66 yields roughly a 66° FOV.
    pub fov_plane_scale: f64,
    /// Distance travelled per frame while a movement key is held.
    pub move_speed: f64,
    /// Heading change in radians per unit of horizontal mouse travel.
    pub turn_speed: f64,
    /// Light falloff constant sigma; brightness decays as `exp(-t / sigma)`.
    pub light_falloff: f64,
    /// Radius by which movement probes are inflated toward walls.
    pub collision_radius: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            angle_buckets: 3600,
            fov_plane_scale: 0.66,
            move_speed: 0.1,
            turn_speed: 0.003,
            light_falloff: 8.0,
            collision_radius: 0.2,
        }
    }
}

impl Tuning {
    /// Validates the tuning parameters.
    ///
    /// Zero-sized viewports, empty angle tables, and non-positive falloff
    /// constants would poison downstream divisions, so they are rejected
    /// before the engine is constructed.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(TuningError::EmptyViewport {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.angle_buckets == 0 {
            return Err(TuningError::NoAngleBuckets);
        }
        if self.light_falloff <= 0.0 {
            return Err(TuningError::NonPositiveFalloff {
                sigma: self.light_falloff,
            });
        }
        if self.collision_radius < 0.0 {
            return Err(TuningError::NegativeCollisionRadius {
                radius: self.collision_radius,
            });
        }
        Ok(())
    }
}

/// Reasons a [`Tuning`] value may be rejected.
#[derive(Debug, PartialEq)]
pub enum TuningError {
    /// The viewport has no columns or no rows to render into.
    EmptyViewport {
        /// Configured viewport width.
        width: u32,
        /// Configured viewport height.
        height: u32,
    },
    /// The trigonometry table would hold no entries.
    NoAngleBuckets,
    /// The light falloff constant must be positive to keep `exp(-t / sigma)`
    /// meaningful.
    NonPositiveFalloff {
        /// Configured falloff constant.
        sigma: f64,
    },
    /// The collision radius cannot be negative.
    NegativeCollisionRadius {
        /// Configured collision radius.
        radius: f64,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport { width, height } => {
                write!(f, "viewport must be non-empty (received {width}x{height})")
            }
            Self::NoAngleBuckets => write!(f, "angle table requires at least one bucket"),
            Self::NonPositiveFalloff { sigma } => {
                write!(f, "light falloff must be positive (received {sigma})")
            }
            Self::NegativeCollisionRadius { radius } => {
                write!(f, "collision radius cannot be negative (received {radius})")
            }
        }
    }
}

impl Error for TuningError {}

/// Unit heading vector paired with its perpendicular camera plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraVectors {
    /// Unit-length view direction derived from the pose heading.
    pub dir: DVec2,
    /// Camera plane perpendicular to `dir`, scaled by the FOV plane factor.
    pub plane: DVec2,
}

impl CameraVectors {
    /// Derives the direction/plane pair from a heading's sine and cosine.
    ///
    /// The plane is the direction rotated a quarter turn and scaled, so the
    /// leftmost screen column looks along `dir - plane` and the rightmost
    /// along `dir + plane`.
    #[must_use]
    pub fn from_heading(sin: f64, cos: f64, plane_scale: f64) -> Self {
        let dir = DVec2::new(cos, sin);
        let plane = DVec2::new(-sin * plane_scale, cos * plane_scale);
        Self { dir, plane }
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraVectors, CellState, GridPos, MoveIntent, Tuning, TuningError};

    #[test]
    fn tuning_round_trips_through_bincode() {
        let tuning = Tuning::default();
        let bytes = bincode::serialize(&tuning).expect("serialize");
        let restored: Tuning = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, tuning);
    }

    #[test]
    fn default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn tuning_rejects_empty_viewport() {
        let tuning = Tuning {
            screen_width: 0,
            ..Tuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::EmptyViewport {
                width: 0,
                height: 720,
            })
        );
    }

    #[test]
    fn tuning_rejects_non_positive_falloff() {
        let tuning = Tuning {
            light_falloff: 0.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositiveFalloff { .. })
        ));
    }

    #[test]
    fn grid_pos_exposes_axes() {
        let pos = GridPos::new(9, 8);
        assert_eq!(pos.column(), 9);
        assert_eq!(pos.row(), 8);
    }

    #[test]
    fn move_intent_reports_activity() {
        assert!(!MoveIntent::default().any());
        let intent = MoveIntent {
            strafe_left: true,
            ..MoveIntent::default()
        };
        assert!(intent.any());
    }

    #[test]
    fn camera_vectors_stay_perpendicular() {
        let vectors = CameraVectors::from_heading(0.6, 0.8, 0.66);
        assert!(vectors.dir.dot(vectors.plane).abs() < 1e-12);
        assert!((vectors.plane.length() - 0.66).abs() < 1e-12);
    }

    #[test]
    fn cell_states_are_distinct() {
        assert_ne!(CellState::Open, CellState::Wall);
    }
}
