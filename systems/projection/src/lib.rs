#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Projection and shading for the Corridor renderer.
//!
//! Converts one traversal hit into a per-column draw directive: a
//! perspective wall span on screen, the texture column to sample, and a
//! grayscale tint that decays exponentially with distance.

use corridor_core::{RayHit, Side, Tuning, WallSlice};
use glam::DVec2;

/// Distances below this are treated as this value to keep the projection
/// division finite when the player stands against a wall.
const MIN_DISTANCE: f64 = 0.01;

/// Pure projection stage configured once per frame driver.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    screen_height: u32,
    texture_width: u32,
    collision_radius: f64,
    light_falloff: f64,
}

impl Projector {
    /// Creates a projector from the engine tuning and the wall texture
    /// width reported by the rendering collaborator.
    #[must_use]
    pub fn new(tuning: &Tuning, texture_width: u32) -> Self {
        Self {
            screen_height: tuning.screen_height,
            texture_width,
            collision_radius: tuning.collision_radius,
            light_falloff: tuning.light_falloff,
        }
    }

    /// Projects one ray hit into a draw directive.
    ///
    /// The screen-space span uses a refined distance: the collision radius
    /// is subtracted (walls the player can touch fill the viewport instead
    /// of leaving a sliver of ceiling), the result is floored at
    /// [`MIN_DISTANCE`], and the span distance is projected onto the view
    /// axis through `cos = dir · ray`. The texture coordinate and the shade
    /// both use the unrefined perpendicular distance.
    #[must_use]
    pub fn project(&self, hit: RayHit, ray: DVec2, dir: DVec2, position: DVec2) -> WallSlice {
        let t = hit.perp_distance;

        let effective = (t - self.collision_radius).max(MIN_DISTANCE);
        let cos_a = dir.dot(ray);
        let span_distance = (effective * cos_a).max(MIN_DISTANCE);

        let (draw_start, draw_end) = wall_span(span_distance, self.screen_height);
        let tex_column = texture_column(hit, ray, position, self.texture_width);
        let shade = shade(t, self.light_falloff);

        WallSlice {
            draw_start,
            draw_end,
            tex_column,
            shade,
        }
    }
}

/// Screen-space rows covered by a wall at perpendicular distance `t`.
///
/// Line height is `screen_height / t`; the span is centered on the horizon
/// and clamped to `[0, screen_height)`.
#[must_use]
pub fn wall_span(t: f64, screen_height: u32) -> (u32, u32) {
    let height = i64::from(screen_height);
    let line_height = (screen_height as f64 / t) as i64;
    let start = (height / 2 - line_height / 2).max(0);
    let end = (height / 2 + line_height / 2).min(height - 1);
    (start as u32, end as u32)
}

/// Texture column struck by the ray.
///
/// The fractional wall-intersection coordinate runs along the struck face:
/// the Y world coordinate for an X-facing wall and the X coordinate for a
/// Y-facing wall. Faces viewed from the far side are mirrored so the
/// texture reads consistently around corners.
#[must_use]
pub fn texture_column(hit: RayHit, ray: DVec2, position: DVec2, texture_width: u32) -> u32 {
    let t = hit.perp_distance;
    let wall_coord = match hit.side {
        Side::X => position.y + t * ray.y,
        Side::Y => position.x + t * ray.x,
    };
    let wall_fraction = wall_coord - wall_coord.floor();

    let raw = (wall_fraction * f64::from(texture_width)) as u32;
    let raw = raw.min(texture_width - 1);

    let mirrored = match hit.side {
        Side::X => ray.x > 0.0,
        Side::Y => ray.y < 0.0,
    };
    if mirrored {
        texture_width - raw - 1
    } else {
        raw
    }
}

/// Grayscale tint for a wall at perpendicular distance `t`.
///
/// Brightness is `exp(-t / sigma)`: 1.0 at the camera, strictly decreasing,
/// approaching zero with distance.
#[must_use]
pub fn shade(t: f64, sigma: f64) -> u8 {
    let brightness = (-t / sigma).exp();
    (brightness * 255.0).round().clamp(0.0, 255.0) as u8
}
