#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Corridor adapters.
//!
//! The engine core never touches a window, a texture, or a pixel. Adapters
//! gather a [`FrameInput`] snapshot once per frame, hand it to the
//! simulation closure, and composite the resulting [`Scene`] of per-column
//! draw directives. Everything a backend needs to do that is defined here.

use anyhow::Result as AnyResult;
use corridor_core::WallSlice;
use glam::Vec2;
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates an opaque gray from a single byte intensity.
    ///
    /// This is the uniform tint applied to wall strips: the shading stage
    /// emits a grayscale byte per column and the backend multiplies the
    /// texture through it.
    #[must_use]
    pub const fn from_gray_u8(level: u8) -> Self {
        Self::from_rgb_u8(level, level, level)
    }
}

/// Input snapshot gathered by the adapter once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Forward movement key held.
    pub move_forward: bool,
    /// Backward movement key held.
    pub move_back: bool,
    /// Left strafe key held.
    pub strafe_left: bool,
    /// Right strafe key held.
    pub strafe_right: bool,
    /// Mouse travel since the previous frame in screen pixels; only the X
    /// component turns the camera.
    pub mouse_delta: Vec2,
    /// Whether the platform asked the application to close.
    pub close_requested: bool,
}

/// Dimensions of the rendered viewport in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Number of pixel columns.
    pub width: u32,
    /// Number of pixel rows.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport descriptor.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scene description consumed by rendering backends.
///
/// One [`WallSlice`] per viewport column; the backend fills `ceiling` above
/// each slice, `floor` below it, and stretches the tinted texture column
/// over the span itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Viewport the columns were projected for.
    pub viewport: Viewport,
    /// Fill color above each wall span.
    pub ceiling: Color,
    /// Fill color below each wall span.
    pub floor: Color,
    /// Per-column draw directives, exactly `viewport.width` entries.
    pub columns: Vec<WallSlice>,
}

impl Scene {
    /// Creates a scene, checking that the column count matches the
    /// viewport.
    pub fn new(
        viewport: Viewport,
        ceiling: Color,
        floor: Color,
        columns: Vec<WallSlice>,
    ) -> Result<Self, RenderingError> {
        if columns.len() != viewport.width as usize {
            return Err(RenderingError::ColumnCountMismatch {
                expected: viewport.width,
                found: columns.len(),
            });
        }
        Ok(Self {
            viewport,
            ceiling,
            floor,
            columns,
        })
    }
}

/// Where the wall texture's texels come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextureSource {
    /// Load an image file from disk; the backend decodes it.
    Path(String),
    /// Raw RGBA8 texels supplied in memory, row-major.
    Rgba(Vec<u8>),
}

/// Wall texture descriptor carried by the presentation.
///
/// The declared dimensions are authoritative: the engine derives texture
/// columns from `width`, and the backend must refuse to start if the loaded
/// image disagrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallTextureSpec {
    /// Texture width in texels.
    pub width: u32,
    /// Texture height in texels.
    pub height: u32,
    /// Source of the texel data.
    pub source: TextureSource,
}

impl WallTextureSpec {
    /// Describes a texture loaded from an image file.
    #[must_use]
    pub fn from_path<T>(path: T, width: u32, height: u32) -> Self
    where
        T: Into<String>,
    {
        Self {
            width,
            height,
            source: TextureSource::Path(path.into()),
        }
    }

    /// Describes a texture from raw RGBA8 texels, checking the byte count
    /// against the declared dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RenderingError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderingError::TextureSizeMismatch {
                width,
                height,
                bytes: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            source: TextureSource::Rgba(pixels),
        })
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Wall texture sampled by every column strip.
    pub wall_texture: WallTextureSpec,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(
        window_title: T,
        clear_color: Color,
        wall_texture: WallTextureSpec,
        scene: Scene,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            wall_texture,
            scene,
        }
    }
}

/// Whether the backend should keep running after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Present the frame and continue.
    Continue,
    /// Present the frame, release resources, and exit.
    Exit,
}

/// Rendering backend capable of presenting Corridor scenes.
pub trait RenderingBackend {
    /// Runs the backend until the simulation requests an exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// input snapshot gathered by the adapter, and may mutate the scene
    /// before it is composited. Returning [`LoopControl::Exit`] ends the
    /// loop; the backend then releases the window and texture.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> LoopControl + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// The scene's column count does not cover the viewport.
    ColumnCountMismatch {
        /// Columns required by the viewport.
        expected: u32,
        /// Columns actually supplied.
        found: usize,
    },
    /// The supplied texel buffer does not match the declared dimensions.
    TextureSizeMismatch {
        /// Declared texture width.
        width: u32,
        /// Declared texture height.
        height: u32,
        /// Byte count actually supplied.
        bytes: usize,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnCountMismatch { expected, found } => {
                write!(f, "scene holds {found} columns, viewport needs {expected}")
            }
            Self::TextureSizeMismatch {
                width,
                height,
                bytes,
            } => {
                write!(
                    f,
                    "texture of {width}x{height} needs {} bytes, received {bytes}",
                    *width as usize * *height as usize * 4
                )
            }
        }
    }
}

impl Error for RenderingError {}
