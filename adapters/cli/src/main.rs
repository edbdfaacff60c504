#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Corridor renderer.
//!
//! Selects a map and collision policy, applies optional tuning overrides
//! from TOML, prepares the wall texture, and wires the frame driver to the
//! macroquad rendering backend. All startup failures surface here, before
//! any window opens.

mod maps;
mod texture;

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use corridor_core::{CollisionPolicy, MoveIntent, Pose, Tuning};
use corridor_rendering::{
    Color, LoopControl, Presentation, RenderingBackend, Scene, Viewport, WallTextureSpec,
};
use corridor_rendering_macroquad::MacroquadBackend;
use corridor_system_frame::{FrameDriver, FrameStatus, TickInput};
use corridor_world::arenas;
use glam::DVec2;

const WINDOW_TITLE: &str = "Corridor";
const CEILING_COLOR: Color = Color::from_rgb_u8(15, 15, 15);
const FLOOR_COLOR: Color = Color::from_rgb_u8(25, 25, 25);
const CLEAR_COLOR: Color = Color::from_rgb_u8(0, 0, 0);

/// Built-in arenas selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ArenaChoice {
    /// The 32x32 corridors-and-rooms arena.
    Large,
    /// The 16x16 pillared arena.
    Small,
}

/// Collision policies selectable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum PolicyChoice {
    /// Per-axis tests with a collision radius; slides along walls.
    #[default]
    Split,
    /// Single destination-cell test; the whole displacement commits or none
    /// of it does.
    Combined,
}

impl From<PolicyChoice> for CollisionPolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Split => CollisionPolicy::SplitAxis,
            PolicyChoice::Combined => CollisionPolicy::CombinedAxis,
        }
    }
}

/// First-person raycasting renderer over a tile grid.
#[derive(Debug, Parser)]
#[command(name = "corridor", version)]
struct Args {
    /// Built-in arena to load when no --map file is provided.
    #[arg(long, value_enum, default_value = "large")]
    arena: ArenaChoice,

    /// ASCII map file: '#' cells are walls, anything else is open floor.
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Collision resolution policy.
    #[arg(long, value_enum, default_value = "split")]
    collision: PolicyChoice,

    /// TOML file with engine tuning overrides.
    #[arg(long, value_name = "FILE")]
    tuning: Option<PathBuf>,

    /// Image file used as the wall texture instead of the generated stone.
    #[arg(long, value_name = "FILE")]
    texture: Option<PathBuf>,

    /// Declared dimensions of the --texture image, e.g. 64x64.
    #[arg(long, value_name = "WxH", default_value = "64x64", value_parser = parse_dimensions)]
    texture_size: (u32, u32),

    /// Print frame timing metrics once per second.
    #[arg(long)]
    show_fps: bool,

    /// Render as fast as possible instead of synchronising with the display.
    #[arg(long)]
    no_vsync: bool,

    /// Leave the cursor visible instead of grabbing it for mouse-look.
    #[arg(long)]
    no_cursor_grab: bool,
}

fn parse_dimensions(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("could not parse dimensions '{value}'"))?;
    let width = width
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("could not parse dimensions '{value}'"))?;
    let height = height
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("could not parse dimensions '{value}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("dimensions '{value}' must be positive"));
    }
    Ok((width, height))
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    let tuning: Tuning = toml::from_str(&contents)
        .with_context(|| format!("tuning file {} is invalid", path.display()))?;
    Ok(tuning)
}

/// Entry point for the Corridor command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let tuning = load_tuning(args.tuning.as_ref())?;
    tuning.validate()?;

    let (grid, spawn) = match &args.map {
        Some(path) => {
            let grid = maps::load_ascii_map(path)?;
            let Some(spawn) = maps::spawn_for(&grid) else {
                bail!("map file {} contains no open cells", path.display());
            };
            (grid, spawn)
        }
        None => {
            let grid = match args.arena {
                ArenaChoice::Large => arenas::arena32(),
                ArenaChoice::Small => arenas::arena16(),
            };
            (grid, DVec2::new(8.5, 8.5))
        }
    };

    let wall_texture = match &args.texture {
        Some(path) => {
            let (width, height) = args.texture_size;
            WallTextureSpec::from_path(path.to_string_lossy(), width, height)
        }
        None => {
            let size = texture::GENERATED_TEXTURE_SIZE;
            WallTextureSpec::from_rgba(size, size, texture::mossy_wall(size, size))?
        }
    };

    let pose = Pose::new(spawn, 0.0);
    let mut driver = FrameDriver::new(tuning, wall_texture.width, pose, args.collision.into())?;

    // Render the first frame up front so the scene starts with one valid
    // slice per column.
    let mut slices = Vec::new();
    let _ = driver.advance(&grid, TickInput::default(), &mut slices);

    let viewport = Viewport::new(tuning.screen_width, tuning.screen_height);
    let scene = Scene::new(viewport, CEILING_COLOR, FLOOR_COLOR, slices)?;
    let presentation = Presentation::new(WINDOW_TITLE, CLEAR_COLOR, wall_texture, scene);

    let backend = MacroquadBackend::new()
        .with_vsync(!args.no_vsync)
        .with_show_fps(args.show_fps)
        .with_cursor_grab(!args.no_cursor_grab);

    backend.run(presentation, move |_dt, input, scene| {
        let tick = TickInput {
            intent: MoveIntent {
                forward: input.move_forward,
                back: input.move_back,
                strafe_left: input.strafe_left,
                strafe_right: input.strafe_right,
            },
            mouse_delta_x: f64::from(input.mouse_delta.x),
            close_requested: input.close_requested,
        };

        match driver.advance(&grid, tick, &mut scene.columns) {
            FrameStatus::Running => LoopControl::Continue,
            FrameStatus::Terminating => LoopControl::Exit,
        }
    })
}
