#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Corridor.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in containerised CI environments. To
//! keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! The backend owns the window, the wall texture, and the input devices.
//! Texture acquisition happens before the first frame and its failure is
//! reported through an init channel so startup aborts instead of rendering
//! with an invalid handle.

use anyhow::{anyhow, Result};
use corridor_rendering::{
    FrameInput, LoopControl, Presentation, RenderingBackend, Scene, TextureSource,
};
use glam::Vec2;
use macroquad::{
    color::Color as MacroquadColor,
    input::{is_key_down, is_key_pressed, is_quit_requested, mouse_position, prevent_quit,
        set_cursor_grab, show_mouse, KeyCode},
    math::{vec2, Rect, Vec2 as MacroquadVec2},
    texture::{draw_texture_ex, DrawTextureParams, FilterMode, Texture2D},
};
use std::{
    collections::VecDeque,
    sync::mpsc,
    time::{Duration, Instant},
};

/// Snapshot of the keys observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardState {
    /// `W` held: walk along the view direction.
    move_forward: bool,
    /// `S` held: walk against the view direction.
    move_back: bool,
    /// `A` held: strafe left.
    strafe_left: bool,
    /// `D` held: strafe right.
    strafe_right: bool,
    /// `Escape` or `Q` pressed: leave the frame loop.
    quit_requested: bool,
}

impl KeyboardState {
    fn poll() -> Self {
        Self {
            move_forward: is_key_down(KeyCode::W),
            move_back: is_key_down(KeyCode::S),
            strafe_left: is_key_down(KeyCode::A),
            strafe_right: is_key_down(KeyCode::D),
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Clone, Copy, Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    grab_cursor: bool,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            show_fps: false,
            grab_cursor: true,
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints frame timing metrics once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Configures whether the backend captures the cursor for relative
    /// mouse-look input.
    #[must_use]
    pub fn with_cursor_grab(mut self, grab: bool) -> Self {
        self.grab_cursor = grab;
        self
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> LoopControl + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
            grab_cursor,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            wall_texture,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: scene.viewport.width as i32,
            window_height: scene.viewport.height as i32,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (init_sender, init_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let mut init_sender = Some(init_sender);
            let mut scene = scene;

            let texture = match acquire_wall_texture(&wall_texture).await {
                Ok(texture) => texture,
                Err(error) => {
                    if let Some(sender) = init_sender.take() {
                        let _ = sender.send(Err(error));
                    }
                    return;
                }
            };
            texture.set_filter(FilterMode::Nearest);

            if let Some(sender) = init_sender.take() {
                let _ = sender.send(Ok(()));
            }

            prevent_quit();
            if grab_cursor {
                set_cursor_grab(true);
                show_mouse(false);
            }

            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut last_mouse: MacroquadVec2 = mouse_position().into();

            loop {
                let keyboard = KeyboardState::poll();

                let mouse: MacroquadVec2 = mouse_position().into();
                let mouse_delta = mouse - last_mouse;
                last_mouse = mouse;

                let frame_input = FrameInput {
                    move_forward: keyboard.move_forward,
                    move_back: keyboard.move_back,
                    strafe_left: keyboard.strafe_left,
                    strafe_right: keyboard.strafe_right,
                    mouse_delta: Vec2::new(mouse_delta.x, mouse_delta.y),
                    close_requested: keyboard.quit_requested || is_quit_requested(),
                };

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                let simulation_start = Instant::now();
                let control = update_scene(frame_dt, frame_input, &mut scene);
                let simulation_duration = simulation_start.elapsed();

                macroquad::window::clear_background(background);

                let render_start = Instant::now();
                composite_scene(&scene, &texture, &wall_texture);
                let render_duration = render_start.elapsed();

                if show_fps {
                    if let Some(metrics) = fps_counter.record_frame(FrameBreakdown {
                        frame: frame_dt,
                        simulation: simulation_duration,
                        render: render_duration,
                    }) {
                        println!(
                            "FPS: {:.2} (10s avg: {:.2}) | sim: {:>6.2}ms render: {:>6.2}ms",
                            metrics.per_second,
                            metrics.trailing_ten_seconds,
                            metrics.avg_simulation.as_secs_f64() * 1_000.0,
                            metrics.avg_render.as_secs_f64() * 1_000.0,
                        );
                    }
                }

                if control == LoopControl::Exit {
                    break;
                }

                macroquad::window::next_frame().await;
            }
        });

        init_receiver.recv().unwrap_or_else(|_| Ok(()))?;

        Ok(())
    }
}

/// Loads or synthesizes the wall texture described by the presentation.
///
/// The declared dimensions are authoritative because the engine derived its
/// texture columns from them; a file whose decoded size disagrees aborts
/// startup.
async fn acquire_wall_texture(
    spec: &corridor_rendering::WallTextureSpec,
) -> Result<Texture2D> {
    match &spec.source {
        TextureSource::Path(path) => {
            let texture = macroquad::texture::load_texture(path)
                .await
                .map_err(|error| anyhow!("failed to load wall texture {path}: {error}"))?;
            let (width, height) = (texture.width() as u32, texture.height() as u32);
            if width != spec.width || height != spec.height {
                return Err(anyhow!(
                    "wall texture {path} is {width}x{height}, presentation declared {}x{}",
                    spec.width,
                    spec.height
                ));
            }
            Ok(texture)
        }
        TextureSource::Rgba(pixels) => {
            let width = u16::try_from(spec.width)
                .map_err(|_| anyhow!("texture width {} exceeds u16", spec.width))?;
            let height = u16::try_from(spec.height)
                .map_err(|_| anyhow!("texture height {} exceeds u16", spec.height))?;
            Ok(Texture2D::from_rgba8(width, height, pixels))
        }
    }
}

/// Composites the scene: per column a ceiling fill, a floor fill, and a
/// tinted one-texel-wide strip of the wall texture.
fn composite_scene(
    scene: &Scene,
    texture: &Texture2D,
    spec: &corridor_rendering::WallTextureSpec,
) {
    let screen_width = macroquad::window::screen_width();
    let screen_height = macroquad::window::screen_height();
    if scene.viewport.width == 0 || scene.viewport.height == 0 {
        return;
    }
    let scale_x = screen_width / scene.viewport.width as f32;
    let scale_y = screen_height / scene.viewport.height as f32;

    let ceiling = to_macroquad_color(scene.ceiling);
    let floor = to_macroquad_color(scene.floor);

    for (column, slice) in scene.columns.iter().enumerate() {
        let x = column as f32 * scale_x;
        let wall_top = slice.draw_start as f32 * scale_y;
        let wall_bottom = (slice.draw_end + 1) as f32 * scale_y;

        if wall_top > 0.0 {
            macroquad::shapes::draw_rectangle(x, 0.0, scale_x, wall_top, ceiling);
        }
        if wall_bottom < screen_height {
            macroquad::shapes::draw_rectangle(
                x,
                wall_bottom,
                scale_x,
                screen_height - wall_bottom,
                floor,
            );
        }

        let tint = MacroquadColor::new(
            slice.shade as f32 / 255.0,
            slice.shade as f32 / 255.0,
            slice.shade as f32 / 255.0,
            1.0,
        );
        draw_texture_ex(
            texture,
            x,
            wall_top,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(scale_x, wall_bottom - wall_top)),
                source: Some(Rect::new(
                    slice.tex_column as f32,
                    0.0,
                    1.0,
                    spec.height as f32,
                )),
                ..DrawTextureParams::default()
            },
        );
    }
}

fn to_macroquad_color(color: corridor_rendering::Color) -> MacroquadColor {
    MacroquadColor::new(color.red, color.green, color.blue, color.alpha)
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Clone, Copy, Debug, Default)]
struct FrameBreakdown {
    frame: Duration,
    simulation: Duration,
    render: Duration,
}

#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    frame_times: VecDeque<Duration>,
    window_duration: Duration,
    simulation_accum: Duration,
    render_accum: Duration,
}

#[derive(Clone, Copy, Debug)]
struct FpsMetrics {
    per_second: f32,
    trailing_ten_seconds: f32,
    avg_simulation: Duration,
    avg_render: Duration,
}

impl FpsCounter {
    /// Records a rendered frame and returns the per-second and trailing
    /// ten-second averages once one second has elapsed.
    fn record_frame(&mut self, breakdown: FrameBreakdown) -> Option<FpsMetrics> {
        self.elapsed += breakdown.frame;
        self.frames = self.frames.saturating_add(1);
        self.simulation_accum += breakdown.simulation;
        self.render_accum += breakdown.render;

        self.frame_times.push_back(breakdown.frame);
        self.window_duration += breakdown.frame;

        let trailing_window = Duration::from_secs(10);
        while self.window_duration > trailing_window {
            if let Some(removed) = self.frame_times.pop_front() {
                self.window_duration = self.window_duration.saturating_sub(removed);
            } else {
                break;
            }
        }

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let per_second = self.frames as f32 / seconds;
        let window_seconds = self.window_duration.as_secs_f32();
        let trailing_ten_seconds = if window_seconds <= f32::EPSILON {
            per_second
        } else {
            self.frame_times.len() as f32 / window_seconds
        };
        let frames = self.frames.max(1);
        let avg_simulation = self.simulation_accum / frames;
        let avg_render = self.render_accum / frames;

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.simulation_accum = Duration::ZERO;
        self.render_accum = Duration::ZERO;

        Some(FpsMetrics {
            per_second,
            trailing_ten_seconds,
            avg_simulation,
            avg_render,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FpsCounter, FrameBreakdown};
    use std::time::Duration;

    #[test]
    fn fps_counter_reports_after_one_second() {
        let mut counter = FpsCounter::default();
        let breakdown = FrameBreakdown {
            frame: Duration::from_millis(100),
            simulation: Duration::from_millis(2),
            render: Duration::from_millis(3),
        };

        for _ in 0..9 {
            assert!(counter.record_frame(breakdown).is_none());
        }
        let metrics = counter
            .record_frame(breakdown)
            .expect("tenth frame crosses one second");
        assert!((metrics.per_second - 10.0).abs() < 0.5);
        assert_eq!(metrics.avg_simulation, Duration::from_millis(2));
    }

    #[test]
    fn fps_counter_resets_between_windows() {
        let mut counter = FpsCounter::default();
        let breakdown = FrameBreakdown {
            frame: Duration::from_millis(500),
            simulation: Duration::ZERO,
            render: Duration::ZERO,
        };

        assert!(counter.record_frame(breakdown).is_none());
        assert!(counter.record_frame(breakdown).is_some());
        assert!(counter.record_frame(breakdown).is_none());
    }
}
