#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Dungeon Stay.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! The backend polls the keyboard every frame, latches the most recent game
//! key, and hands it to the simulation whenever the [`TickClock`] fires.

mod cadence;

pub use self::cadence::{TickClock, DEFAULT_TICK_INTERVAL};

use anyhow::Result;
use dungeon_stay_core::{Input, SessionState};
use dungeon_stay_rendering::{
    GlyphPresentation, GridLayout, Presentation, RenderingBackend, Scene, TextLine,
};
use glam::Vec2;
use macroquad::input::{is_key_pressed, KeyCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Fraction of a cell used as font size for glyphs and text.
const FONT_SCALE: f32 = 1.1;

/// Holds the game key pressed since the last tick so it fires exactly once.
///
/// A later key replaces an earlier one, except that a pending quit is never
/// overwritten.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default)]
pub struct InputLatch {
    latched: Option<Input>,
}

impl InputLatch {
    /// Records a key observed during the current frame.
    pub fn register(&mut self, input: Input) {
        if self.latched != Some(Input::Quit) {
            self.latched = Some(input);
        }
    }

    /// Returns the latched input, or [`Input::NoOp`], and clears the latch.
    pub fn take(&mut self) -> Input {
        self.latched.take().unwrap_or(Input::NoOp)
    }
}

/// Maps the keys pressed this frame to a game input, quit taking precedence.
fn poll_keyboard() -> Option<Input> {
    const BINDINGS: [(KeyCode, Input); 9] = [
        (KeyCode::Q, Input::Quit),
        (KeyCode::Escape, Input::Quit),
        (KeyCode::A, Input::Attack),
        (KeyCode::T, Input::PlaceTrap),
        (KeyCode::Up, Input::MoveUp),
        (KeyCode::Down, Input::MoveDown),
        (KeyCode::Left, Input::MoveLeft),
        (KeyCode::Right, Input::MoveRight),
        (KeyCode::Space, Input::NoOp),
    ];

    BINDINGS
        .iter()
        .find(|(key, _)| is_key_pressed(*key))
        .map(|(_, input)| *input)
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    tick_clock: TickClock,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            tick_clock: TickClock::default(),
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

    /// Configures the spacing between simulation ticks.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_clock = TickClock::new(interval);
        self
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut advance_scene: F) -> Result<()>
    where
        F: FnMut(Input, &mut Scene) -> SessionState + 'static,
    {
        let Self {
            swap_interval,
            tick_clock,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: 960,
            window_height: 720,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        debug!(interval = ?tick_clock.interval(), "starting macroquad frame loop");

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let mut tick_clock = tick_clock;
            let mut latch = InputLatch::default();
            let background = to_macroquad_color(clear_color);

            loop {
                if let Some(input) = poll_keyboard() {
                    latch.register(input);
                }

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                if tick_clock.advance(frame_dt) {
                    let input = latch.take();
                    if advance_scene(input, &mut scene) == SessionState::Terminated {
                        break;
                    }
                }

                macroquad::window::clear_background(background);
                let surface = Vec2::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                match GridLayout::fit(&scene, surface) {
                    Ok(layout) => draw_scene(&scene, &layout),
                    Err(error) => warn!(%error, "skipping frame"),
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn draw_scene(scene: &Scene, layout: &GridLayout) {
    for glyph in &scene.terrain {
        draw_glyph(glyph, layout);
    }
    for glyph in &scene.entities {
        draw_glyph(glyph, layout);
    }
    for line in &scene.text {
        draw_text_line(line, layout);
    }
}

fn draw_glyph(glyph: &GlyphPresentation, layout: &GridLayout) {
    let cell = layout.cell_size();
    let origin = layout.cell_origin(glyph.column, glyph.row);
    let mut buffer = [0; 4];
    let _ = macroquad::text::draw_text(
        glyph.glyph.encode_utf8(&mut buffer),
        origin.x + cell * 0.2,
        origin.y + cell * 0.85,
        cell * FONT_SCALE,
        to_macroquad_color(glyph.color),
    );
}

fn draw_text_line(line: &TextLine, layout: &GridLayout) {
    let cell = layout.cell_size();
    let origin = layout.text_origin(line.row);
    let _ = macroquad::text::draw_text(
        &line.text,
        origin.x,
        origin.y + cell * 0.85,
        cell * FONT_SCALE,
        to_macroquad_color(line.color),
    );
}

fn to_macroquad_color(color: dungeon_stay_rendering::Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_stay_rendering::Color;

    #[test]
    fn latch_defaults_to_noop() {
        let mut latch = InputLatch::default();
        assert_eq!(latch.take(), Input::NoOp);
    }

    #[test]
    fn colors_convert_channel_for_channel() {
        let converted = to_macroquad_color(Color::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(
            (converted.r, converted.g, converted.b, converted.a),
            (0.1, 0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn backend_builder_records_tick_interval() {
        let backend = MacroquadBackend::new()
            .with_vsync(true)
            .with_tick_interval(Duration::from_millis(250));
        assert_eq!(backend.swap_interval, Some(1));
        assert_eq!(backend.tick_clock.interval(), Duration::from_millis(250));
    }
}
