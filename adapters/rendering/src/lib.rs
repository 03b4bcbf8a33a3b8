#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Dungeon Stay adapters.
//!
//! A [`Scene`] is a flat, backend-agnostic description of one frame: the
//! walled map as glyph cells, the entities drawn over it, and the text rows
//! below it. Backends only need to turn glyphs and text lines into pixels.

use anyhow::Result as AnyResult;
use dungeon_stay_core::{Input, MapBounds, Position, SessionState, Tint, WorldSnapshot};
use glam::Vec2;
use thiserror::Error;

/// Glyph drawn for wall tiles.
pub const WALL_GLYPH: char = '#';

/// Glyph drawn for empty floor tiles.
pub const FLOOR_GLYPH: char = '.';

/// Banner shown under the status line once the player died.
pub const GAME_OVER_BANNER: &str = "GAME OVER! Press 'q' to quit.";

/// Text rows reserved below the map: status, banner, then the message log.
const STATUS_ROW: u32 = 0;
const BANNER_ROW: u32 = 1;
const FIRST_MESSAGE_ROW: u32 = 2;

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

    /// Terminal-style color used for an entity tint.
    #[must_use]
    pub const fn from_tint(tint: Tint) -> Self {
        match tint {
            Tint::Green => Self::from_rgb_u8(0x3c, 0xc8, 0x50),
            Tint::Red => Self::from_rgb_u8(0xdc, 0x32, 0x2f),
            Tint::Yellow => Self::from_rgb_u8(0xf0, 0xc6, 0x2a),
            Tint::White => Self::from_rgb_u8(0xee, 0xee, 0xee),
            Tint::Blue => Self::from_rgb_u8(0x3a, 0x6e, 0xe8),
            Tint::Cyan => Self::from_rgb_u8(0x2a, 0xc3, 0xc8),
            Tint::Magenta => Self::from_rgb_u8(0xc8, 0x3c, 0xc8),
        }
    }
}

/// Color used for walls and floor tiles.
pub const TERRAIN_COLOR: Color = Color::from_rgb_u8(0x80, 0x80, 0x80);

/// Background color behind every frame.
pub const BACKGROUND_COLOR: Color = Color::from_rgb_u8(0, 0, 0);

/// Single glyph placed on the map grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPresentation {
    /// Zero-based column.
    pub column: u32,
    /// Zero-based row.
    pub row: u32,
    /// Character to draw.
    pub glyph: char,
    /// Foreground color.
    pub color: Color,
}

impl GlyphPresentation {
    /// Creates a glyph at the provided tile.
    #[must_use]
    pub const fn new(position: Position, glyph: char, color: Color) -> Self {
        Self {
            column: position.x(),
            row: position.y(),
            glyph,
            color,
        }
    }
}

/// Line of text drawn below the map.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Zero-based text row counted from the bottom edge of the map.
    pub row: u32,
    /// Text to draw.
    pub text: String,
    /// Foreground color.
    pub color: Color,
}

/// Backend-agnostic description of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Map columns including the wall ring.
    pub columns: u32,
    /// Map rows including the wall ring.
    pub rows: u32,
    /// Wall and floor glyphs in row-major order.
    pub terrain: Vec<GlyphPresentation>,
    /// Weapons, traps, enemies and finally the player, in draw order.
    pub entities: Vec<GlyphPresentation>,
    /// Status line, optional game-over banner and message log.
    pub text: Vec<TextLine>,
    /// Session state the frame was built from.
    pub session: SessionState,
}

impl Scene {
    /// Builds the frame description for a world snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        let bounds = snapshot.bounds;

        let mut entities = Vec::with_capacity(
            snapshot.weapons.len() + snapshot.traps.len() + snapshot.enemies.len() + 1,
        );
        entities.extend(snapshot.weapons.iter().map(|weapon| {
            GlyphPresentation::new(weapon.position, weapon.glyph, Color::from_tint(weapon.tint))
        }));
        entities.extend(snapshot.traps.iter().map(|trap| {
            GlyphPresentation::new(trap.position, trap.glyph, Color::from_tint(trap.tint))
        }));
        entities.extend(snapshot.enemies.iter().map(|enemy| {
            GlyphPresentation::new(enemy.position, enemy.glyph, Color::from_tint(enemy.tint))
        }));
        let player = &snapshot.player;
        entities.push(GlyphPresentation::new(
            player.position,
            player.glyph,
            Color::from_tint(player.tint),
        ));

        let mut text = Vec::with_capacity(snapshot.messages.len() + 2);
        text.push(TextLine {
            row: STATUS_ROW,
            text: status_line(snapshot),
            color: Color::from_tint(Tint::Green),
        });
        if snapshot.session == SessionState::Defeated {
            text.push(TextLine {
                row: BANNER_ROW,
                text: GAME_OVER_BANNER.to_owned(),
                color: Color::from_tint(Tint::Red),
            });
        }
        text.extend((FIRST_MESSAGE_ROW..).zip(&snapshot.messages).map(|(row, message)| {
            TextLine {
                row,
                text: message.clone(),
                color: Color::from_tint(Tint::White),
            }
        }));

        Self {
            columns: bounds.width(),
            rows: bounds.height(),
            terrain: terrain(bounds),
            entities,
            text,
            session: snapshot.session,
        }
    }

    /// Number of text rows the frame reserves below the map.
    #[must_use]
    pub fn text_rows(&self) -> u32 {
        self.text
            .iter()
            .map(|line| line.row + 1)
            .max()
            .unwrap_or(0)
            .max(FIRST_MESSAGE_ROW)
    }
}

fn terrain(bounds: MapBounds) -> Vec<GlyphPresentation> {
    (0..bounds.height())
        .flat_map(|row| (0..bounds.width()).map(move |column| Position::new(column, row)))
        .map(|position| {
            let glyph = if bounds.is_wall(position) {
                WALL_GLYPH
            } else {
                FLOOR_GLYPH
            };
            GlyphPresentation::new(position, glyph, TERRAIN_COLOR)
        })
        .collect()
}

/// One-line HUD summary of the player and the session.
#[must_use]
pub fn status_line(snapshot: &WorldSnapshot) -> String {
    let player = &snapshot.player;
    format!(
        "HP: {} | Wave: {} | Score: {} | Weapons: {} | Traps: {}",
        player.health, snapshot.wave, snapshot.score, player.wielded, player.traps
    )
}

/// Pixel layout that fits a scene's map and text rows onto a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    origin: Vec2,
    cell: f32,
    map_rows: u32,
}

impl GridLayout {
    /// Computes the largest square cell that fits the scene on the surface,
    /// centring the grid.
    pub fn fit(scene: &Scene, surface: Vec2) -> Result<Self, RenderingError> {
        let total_rows = scene.rows + scene.text_rows();
        let columns = scene.columns.max(1) as f32;
        let cell = (surface.x / columns).min(surface.y / total_rows.max(1) as f32);
        if !cell.is_finite() || cell < 1.0 {
            return Err(RenderingError::SurfaceTooSmall {
                width: surface.x,
                height: surface.y,
            });
        }

        let extent = Vec2::new(columns * cell, total_rows as f32 * cell);
        Ok(Self {
            origin: ((surface - extent) * 0.5).max(Vec2::ZERO),
            cell,
            map_rows: scene.rows,
        })
    }

    /// Edge length of a cell in pixels.
    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// Top-left pixel of a map cell.
    #[must_use]
    pub fn cell_origin(&self, column: u32, row: u32) -> Vec2 {
        self.origin + Vec2::new(column as f32, row as f32) * self.cell
    }

    /// Top-left pixel of a text row below the map.
    #[must_use]
    pub fn text_origin(&self, row: u32) -> Vec2 {
        self.cell_origin(0, self.map_rows + row)
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Dungeon Stay scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until the session terminates or the window closes.
    ///
    /// The backend owns the tick cadence. On every tick it calls
    /// `advance_scene` with the input latched since the previous tick
    /// ([`Input::NoOp`] when no key was pressed); the closure advances the
    /// simulation, refreshes the scene and reports the resulting session
    /// state. The backend stops once [`SessionState::Terminated`] is returned.
    fn run<F>(self, presentation: Presentation, advance_scene: F) -> AnyResult<()>
    where
        F: FnMut(Input, &mut Scene) -> SessionState + 'static;
}

/// Errors that can occur when laying out rendering descriptors.
#[derive(Debug, Error, PartialEq)]
pub enum RenderingError {
    /// The surface cannot hold a single pixel per cell.
    #[error("surface of {width}x{height} pixels is too small for the dungeon grid")]
    SurfaceTooSmall {
        /// Surface width in pixels.
        width: f32,
        /// Surface height in pixels.
        height: f32,
    },
}
