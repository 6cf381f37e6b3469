//! Paddle Duel - classic two-player Pong
//!
//! Core modules:
//! - `sim`: Frame simulation (collisions, scoring, paddle control, AI)
//! - `renderer`: Renderer boundary (meshes, textures, transforms)
//! - `platform`: Frame clock and keyboard input
//! - `ui`: Score digits
//! - `settings`: Launch settings loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

use glam::{Mat4, Vec2};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels, also the orthographic field size)
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;

    /// Field limits - ball past ±LIMIT_X scores, paddles clamp to ±LIMIT_Y
    pub const LIMIT_X: f32 = 600.0;
    pub const LIMIT_Y: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_X: f32 = 500.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 500.0;
    pub const BALL_SIZE: f32 = 10.0;
    /// Push-out applied after an overlap so the next frame doesn't collide again
    pub const SURFACE_DISTANCE: f32 = 4.0;
    /// Vertical normal bias per unit of paddle half-height offset
    pub const EDGE_DEFLECTION: f32 = 0.1;

    /// Walls span the full width just outside the paddle range
    pub const WALL_WIDTH: f32 = 1280.0;
    pub const WALL_HEIGHT: f32 = 20.0;
    pub const WALL_Y: f32 = 340.0;

    /// AI tuning
    pub const SIGHT_DISTANCE: f32 = 400.0;
    pub const DISTANCE_TO_IDLE_Y: f32 = 30.0;
    pub const BALL_PADDLE_DIFF_Y: f32 = 30.0;

    /// Scores wrap to 0-0 once either side goes past this
    pub const MAX_SCORE: u8 = 9;
}

/// Translation matrix placing a mesh centered at `pos`
#[inline]
pub fn translation(pos: Vec2) -> Mat4 {
    Mat4::from_translation(pos.extend(0.0))
}
