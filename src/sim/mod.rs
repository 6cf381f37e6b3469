//! Frame simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Elapsed frame time is passed in by the caller
//! - Randomness comes from an injected `RandomSource`
//! - Obstacles are visited in setup order (walls, then paddles)

pub mod ai;
pub mod collision;
pub mod random;
pub mod state;
pub mod tick;

pub use ai::update_ai_paddle;
pub use collision::{effective_normal, overlaps, reflect};
pub use random::{PcgSource, RandomSource, random_direction};
pub use state::{
    Ball, Body, GameEvent, GameState, Obstacle, ObstacleKind, PaddleAiState, Renderable, Score,
    Side,
};
pub use tick::{TickInput, move_paddle, tick, update_ball, update_human_paddle};
