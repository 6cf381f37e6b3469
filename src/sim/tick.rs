//! Per-frame simulation step
//!
//! Advances the ball, resolves collisions, keeps score and moves both
//! paddles by the elapsed frame time.

use glam::Vec2;

use super::ai::update_ai_paddle;
use super::collision::{effective_normal, overlaps, reflect};
use super::random::{RandomSource, random_direction};
use super::state::{GameEvent, GameState, Obstacle, ObstacleKind, Side};
use crate::consts::*;

/// Held-key state for the human paddle, latched by the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Advance the whole game by one frame of `dt` seconds
pub fn tick<R: RandomSource>(
    state: &mut GameState<R>,
    input: &TickInput,
    dt: f32,
) -> Vec<GameEvent> {
    let events = update_ball(state, dt);
    update_human_paddle(state, Side::Left, input, dt);
    update_ai_paddle(state, Side::Right, dt);
    events
}

/// Move the ball, bounce it off obstacles and handle misses
pub fn update_ball<R: RandomSource>(state: &mut GameState<R>, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let ball = &mut state.ball;

    for obstacle in &state.obstacles {
        if !overlaps(&ball.body, &obstacle.body) {
            continue;
        }

        ball.body.pos += obstacle.normal * SURFACE_DISTANCE;
        let normal = effective_normal(obstacle, ball.body.pos);
        ball.direction = reflect(ball.direction, normal);

        events.push(match obstacle.kind {
            ObstacleKind::Wall => GameEvent::WallHit,
            ObstacleKind::Paddle { side, .. } => GameEvent::PaddleHit(side),
        });
    }

    ball.body.pos += ball.direction * BALL_SPEED * dt;

    // The side whose goal the ball left through
    let missed = if ball.body.pos.x < -LIMIT_X {
        Some(Side::Left)
    } else if ball.body.pos.x > LIMIT_X {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = missed.map(Side::opponent) {
        let wrapped = state.score.award(side);
        let direction = random_direction(&mut state.rng);
        state.ball.reset(direction);
        log::debug!(
            "{:?} scores: {}-{}{}",
            side,
            state.score.left,
            state.score.right,
            if wrapped { " (wrapped)" } else { "" }
        );
        events.push(GameEvent::Scored { side, wrapped });
    }

    let pos = state.ball.body.pos;
    state.ball.renderable.place(pos);
    events
}

/// Move a paddle by `velocity`, keeping it inside the vertical limits
pub fn move_paddle(paddle: &mut Obstacle, velocity: Vec2) {
    let target = paddle.body.pos + velocity;
    paddle.body.pos = Vec2::new(target.x, target.y.clamp(-LIMIT_Y, LIMIT_Y));

    if let ObstacleKind::Paddle { renderable, .. } = &mut paddle.kind {
        renderable.place(paddle.body.pos);
    }
}

/// Drive a paddle from held keys; opposite keys cancel out
pub fn update_human_paddle<R: RandomSource>(
    state: &mut GameState<R>,
    side: Side,
    input: &TickInput,
    dt: f32,
) {
    let mut velocity_y = 0.0;
    if input.up {
        velocity_y += PADDLE_SPEED * dt;
    }
    if input.down {
        velocity_y -= PADDLE_SPEED * dt;
    }

    move_paddle(state.paddle_mut(side), Vec2::new(0.0, velocity_y));
}
