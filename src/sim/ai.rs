//! Rule-based paddle opponent
//!
//! Three states: wait in the middle, chase the ball's y while it approaches,
//! then drift back to center once it leaves.

use glam::Vec2;

use super::random::RandomSource;
use super::state::{Ball, GameState, Obstacle, PaddleAiState, Side};
use super::tick::move_paddle;
use crate::consts::*;

/// Ball is close enough horizontally and heading toward the paddle
fn ball_is_approaching(ball: &Ball, paddle: &Obstacle) -> bool {
    let in_sight = (ball.body.pos.x - paddle.body.pos.x).abs() < SIGHT_DISTANCE;
    // Paddle normal points into the field, so an approaching ball moves against it
    in_sight && ball.direction.x * paddle.normal.x < 0.0
}

/// Run one frame of the AI for the paddle on `side`
pub fn update_ai_paddle<R: RandomSource>(state: &mut GameState<R>, side: Side, dt: f32) {
    let ball = state.ball;
    let paddle = state.paddle(side);
    let step = PADDLE_SPEED * dt;
    let mut velocity_y = 0.0;

    let next = match state.ai_state {
        PaddleAiState::Idle => {
            if ball_is_approaching(&ball, paddle) {
                PaddleAiState::CatchingBall
            } else {
                PaddleAiState::Idle
            }
        }
        PaddleAiState::CatchingBall => {
            if ball_is_approaching(&ball, paddle) {
                let diff_y = ball.body.pos.y - paddle.body.pos.y;
                if diff_y > BALL_PADDLE_DIFF_Y {
                    velocity_y = step;
                } else if diff_y < -BALL_PADDLE_DIFF_Y {
                    velocity_y = -step;
                }
                PaddleAiState::CatchingBall
            } else {
                PaddleAiState::GoingToIdle
            }
        }
        PaddleAiState::GoingToIdle => {
            let y = paddle.body.pos.y;
            if y > DISTANCE_TO_IDLE_Y {
                velocity_y = -step;
                PaddleAiState::GoingToIdle
            } else if y < -DISTANCE_TO_IDLE_Y {
                velocity_y = step;
                PaddleAiState::GoingToIdle
            } else {
                PaddleAiState::Idle
            }
        }
    };

    if next != state.ai_state {
        log::trace!("AI paddle {:?} -> {:?}", state.ai_state, next);
        state.ai_state = next;
    }

    move_paddle(state.paddle_mut(side), Vec2::new(0.0, velocity_y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::tests::ScriptedSource;

    const DT: f32 = 1.0 / 60.0;

    fn state_with_ball(pos: Vec2, direction: Vec2) -> GameState<ScriptedSource> {
        let mut state = GameState::with_rng(ScriptedSource::new(&[0.9, 0.5, 0.9]));
        state.ball.body.pos = pos;
        state.ball.direction = direction;
        state
    }

    fn right_y<R: RandomSource>(state: &GameState<R>) -> f32 {
        state.paddle(Side::Right).body.pos.y
    }

    #[test]
    fn test_idle_ignores_distant_ball() {
        let mut state = state_with_ball(Vec2::new(0.0, 50.0), Vec2::X);
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::Idle);
        assert_eq!(right_y(&state), 0.0);
    }

    #[test]
    fn test_idle_ignores_receding_ball() {
        let mut state = state_with_ball(Vec2::new(300.0, 50.0), Vec2::NEG_X);
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::Idle);
    }

    #[test]
    fn test_catches_ball_above() {
        let mut state = state_with_ball(Vec2::new(200.0, 50.0), Vec2::new(1.0, 0.2).normalize());

        // Idle frame only switches state
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::CatchingBall);
        assert_eq!(right_y(&state), 0.0);

        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::CatchingBall);
        assert!((right_y(&state) - PADDLE_SPEED * DT).abs() < 1e-4);
    }

    #[test]
    fn test_catching_holds_when_aligned() {
        let mut state = state_with_ball(Vec2::new(200.0, -20.0), Vec2::X);
        state.ai_state = PaddleAiState::CatchingBall;
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(right_y(&state), 0.0);

        state.ball.body.pos.y = -80.0;
        update_ai_paddle(&mut state, Side::Right, DT);
        assert!(right_y(&state) < 0.0);
    }

    #[test]
    fn test_returns_to_idle_after_ball_leaves() {
        let mut state = state_with_ball(Vec2::new(200.0, 0.0), Vec2::X);
        state.ai_state = PaddleAiState::CatchingBall;
        state.paddle_mut(Side::Right).body.pos.y = 60.0;

        // Ball out of sight
        state.ball.body.pos.x = 0.0;
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::GoingToIdle);
        assert_eq!(right_y(&state), 60.0);

        let mut frames = 0;
        while state.ai_state != PaddleAiState::Idle {
            let before = right_y(&state);
            update_ai_paddle(&mut state, Side::Right, DT);
            if state.ai_state == PaddleAiState::GoingToIdle {
                assert!(right_y(&state) < before);
            }
            frames += 1;
            assert!(frames < 1000, "AI never settled");
        }
        assert!(right_y(&state).abs() <= DISTANCE_TO_IDLE_Y);

        // Settled: no more movement
        let settled = right_y(&state);
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(right_y(&state), settled);
    }

    #[test]
    fn test_going_to_idle_from_below() {
        let mut state = state_with_ball(Vec2::ZERO, Vec2::NEG_X);
        state.ai_state = PaddleAiState::GoingToIdle;
        state.paddle_mut(Side::Right).body.pos.y = -200.0;
        update_ai_paddle(&mut state, Side::Right, DT);
        assert!(right_y(&state) > -200.0);
        assert_eq!(state.ai_state, PaddleAiState::GoingToIdle);
    }

    #[test]
    fn test_reversal_abandons_chase() {
        let mut state = state_with_ball(Vec2::new(300.0, 100.0), Vec2::NEG_X);
        state.ai_state = PaddleAiState::CatchingBall;
        update_ai_paddle(&mut state, Side::Right, DT);
        assert_eq!(state.ai_state, PaddleAiState::GoingToIdle);
        assert_eq!(right_y(&state), 0.0);
    }
}
