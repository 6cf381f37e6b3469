//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`, which the caller
//! owns and passes by reference into each update.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use super::random::{PcgSource, RandomSource, random_direction};
use crate::consts::*;
use crate::translation;

/// Which half of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Axis-aligned rectangle centered at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min(&self) -> Vec2 {
        self.pos - self.half_extents()
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.half_extents()
    }
}

/// Transform the renderer reads for an entity's mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub transform: Mat4,
}

impl Renderable {
    pub fn at(pos: Vec2) -> Self {
        Self {
            transform: translation(pos),
        }
    }

    pub fn place(&mut self, pos: Vec2) {
        self.transform = translation(pos);
    }
}

/// Obstacle variants. Walls are static; paddles move and get drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Paddle { side: Side, renderable: Renderable },
}

/// A body the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    /// Unit normal pointing into the field
    pub normal: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn wall(body: Body, normal: Vec2) -> Self {
        Self {
            body,
            normal,
            kind: ObstacleKind::Wall,
        }
    }

    pub fn paddle(side: Side) -> Self {
        let (x, normal) = match side {
            Side::Left => (-PADDLE_X, Vec2::X),
            Side::Right => (PADDLE_X, Vec2::NEG_X),
        };
        let pos = Vec2::new(x, 0.0);
        Self {
            body: Body::new(pos, PADDLE_WIDTH, PADDLE_HEIGHT),
            normal,
            kind: ObstacleKind::Paddle {
                side,
                renderable: Renderable::at(pos),
            },
        }
    }

    pub fn is_paddle(&self) -> bool {
        matches!(self.kind, ObstacleKind::Paddle { .. })
    }

    pub fn renderable(&self) -> Option<&Renderable> {
        match &self.kind {
            ObstacleKind::Paddle { renderable, .. } => Some(renderable),
            ObstacleKind::Wall => None,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Unit travel direction
    pub direction: Vec2,
    pub renderable: Renderable,
}

impl Ball {
    pub fn new(direction: Vec2) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, BALL_SIZE, BALL_SIZE),
            direction,
            renderable: Renderable::at(Vec2::ZERO),
        }
    }

    /// Back to center with a fresh launch direction
    pub fn reset(&mut self, direction: Vec2) {
        self.body.pos = Vec2::ZERO;
        self.direction = direction;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    /// Award a point. Returns true if the scores wrapped back to 0-0.
    pub fn award(&mut self, side: Side) -> bool {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        if self.left > MAX_SCORE || self.right > MAX_SCORE {
            *self = Self::default();
            return true;
        }
        false
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Right paddle controller state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleAiState {
    /// Parked, waiting for the ball to approach
    #[default]
    Idle,
    /// Drifting back to the vertical center
    GoingToIdle,
    /// Tracking the ball's y
    CatchingBall,
}

/// Something the frame produced, for logging and sound hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    PaddleHit(Side),
    /// `side` won the point; `wrapped` is set when the scores reset to 0-0
    Scored { side: Side, wrapped: bool },
}

/// Obstacle slots, fixed at setup
pub const TOP_WALL: usize = 0;
pub const BOTTOM_WALL: usize = 1;
pub const LEFT_PADDLE: usize = 2;
pub const RIGHT_PADDLE: usize = 3;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = PcgSource> {
    pub ball: Ball,
    /// Walls then paddles; never grows or shrinks after setup
    pub obstacles: Vec<Obstacle>,
    pub score: Score,
    pub ai_state: PaddleAiState,
    pub rng: R,
}

impl GameState<PcgSource> {
    /// Create a new session with a seeded PCG source
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PcgSource::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session drawing launch directions from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let ball = Ball::new(random_direction(&mut rng));
        let obstacles = vec![
            Obstacle::wall(
                Body::new(Vec2::new(0.0, WALL_Y), WALL_WIDTH, WALL_HEIGHT),
                Vec2::NEG_Y,
            ),
            Obstacle::wall(
                Body::new(Vec2::new(0.0, -WALL_Y), WALL_WIDTH, WALL_HEIGHT),
                Vec2::Y,
            ),
            Obstacle::paddle(Side::Left),
            Obstacle::paddle(Side::Right),
        ];

        Self {
            ball,
            obstacles,
            score: Score::default(),
            ai_state: PaddleAiState::Idle,
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Obstacle {
        &self.obstacles[paddle_slot(side)]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Obstacle {
        &mut self.obstacles[paddle_slot(side)]
    }
}

fn paddle_slot(side: Side) -> usize {
    match side {
        Side::Left => LEFT_PADDLE,
        Side::Right => RIGHT_PADDLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_layout() {
        let state = GameState::new(7);
        assert_eq!(state.obstacles.len(), 4);
        assert!(!state.obstacles[TOP_WALL].is_paddle());
        assert!(!state.obstacles[BOTTOM_WALL].is_paddle());
        assert_eq!(state.obstacles[TOP_WALL].normal, Vec2::NEG_Y);
        assert_eq!(state.obstacles[BOTTOM_WALL].normal, Vec2::Y);

        let left = state.paddle(Side::Left);
        let right = state.paddle(Side::Right);
        assert_eq!(left.body.pos, Vec2::new(-PADDLE_X, 0.0));
        assert_eq!(right.body.pos, Vec2::new(PADDLE_X, 0.0));
        assert_eq!(left.normal, Vec2::X);
        assert_eq!(right.normal, Vec2::NEG_X);
        assert_eq!(state.ball.body.pos, Vec2::ZERO);
        assert!((state.ball.direction.length() - 1.0).abs() < 1e-5);
        assert_eq!(state.ai_state, PaddleAiState::Idle);
    }

    #[test]
    fn test_score_wraps_past_nine() {
        let mut score = Score { left: 9, right: 4 };
        assert!(score.award(Side::Left));
        assert_eq!(score, Score::default());

        let mut score = Score { left: 3, right: 8 };
        assert!(!score.award(Side::Right));
        assert_eq!(score, Score { left: 3, right: 9 });
        assert!(score.award(Side::Right));
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_score_by_side() {
        let mut score = Score { left: 2, right: 6 };
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 6);
        score.award(Side::Left.opponent());
        assert_eq!(score.get(Side::Right), 7);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }

    #[test]
    fn test_snapshot_roundtrips_through_json() {
        let mut state = GameState::new(31);
        state.ball.body.pos = Vec2::new(-120.5, 42.25);
        state.ball.renderable.place(state.ball.body.pos);
        state.score = Score { left: 4, right: 9 };
        state.ai_state = PaddleAiState::GoingToIdle;
        state.paddle_mut(Side::Right).body.pos.y = -75.0;

        let snapshot = (state.ball, state.obstacles.clone(), state.score, state.ai_state);
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let restored: (Ball, Vec<Obstacle>, Score, PaddleAiState) =
            serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored, snapshot);
        assert!(restored.1[RIGHT_PADDLE].is_paddle());
        assert!(!restored.1[TOP_WALL].is_paddle());
    }

    #[test]
    fn test_paddle_renderable_follows_setup() {
        let paddle = Obstacle::paddle(Side::Right);
        let transform = paddle.renderable().map(|r| r.transform);
        assert_eq!(transform, Some(translation(Vec2::new(PADDLE_X, 0.0))));
        assert!(Obstacle::wall(Body::new(Vec2::ZERO, 1.0, 1.0), Vec2::Y)
            .renderable()
            .is_none());
    }
}
