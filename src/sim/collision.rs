//! Collision detection and response for axis-aligned rectangles
//!
//! The ball and every obstacle are boxes, so detection is a plain AABB test.
//! Response reflects the ball's direction about the obstacle normal, tilted
//! for paddle hits by how far from the paddle center the ball struck.

use glam::Vec2;

use super::state::{Body, Obstacle, ObstacleKind};
use crate::consts::EDGE_DEFLECTION;

/// Check whether two bodies overlap
///
/// Bounds are inclusive: boxes that only share an edge still count.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let (min_a, max_a) = (a.min(), a.max());
    let (min_b, max_b) = (b.min(), b.max());

    (min_a.x <= max_b.x && max_a.x >= min_b.x) && (min_a.y <= max_b.y && max_a.y >= min_b.y)
}

/// Reflect a direction off a surface
///
/// Standard reflection: d' = d - 2(d·n)n
#[inline]
pub fn reflect(direction: Vec2, normal: Vec2) -> Vec2 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Normal to reflect the ball about when it hits `obstacle` at `ball_pos`
///
/// Walls use their stored normal. Paddles bias the normal's y by the hit
/// offset from center, in units of half the paddle height.
pub fn effective_normal(obstacle: &Obstacle, ball_pos: Vec2) -> Vec2 {
    match obstacle.kind {
        ObstacleKind::Wall => obstacle.normal,
        ObstacleKind::Paddle { .. } => {
            let offset = ball_pos.y - obstacle.body.pos.y;
            let fraction = offset / (obstacle.body.height * 0.5);
            Vec2::new(obstacle.normal.x, fraction * EDGE_DEFLECTION).normalize()
        }
    }
}
