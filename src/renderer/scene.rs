//! Binds simulation entities to renderer meshes

use super::{Image, MeshId, Renderer, TextureId, quad};
use crate::consts::*;
use crate::sim::{GameState, RandomSource, Side};

/// Mesh handles for the drawn entities
///
/// Walls are collision-only and get no mesh.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub white: TextureId,
    pub ball: MeshId,
    pub paddle_left: MeshId,
    pub paddle_right: MeshId,
}

impl Scene {
    /// Register the flat white texture and entity quads at their start positions
    pub fn setup<R: RandomSource>(renderer: &mut impl Renderer, state: &GameState<R>) -> Self {
        let white = renderer.add_texture(Image::white_pixel());

        let mut add = |width: f32, height: f32, transform| {
            let mut mesh = quad(width, height);
            mesh.texture = Some(white);
            mesh.transform = transform;
            renderer.add_mesh(mesh)
        };

        let ball = add(BALL_SIZE, BALL_SIZE, state.ball.renderable.transform);
        let paddle_left = add(PADDLE_WIDTH, PADDLE_HEIGHT, paddle_transform(state, Side::Left));
        let paddle_right = add(PADDLE_WIDTH, PADDLE_HEIGHT, paddle_transform(state, Side::Right));

        Self {
            white,
            ball,
            paddle_left,
            paddle_right,
        }
    }

    /// Push the current entity transforms to the renderer
    pub fn sync<R: RandomSource>(&self, renderer: &mut impl Renderer, state: &GameState<R>) {
        renderer.set_transform(self.ball, state.ball.renderable.transform);
        renderer.set_transform(self.paddle_left, paddle_transform(state, Side::Left));
        renderer.set_transform(self.paddle_right, paddle_transform(state, Side::Right));
    }
}

fn paddle_transform<R: RandomSource>(state: &GameState<R>, side: Side) -> glam::Mat4 {
    state
        .paddle(side)
        .renderable()
        .map(|r| r.transform)
        .unwrap_or(glam::Mat4::IDENTITY)
}
