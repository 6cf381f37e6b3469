//! Mesh data for 2D primitives

use glam::Mat4;

use super::vertex::{Vertex, colors};
use super::TextureId;

/// Indexed triangle mesh with its texture and model transform
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub texture: Option<TextureId>,
    pub transform: Mat4,
}

impl Mesh {
    /// Raw vertex bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Quad centered at the origin, drawn as two triangles sharing corner 3
pub fn quad(width: f32, height: f32) -> Mesh {
    let hw = width * 0.5;
    let hh = height * 0.5;

    let vertices = vec![
        Vertex::new(hw, hh, colors::RED, [1.0, 1.0]),
        Vertex::new(hw, -hh, colors::GREEN, [1.0, 0.0]),
        Vertex::new(-hw, -hh, colors::BLUE, [0.0, 0.0]),
        Vertex::new(-hw, hh, colors::YELLOW, [0.0, 1.0]),
    ];

    Mesh {
        vertices,
        indices: vec![0, 1, 3, 1, 2, 3],
        texture: None,
        transform: Mat4::IDENTITY,
    }
}
