//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};

/// Vertex with position, color and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

/// Floats per vertex (3 position + 3 color + 2 uv)
pub const VERTEX_STRIDE: usize = 8;

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
            tex_coords,
        }
    }
}

/// Corner colors for quads
pub mod colors {
    pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
    pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
    pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
    pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
}
