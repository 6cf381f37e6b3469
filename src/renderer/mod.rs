//! Rendering boundary
//!
//! The game never touches GPU state. It registers textures and meshes with a
//! `Renderer`, moves meshes by updating their transforms, and asks for a frame.
//! `HeadlessRenderer` keeps everything in memory for the native binary and tests.

pub mod headless;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use headless::HeadlessRenderer;
pub use scene::Scene;
pub use shapes::{Mesh, quad};
pub use vertex::Vertex;

use glam::Mat4;

/// Handle to a registered texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Handle to a registered mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Single-channel (alpha) pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// 1x1 opaque pixel, used to draw flat-colored quads
    pub fn white_pixel() -> Self {
        Self::new(1, 1, vec![255])
    }
}

/// Everything the game needs from a graphics backend
pub trait Renderer {
    fn add_texture(&mut self, image: Image) -> TextureId;

    fn add_mesh(&mut self, mesh: Mesh) -> MeshId;

    fn set_transform(&mut self, mesh: MeshId, transform: Mat4);

    fn set_texture(&mut self, mesh: MeshId, texture: TextureId);

    /// Draw all registered meshes
    fn render(&mut self);
}
