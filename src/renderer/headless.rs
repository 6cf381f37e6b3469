//! In-memory renderer
//!
//! Stores meshes and textures without a GPU. Frames are counted, not drawn.

use glam::Mat4;

use super::{Image, Mesh, MeshId, Renderer, TextureId};

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    textures: Vec<Image>,
    meshes: Vec<Mesh>,
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn texture(&self, id: TextureId) -> Option<&Image> {
        self.textures.get(id.0)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn add_texture(&mut self, image: Image) -> TextureId {
        self.textures.push(image);
        TextureId(self.textures.len() - 1)
    }

    fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    fn set_transform(&mut self, mesh: MeshId, transform: Mat4) {
        match self.meshes.get_mut(mesh.0) {
            Some(m) => m.transform = transform,
            None => log::warn!("set_transform on unknown mesh {:?}", mesh),
        }
    }

    fn set_texture(&mut self, mesh: MeshId, texture: TextureId) {
        if texture.0 >= self.textures.len() {
            log::warn!("set_texture with unknown texture {:?}", texture);
            return;
        }
        match self.meshes.get_mut(mesh.0) {
            Some(m) => m.texture = Some(texture),
            None => log::warn!("set_texture on unknown mesh {:?}", mesh),
        }
    }

    fn render(&mut self) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} meshes, {} indices",
            self.frames,
            self.meshes.len(),
            self.meshes.iter().map(Mesh::index_count).sum::<usize>()
        );
    }
}
