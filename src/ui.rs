//! Score display
//!
//! Digits are rasterized once into textures, then each frame the two score
//! meshes are pointed at the texture for the current digit. If rasterizing
//! fails the board stays disabled and the game runs without a score readout.

use glam::Vec2;
use thiserror::Error;

use crate::renderer::{Image, MeshId, Renderer, TextureId, quad};
use crate::sim::{Score, Side};
use crate::translation;

/// Glyph height the digits are rasterized at
pub const GLYPH_PIXEL_HEIGHT: f32 = 120.0;

/// Pixel heights `SegmentFont` accepts
pub const GLYPH_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 5.0..=4096.0;

/// Score mesh size and placement
pub const DIGIT_MESH_SIZE: Vec2 = Vec2::new(30.0, 40.0);
pub const LEFT_SCORE_POS: Vec2 = Vec2::new(-100.0, -310.0);
pub const RIGHT_SCORE_POS: Vec2 = Vec2::new(100.0, -310.0);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("No glyph for {0:?}")]
    MissingGlyph(char),

    #[error("Pixel height {0} out of range")]
    InvalidSize(f32),
}

/// Turns a character into a single-channel bitmap
pub trait GlyphRasterizer {
    fn rasterize(&self, ch: char, pixel_height: f32) -> Result<Image, FontError>;
}

/// Built-in seven-segment digits
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentFont;

/// Lit segments per digit, bit 0 = top, then clockwise, bit 6 = middle
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

impl GlyphRasterizer for SegmentFont {
    fn rasterize(&self, ch: char, pixel_height: f32) -> Result<Image, FontError> {
        let digit = ch.to_digit(10).ok_or(FontError::MissingGlyph(ch))?;
        // NaN fails the range check too
        if !GLYPH_HEIGHT_RANGE.contains(&pixel_height) {
            return Err(FontError::InvalidSize(pixel_height));
        }

        let h = pixel_height.round() as u32;
        let w = (h / 2).max(3);
        let t = (h / 10).max(1);
        let mid = (h - t) / 2;
        let half = h / 2;

        // (x0, y0, x1, y1), rows counted from the top
        let rects = [
            (0, 0, w, t),
            (w - t, 0, w, half),
            (w - t, half, w, h),
            (0, h - t, w, h),
            (0, half, t, h),
            (0, 0, t, half),
            (0, mid, w, mid + t),
        ];

        let mask = SEGMENTS[digit as usize];
        let len = w
            .checked_mul(h)
            .ok_or(FontError::InvalidSize(pixel_height))?;
        let mut pixels = vec![0u8; len as usize];
        for (bit, &(x0, y0, x1, y1)) in rects.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            for y in y0..y1 {
                for x in x0..x1 {
                    pixels[(y * w + x) as usize] = 255;
                }
            }
        }

        Ok(Image::new(w, h, pixels))
    }
}

#[derive(Debug, Clone, Copy)]
struct DigitMeshes {
    glyphs: [TextureId; 10],
    left: MeshId,
    right: MeshId,
}

/// Two-digit score readout
#[derive(Debug, Clone, Copy)]
pub struct ScoreBoard {
    digits: Option<DigitMeshes>,
}

impl ScoreBoard {
    /// Rasterize '0'..='9' and register the two score meshes
    pub fn setup(renderer: &mut impl Renderer, font: &impl GlyphRasterizer) -> Self {
        let images: Result<Vec<Image>, FontError> = ('0'..='9')
            .map(|ch| font.rasterize(ch, GLYPH_PIXEL_HEIGHT))
            .collect();

        let images = match images {
            Ok(images) => images,
            Err(e) => {
                log::warn!("Score display disabled: {}", e);
                return Self::disabled();
            }
        };

        let mut glyphs = [TextureId(0); 10];
        for (slot, image) in glyphs.iter_mut().zip(images) {
            *slot = renderer.add_texture(image);
        }

        let mut add_mesh = |pos: Vec2| {
            let mut mesh = quad(DIGIT_MESH_SIZE.x, DIGIT_MESH_SIZE.y);
            mesh.texture = Some(glyphs[0]);
            mesh.transform = translation(pos);
            renderer.add_mesh(mesh)
        };
        let left = add_mesh(LEFT_SCORE_POS);
        let right = add_mesh(RIGHT_SCORE_POS);

        Self {
            digits: Some(DigitMeshes {
                glyphs,
                left,
                right,
            }),
        }
    }

    pub fn disabled() -> Self {
        Self { digits: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.digits.is_some()
    }

    /// Texture showing `digit`, if the board is enabled
    pub fn glyph(&self, digit: u8) -> Option<TextureId> {
        self.digits
            .as_ref()
            .and_then(|d| d.glyphs.get(digit as usize).copied())
    }

    pub fn meshes(&self) -> Option<(MeshId, MeshId)> {
        self.digits.as_ref().map(|d| (d.left, d.right))
    }

    /// Point both score meshes at the current digits
    pub fn update(&self, renderer: &mut impl Renderer, score: &Score) {
        let Some(digits) = &self.digits else {
            return;
        };
        for (mesh, side) in [(digits.left, Side::Left), (digits.right, Side::Right)] {
            let value = score.get(side);
            match digits.glyphs.get(value as usize) {
                Some(&texture) => renderer.set_texture(mesh, texture),
                None => log::warn!("No digit glyph for score {}", value),
            }
        }
    }
}
