//! Level construction from a raster image.
//!
//! A level is decoded once at load time. Afterwards its collections are fixed:
//! only slice access is handed out, so per-frame updates can mutate entity
//! state but never add or remove entities.

pub mod decoder;
pub mod error;
pub mod palette;
pub mod terrain;

use std::path::Path;
use glam::Vec2;
use image::RgbaImage;
use crate::components::decoration::Decoration;
use crate::components::entity::GameObject;
use crate::components::ground::GroundStrip;

pub use decoder::DecodeWarning;
pub use error::LevelError;
pub use palette::BlockType;

/// A cell the decoder recognised but does not build an entity for
/// (player spawn, fire, ice). The game session decides what to place there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelMarker {
    pub block: BlockType,
    /// Pixel column and row in the source image.
    pub cell: (u32, u32),
    /// Column and height-from-bottom in world units.
    pub position: Vec2,
}

/// A decoded level: terrain strips in scan order plus fixed decorations.
#[derive(Debug, Clone)]
pub struct Level {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) strips: Vec<GroundStrip>,
    pub(crate) decorations: Vec<Decoration>,
    pub(crate) markers: Vec<LevelMarker>,
    pub(crate) warnings: Vec<DecodeWarning>,
}

impl Level {
    /// Load and decode a level image from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        log::debug!("loading level '{}'", path.display());
        let image = image::open(path)
            .map_err(|source| LevelError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        Ok(Self::from_image(image))
    }

    /// Decode a level from an in-memory PNG.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, LevelError> {
        let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
        Ok(Self::from_image(image.into_rgba8()))
    }

    /// Decode an already loaded RGBA image. The buffer is dropped afterwards.
    pub fn from_image(image: RgbaImage) -> Self {
        decoder::decode(image)
    }

    /// Source image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Terrain strips in scan order.
    pub fn strips(&self) -> &[GroundStrip] {
        &self.strips
    }

    /// Decorations, back to front.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn decorations_mut(&mut self) -> &mut [Decoration] {
        &mut self.decorations
    }

    pub fn markers(&self) -> &[LevelMarker] {
        &self.markers
    }

    /// Pixels skipped during decode because their colour was unknown.
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    /// First player spawn marker in scan order.
    pub fn spawn_point(&self) -> Option<&LevelMarker> {
        self.markers.iter().find(|m| m.block == BlockType::PlayerSpawn)
    }

    /// Every entity the level owns, decorations first.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut dyn GameObject> {
        let decorations = self.decorations.iter_mut().map(|d| d as &mut dyn GameObject);
        let strips = self.strips.iter_mut().map(|s| s as &mut dyn GameObject);
        decorations.chain(strips)
    }
}
