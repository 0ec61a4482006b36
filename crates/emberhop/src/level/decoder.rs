//! Single-pass scan of a level image into terrain strips, markers and decorations.

use std::fmt;
use glam::Vec2;
use image::RgbaImage;
use crate::components::decoration::Decoration;
use crate::level::palette::{pack_rgba, BlockType};
use crate::level::terrain::TerrainRunBuilder;
use crate::level::{Level, LevelMarker};

/// A pixel whose colour is not in the palette. The pixel is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeWarning {
    pub x: u32,
    pub y: u32,
    pub rgba: [u8; 4],
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba;
        write!(
            f,
            "unknown object at x<{}> y<{}>: r<{}> g<{}> b<{}> a<{}>",
            self.x, self.y, r, g, b, a
        )
    }
}

/// Scan `image` row-major from the top-left corner and build a level.
/// The image is consumed and released before the level is returned.
pub fn decode(image: RgbaImage) -> Level {
    let (width, height) = image.dimensions();
    let mut terrain = TerrainRunBuilder::new(height);
    let mut markers = Vec::new();
    let mut warnings = Vec::new();

    for y in 0..height {
        terrain.begin_row();
        for x in 0..width {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            let color = pack_rgba(r, g, b, a);
            match BlockType::from_packed(color) {
                Some(block) if block.is_terrain() => terrain.ground(x, y, color),
                Some(BlockType::Empty) => terrain.other(color),
                Some(block) => {
                    // Spawn and hazard cells are left to the session to populate.
                    markers.push(LevelMarker {
                        block,
                        cell: (x, y),
                        position: Vec2::new(x as f32, (height - y) as f32),
                    });
                    terrain.other(color);
                }
                None => {
                    let warning = DecodeWarning { x, y, rgba: [r, g, b, a] };
                    log::warn!("{}", warning);
                    warnings.push(warning);
                    terrain.other(color);
                }
            }
        }
    }
    drop(image);

    let level = Level {
        width,
        height,
        strips: terrain.finish(),
        decorations: Decoration::standard_set(width),
        markers,
        warnings,
    };
    log::debug!(
        "level decoded ({}x{}): {} strips, {} markers, {} warnings",
        level.width,
        level.height,
        level.strips.len(),
        level.markers.len(),
        level.warnings.len()
    );
    level
}
