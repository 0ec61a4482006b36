//! Fixed scenery sized from the level's pixel width.

use glam::Vec2;
use crate::components::entity::{Body, GameObject};
use crate::components::layer::RenderLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Volcano,
    Mountains,
    Trees,
    LavaOverlay,
}

/// A decoration entity. `length` is the horizontal extent the renderer tiles
/// across, in level cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub layer: RenderLayer,
    pub length: f32,
    pub visible: bool,
    body: Body,
}

impl Decoration {
    /// Backdrop spanning the whole level.
    pub fn volcano(level_width: u32) -> Self {
        let width = level_width as f32;
        Self {
            kind: DecorationKind::Volcano,
            layer: RenderLayer::Background,
            length: width,
            visible: true,
            body: Body::with_dimension(Vec2::new(width, 10.0)),
        }
    }

    /// Mountain band; padded by two tiles on each side so edges never show.
    pub fn mountains(level_width: u32) -> Self {
        let dimension = Vec2::new(10.0, 2.0);
        Self {
            kind: DecorationKind::Mountains,
            layer: RenderLayer::Midground,
            length: level_width as f32 + dimension.x * 2.0,
            visible: true,
            body: Body::with_dimension(dimension)
                .with_origin(Vec2::new(-dimension.x * 2.0, 0.0))
                .with_position(Vec2::new(-1.0, -1.0)),
        }
    }

    /// Tree line. Built but hidden; the renderer skips invisible decorations.
    pub fn trees(level_width: u32) -> Self {
        Self {
            kind: DecorationKind::Trees,
            layer: RenderLayer::Midground,
            length: level_width as f32,
            visible: false,
            body: Body::with_dimension(Vec2::new(10.0, 2.0)).with_position(Vec2::new(0.0, 2.0)),
        }
    }

    /// Lava strip drawn over the bottom of the level, centred on its origin.
    pub fn lava_overlay(level_width: u32) -> Self {
        let width = level_width as f32;
        let dimension = Vec2::new(width * 10.0, 3.0);
        Self {
            kind: DecorationKind::LavaOverlay,
            layer: RenderLayer::Foreground,
            length: width,
            visible: true,
            body: Body::with_dimension(dimension)
                .with_origin(Vec2::new(-dimension.x / 2.0, 0.0))
                .with_position(Vec2::new(0.0, -3.75)),
        }
    }

    /// Every decoration a level carries, back to front.
    pub fn standard_set(level_width: u32) -> Vec<Self> {
        vec![
            Self::volcano(level_width),
            Self::mountains(level_width),
            Self::trees(level_width),
            Self::lava_overlay(level_width),
        ]
    }
}

impl GameObject for Decoration {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
