//! Horizontally extensible terrain strip.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::entity::{Body, GameObject, Rect};
use crate::components::layer::RenderLayer;

/// A run of merged ground cells, drawn as `length` repeated tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundStrip {
    pub id: EntityId,
    pub layer: RenderLayer,
    body: Body,
    length: u32,
}

impl GroundStrip {
    /// Size of one ground cell in world units.
    pub const DIMENSION: Vec2 = Vec2::new(1.0, 1.5);

    /// A single-cell strip at `position`.
    pub fn new(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            layer: RenderLayer::Terrain,
            body: Body::with_dimension(Self::DIMENSION).with_position(position),
            length: 1,
        }
    }

    /// Number of merged cells (always at least 1).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Tile repeat count for the renderer.
    pub fn repeat_count(&self) -> u32 {
        self.length
    }

    /// Total width in world units.
    pub fn span(&self) -> f32 {
        self.length as f32 * self.body.dimension.x
    }

    /// World-space rectangle covering every merged cell.
    pub fn span_bounds(&self) -> Rect {
        Rect {
            pos: self.body.position,
            size: Vec2::new(self.span(), self.body.dimension.y),
        }
    }

    /// Extend the strip by `amount` cells. Only the level decoder grows strips.
    ///
    /// # Panics
    /// Panics if `amount` is zero.
    pub(crate) fn increase_length(&mut self, amount: u32) {
        assert!(amount > 0, "ground strip length can only grow");
        self.length += amount;
    }
}

impl GameObject for GroundStrip {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
