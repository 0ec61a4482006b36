use glam::Vec2;
use crate::components::entity::{Body, GameObject};
use crate::components::layer::RenderLayer;
use crate::level::palette::BlockType;
use crate::level::LevelMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Fire,
    Ice,
}

/// A small pickup-style hazard placed by the game session from a level marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub kind: HazardKind,
    pub layer: RenderLayer,
    body: Body,
    /// Set by the collision collaborator once touched; collected hazards are not drawn.
    pub collected: bool,
}

impl Hazard {
    pub const DIMENSION: Vec2 = Vec2::new(0.5, 0.5);

    pub fn new(kind: HazardKind, position: Vec2) -> Self {
        Self {
            kind,
            layer: RenderLayer::Objects,
            body: Body::with_dimension(Self::DIMENSION).with_position(position),
            collected: false,
        }
    }

    /// Build the hazard a Fire or Ice marker stands for. Other markers yield None.
    pub fn from_marker(marker: &LevelMarker) -> Option<Self> {
        let kind = match marker.block {
            BlockType::Fire => HazardKind::Fire,
            BlockType::Ice => HazardKind::Ice,
            _ => return None,
        };
        Some(Self::new(kind, marker.position))
    }
}

impl GameObject for Hazard {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(block: BlockType) -> LevelMarker {
        LevelMarker {
            block,
            cell: (3, 1),
            position: Vec2::new(3.0, 4.0),
        }
    }

    #[test]
    fn fire_marker_becomes_fire_hazard() {
        let hazard = Hazard::from_marker(&marker(BlockType::Fire)).unwrap();
        assert_eq!(hazard.kind, HazardKind::Fire);
        assert_eq!(hazard.body().position, Vec2::new(3.0, 4.0));
        assert_eq!(hazard.body().bounds.size, Hazard::DIMENSION);
        assert!(!hazard.collected);
        assert_eq!(hazard.layer, RenderLayer::Objects);
    }

    #[test]
    fn hazards_draw_over_terrain() {
        use crate::api::types::EntityId;
        use crate::components::ground::GroundStrip;
        let strip = GroundStrip::new(EntityId(1), Vec2::ZERO);
        let hazard = Hazard::new(HazardKind::Ice, Vec2::ZERO);
        assert!(strip.layer < hazard.layer);
    }

    #[test]
    fn spawn_marker_is_not_a_hazard() {
        assert!(Hazard::from_marker(&marker(BlockType::PlayerSpawn)).is_none());
        assert_eq!(
            Hazard::from_marker(&marker(BlockType::Ice)).map(|h| h.kind),
            Some(HazardKind::Ice)
        );
    }
}
