//! Run-length merging of ground cells into strips.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::ground::GroundStrip;

/// Vertical spacing between image rows, as a fraction of a ground cell's height.
pub const HEIGHT_INCREASE_FACTOR: f32 = 0.25;
/// Shift applied to every strip so the bottom rows sit below the lava line.
pub const HEIGHT_OFFSET: f32 = -2.5;

/// Collects ground strips while the decoder scans one row at a time.
///
/// Only horizontal runs merge: the previous-cell memory is cleared by
/// `begin_row`, so cells at either side of a row boundary never join.
#[derive(Debug)]
pub struct TerrainRunBuilder {
    image_height: u32,
    previous: Option<u32>,
    strips: Vec<GroundStrip>,
    next_id: u32,
}

impl TerrainRunBuilder {
    pub fn new(image_height: u32) -> Self {
        Self {
            image_height,
            previous: None,
            strips: Vec::new(),
            next_id: 1,
        }
    }

    /// World y of a strip starting in image row `y` (row 0 is the top).
    pub fn strip_height(&self, y: u32) -> f32 {
        let base = (self.image_height - y) as f32;
        base * GroundStrip::DIMENSION.y * HEIGHT_INCREASE_FACTOR + HEIGHT_OFFSET
    }

    pub fn begin_row(&mut self) {
        self.previous = None;
    }

    /// A terrain cell of `color` at column `x`, row `y`.
    pub fn ground(&mut self, x: u32, y: u32, color: u32) {
        let extends = self.previous == Some(color);
        self.previous = Some(color);
        if extends {
            if let Some(last) = self.strips.last_mut() {
                last.increase_length(1);
                return;
            }
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let position = Vec2::new(x as f32, self.strip_height(y));
        self.strips.push(GroundStrip::new(id, position));
    }

    /// Any non-terrain cell. Breaks the current run.
    pub fn other(&mut self, color: u32) {
        self.previous = Some(color);
    }

    pub fn finish(self) -> Vec<GroundStrip> {
        self.strips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::GameObject;
    use crate::level::palette::BlockType;

    const GREEN: u32 = BlockType::Ground.color();
    const BLACK: u32 = BlockType::Empty.color();

    #[test]
    fn consecutive_cells_merge() {
        let mut b = TerrainRunBuilder::new(4);
        b.begin_row();
        for x in 0..5 {
            b.ground(x, 3, GREEN);
        }
        b.other(BLACK);
        let strips = b.finish();
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].length(), 5);
        assert_eq!(strips[0].id, EntityId(1));
    }

    #[test]
    fn gap_splits_runs() {
        let mut b = TerrainRunBuilder::new(4);
        b.begin_row();
        b.ground(0, 0, GREEN);
        b.ground(1, 0, GREEN);
        b.other(BLACK);
        b.ground(3, 0, GREEN);
        let strips = b.finish();
        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0].length(), 2);
        assert_eq!(strips[1].length(), 1);
        assert_eq!(strips[1].body().position.x, 3.0);
    }

    #[test]
    fn row_boundary_never_merges() {
        let mut b = TerrainRunBuilder::new(2);
        b.begin_row();
        b.ground(0, 0, GREEN);
        b.begin_row();
        b.ground(0, 1, GREEN);
        let strips = b.finish();
        assert_eq!(strips.len(), 2);
    }

    #[test]
    fn height_grows_toward_the_top() {
        let b = TerrainRunBuilder::new(10);
        // (10 - 9) * 1.5 * 0.25 - 2.5
        assert!((b.strip_height(9) - (-2.125)).abs() < 1e-6);
        // (10 - 0) * 1.5 * 0.25 - 2.5
        assert!((b.strip_height(0) - 1.25).abs() < 1e-6);
    }
}
