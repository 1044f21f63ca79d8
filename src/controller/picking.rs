use glam::Vec2;
use tracing::trace;

use crate::model::camera::Rotation;
use crate::model::world::Block;
use crate::view::projection;

/// Default search radius around a tile centre, in pixels
pub const SELECTION_RADIUS: f32 = 20.0;

/// Screen point -> block under it.
///
/// Candidates are tiles whose sprite centre lies strictly within `radius`.
/// Taller tiles win over shorter ones (they are painted later), distance only
/// decides between tiles of the same elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePicker {
    pub radius: f32,
}

impl Default for TilePicker {
    fn default() -> Self {
        Self { radius: SELECTION_RADIUS }
    }
}

impl TilePicker {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// `screen` is in world pixels, i.e. already unprojected from pan/zoom
    pub fn pick(&self, screen: Vec2, visible: &[Block], rotation: Rotation) -> Option<Block> {
        let mut best: Option<(Block, f32)> = None;

        for block in visible {
            let center = projection::tile_center(block.x(), block.y(), block.z(), rotation);
            let distance = screen.distance(center);
            if distance >= self.radius {
                continue;
            }

            let better = match best {
                None => true,
                Some((current, current_distance)) => {
                    block.y() > current.y() || (block.y() == current.y() && distance < current_distance)
                }
            };
            if better {
                best = Some((*block, distance));
            }
        }

        match best {
            Some((block, distance)) => trace!(%block, distance, "picked tile"),
            None => trace!(x = screen.x, y = screen.y, "no tile under pointer"),
        }
        best.map(|(block, _)| block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::world::BlockType;

    #[test]
    fn exact_center_hits() {
        let block = Block::at(3, 1, 4, BlockType::Grass);
        let center = projection::tile_center(3, 1, 4, Rotation::DEG_0);
        assert_eq!(TilePicker::default().pick(center, &[block], Rotation::DEG_0), Some(block));
    }

    #[test]
    fn miss_outside_radius() {
        let block = Block::at(0, 0, 0, BlockType::Grass);
        let far = projection::tile_center(0, 0, 0, Rotation::DEG_0) + Vec2::new(20.0, 0.0);
        assert_eq!(TilePicker::default().pick(far, &[block], Rotation::DEG_0), None);
        assert_eq!(TilePicker::default().pick(Vec2::ZERO, &[], Rotation::DEG_0), None);
    }

    #[test]
    fn taller_tile_beats_closer_tile() {
        let r = Rotation::DEG_0;
        let low = Block::at(1, 0, 1, BlockType::Water);
        let high = Block::at(2, 1, 2, BlockType::Stone);
        // a point right on the low tile that is still within range of the high one
        let point = projection::tile_center(1, 0, 1, r);
        let high_center = projection::tile_center(2, 1, 2, r);
        assert!(point.distance(high_center) < SELECTION_RADIUS);

        let picked = TilePicker::default().pick(point, &[low, high], r);
        assert_eq!(picked, Some(high));
    }

    #[test]
    fn closer_tile_wins_at_same_height() {
        let r = Rotation::DEG_0;
        let a = Block::at(0, 0, 0, BlockType::Grass);
        let b = Block::at(1, 0, 0, BlockType::Grass);
        let point = projection::tile_center(1, 0, 0, r) - Vec2::new(4.0, 0.0);
        assert_eq!(TilePicker::default().pick(point, &[a, b], r), Some(b));
        assert_eq!(TilePicker::default().pick(point, &[b, a], r), Some(b));
    }

    #[test]
    fn rotation_moves_targets() {
        let block = Block::at(2, 0, 0, BlockType::Dirt);
        let center = projection::tile_center(2, 0, 0, Rotation::DEG_90);
        let picker = TilePicker::default();
        assert_eq!(picker.pick(center, &[block], Rotation::DEG_90), Some(block));
        assert_eq!(picker.pick(center, &[block], Rotation::DEG_0), None);
    }
}
