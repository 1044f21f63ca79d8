use std::cmp::Ordering;

use crate::model::camera::{Camera, Rotation};
use crate::model::world::{Block, WorldGrid};
use crate::view::projection::{self, TILE_HEIGHT, TILE_WIDTH};

/// Painter's-algorithm ordering for visible blocks.
///
/// Key, in priority order:
/// 1. elevation ascending
/// 2. rotated `rx + rz` descending (further along the view diagonal first)
/// 3. rotated `rx` descending
pub struct RenderOrderSolver;

impl RenderOrderSolver {
    pub fn compare(a: &Block, b: &Block, rotation: Rotation) -> Ordering {
        a.y().cmp(&b.y()).then_with(|| {
            let ra = projection::rotate(a.x(), a.z(), rotation);
            let rb = projection::rotate(b.x(), b.z(), rotation);
            (rb.x + rb.y)
                .cmp(&(ra.x + ra.y))
                .then_with(|| rb.x.cmp(&ra.x))
        })
    }

    /// Sorts in place. Must be redone after every rotation change.
    pub fn sort(blocks: &mut [Block], rotation: Rotation) {
        blocks.sort_by(|a, b| Self::compare(a, b, rotation));
    }

    pub fn sorted(mut blocks: Vec<Block>, rotation: Rotation) -> Vec<Block> {
        Self::sort(&mut blocks, rotation);
        blocks
    }
}

/// Screen-space rectangle, origin at the bottom-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// One sprite for the renderer, which resolves `tile_index` to a texture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub block: Block,
    pub tile_index: u32,
    pub rect: Rect,
    pub highlighted: bool,
}

impl DrawCommand {
    pub fn new(block: Block, rotation: Rotation, highlighted: bool) -> Self {
        let pos = projection::tile_draw_position(block.x(), block.y(), block.z(), rotation);
        Self {
            block,
            tile_index: block.block_type().tile_index(),
            rect: Rect { x: pos.x, y: pos.y, width: TILE_WIDTH, height: TILE_HEIGHT },
            highlighted,
        }
    }
}

/// Visible blocks of `world` in paint order for `camera`, with the selected one flagged
pub fn draw_list(world: &WorldGrid, camera: &Camera, selected: Option<&Block>) -> Vec<DrawCommand> {
    let rotation = camera.rotation();
    let blocks = RenderOrderSolver::sorted(world.visible_blocks(), rotation);
    blocks
        .into_iter()
        .map(|block| {
            let highlighted = selected.is_some_and(|s| s.position() == block.position());
            DrawCommand::new(block, rotation, highlighted)
        })
        .collect()
}
