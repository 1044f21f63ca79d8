use std::mem;

use tracing::{debug, info, trace};

use super::block::{Block, BlockType};
use super::terrain::{TerrainConfig, TerrainGenerator};
use crate::error::WorldError;
use crate::utils::Position;

/// Dimensions, seed and terrain tuning of a world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    /// X dimension (grid columns)
    pub width: i32,
    /// Z dimension (grid rows)
    pub depth: i32,
    /// Y dimension (elevation)
    pub height: i32,
    pub seed: i64,
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 25,
            depth: 25,
            height: 8,
            seed: 12345,
            terrain: TerrainConfig::default(),
        }
    }
}

/// Dense block grid, fully generated on construction.
///
/// Cells are stored flat at `(x * depth + z) * height + y`, so one column is
/// a contiguous slice. `None` = air.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGrid {
    width: i32,
    depth: i32,
    height: i32,
    seed: i64,
    blocks: Vec<Option<Block>>,
    terrain: TerrainGenerator,

    // tracks number of non-air cells
    n_blocks: usize,
}

impl WorldGrid {
    pub fn new(width: i32, depth: i32, height: i32, seed: i64) -> Result<Self, WorldError> {
        Self::with_config(WorldConfig {
            width,
            depth,
            height,
            seed,
            ..WorldConfig::default()
        })
    }

    pub fn with_config(config: WorldConfig) -> Result<Self, WorldError> {
        let WorldConfig { width, depth, height, seed, terrain } = config;
        if width <= 0 || depth <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, depth, height });
        }

        let n_cells = (width as usize)
            .checked_mul(depth as usize)
            .and_then(|n| n.checked_mul(height as usize))
            // a Vec holds at most isize::MAX bytes
            .filter(|n| {
                n.checked_mul(mem::size_of::<Option<Block>>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(WorldError::TooLarge { width, depth, height })?;
        let mut world = Self {
            width,
            depth,
            height,
            seed,
            blocks: vec![None; n_cells],
            terrain: TerrainGenerator::with_config(seed, terrain),
            n_blocks: 0,
        };
        world.generate();
        Ok(world)
    }

    /// Fills every column from the terrain generator. Called once by the constructors.
    fn generate(&mut self) {
        info!(width = self.width, depth = self.depth, height = self.height, seed = self.seed, "generating world");

        for x in 0..self.width {
            for z in 0..self.depth {
                self.generate_column(x, z);
            }
        }

        info!(blocks = self.n_blocks, "world generated");
        if tracing::enabled!(tracing::Level::DEBUG) {
            for t in BlockType::ALL {
                let count = self.blocks.iter().flatten().filter(|b| b.block_type() == t).count();
                debug!(block_type = %t, count, "block census");
            }
        }
    }

    fn generate_column(&mut self, x: i32, z: i32) {
        let surface = self
            .terrain
            .terrain_height(x, z)
            .min(self.height - 2)
            .max(0);

        // surface first, then the layers beneath it
        let surface_type = self.terrain.surface_block_type(x, z, surface);
        self.place(x, z, surface, Some(surface_type));

        for y in 0..surface {
            let block_type = self.terrain.subsurface_block_type(y, surface);
            self.place(x, z, y, block_type);
        }
    }

    fn place(&mut self, x: i32, z: i32, y: i32, block_type: Option<BlockType>) {
        if let Some(idx) = self.index(x, z, y) {
            let new = block_type.map(|t| Block::at(x, y, z, t));
            let target = &mut self.blocks[idx];
            match (target.is_some(), new.is_some()) {
                (false, true) => self.n_blocks += 1,
                (true, false) => self.n_blocks -= 1,
                _ => {}
            }
            *target = new;
        }
    }

    fn index(&self, x: i32, z: i32, y: i32) -> Option<usize> {
        if !self.is_in_bounds(x, z, y) {
            return None;
        }
        let (x, z, y) = (x as usize, z as usize, y as usize);
        Some((x * self.depth as usize + z) * self.height as usize + y)
    }

    fn column(&self, x: i32, z: i32) -> &[Option<Block>] {
        let start = (x as usize * self.depth as usize + z as usize) * self.height as usize;
        &self.blocks[start..start + self.height as usize]
    }

    pub fn is_in_bounds(&self, x: i32, z: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.depth).contains(&z) && (0..self.height).contains(&y)
    }

    /// `None` for air and for out-of-bounds coordinates
    pub fn get_block(&self, x: i32, z: i32, y: i32) -> Option<Block> {
        self.index(x, z, y).and_then(|idx| self.blocks[idx])
    }

    pub fn get_block_at(&self, position: Position) -> Option<Block> {
        self.get_block(position.x, position.z, position.y)
    }

    /// Places (`Some`) or removes (`None`) a block. Returns false when out of bounds.
    pub fn set_block(&mut self, x: i32, z: i32, y: i32, block_type: Option<BlockType>) -> bool {
        if !self.is_in_bounds(x, z, y) {
            trace!(x, y, z, "rejected out-of-bounds write");
            return false;
        }
        self.place(x, z, y, block_type);
        true
    }

    pub fn set_block_at(&mut self, position: Position, block_type: Option<BlockType>) -> bool {
        self.set_block(position.x, position.z, position.y, block_type)
    }

    /// Every block in the world, column by column. Not meant for per-frame use.
    pub fn all_blocks(&self) -> Vec<Block> {
        self.blocks.iter().flatten().copied().collect()
    }

    /// Topmost block of every non-empty column
    pub fn visible_blocks(&self) -> Vec<Block> {
        let mut visible = Vec::with_capacity(self.width as usize * self.depth as usize);
        for x in 0..self.width {
            for z in 0..self.depth {
                if let Some(block) = self.column(x, z).iter().rev().flatten().next() {
                    visible.push(*block);
                }
            }
        }
        visible
    }

    /// Elevation of the topmost block in a column, `None` if empty or out of bounds
    pub fn surface_height(&self, x: i32, z: i32) -> Option<i32> {
        if !self.is_in_bounds(x, z, 0) {
            return None;
        }
        self.column(x, z).iter().rev().flatten().next().map(|b| b.y())
    }

    pub fn block_count(&self) -> usize {
        self.n_blocks
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn terrain(&self) -> &TerrainGenerator {
        &self.terrain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> WorldGrid {
        WorldGrid::new(6, 5, 4, 77).unwrap()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, d, h) in [(0, 5, 5), (5, -1, 5), (5, 5, 0)] {
            assert_eq!(
                WorldGrid::new(w, d, h, 1),
                Err(WorldError::InvalidDimensions { width: w, depth: d, height: h })
            );
        }
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        let err = WorldGrid::new(i32::MAX, i32::MAX, i32::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            WorldError::TooLarge { width: i32::MAX, depth: i32::MAX, height: i32::MAX }
        );
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let world = small_world();
        assert_eq!(world.get_block(-1, 0, 0), None);
        assert_eq!(world.get_block(0, 5, 0), None);
        assert_eq!(world.get_block(0, 0, 4), None);
    }

    #[test]
    fn out_of_bounds_writes_are_rejected() {
        let mut world = small_world();
        let before = world.block_count();
        assert!(!world.set_block(6, 0, 0, Some(BlockType::Stone)));
        assert!(!world.set_block(0, 0, -1, None));
        assert_eq!(world.block_count(), before);
    }

    #[test]
    fn set_block_places_and_removes() {
        let mut world = small_world();
        assert!(world.set_block(2, 3, 3, Some(BlockType::Dirt)));
        assert_eq!(world.get_block(2, 3, 3), Some(Block::at(2, 3, 3, BlockType::Dirt)));
        assert_eq!(world.surface_height(2, 3), Some(3));

        assert!(world.set_block(2, 3, 3, None));
        assert_eq!(world.get_block(2, 3, 3), None);
    }

    #[test]
    fn every_column_has_a_ground_block() {
        let world = small_world();
        for x in 0..world.width() {
            for z in 0..world.depth() {
                assert!(world.get_block(x, z, 0).is_some(), "column ({x}, {z}) has no floor");
            }
        }
    }

    #[test]
    fn surface_is_clamped_below_ceiling() {
        let world = WorldGrid::new(10, 10, 2, 3).unwrap();
        for block in world.all_blocks() {
            assert_eq!(block.y(), 0);
        }
    }

    #[test]
    fn block_count_matches_scan() {
        let mut world = small_world();
        world.set_block(0, 0, 3, Some(BlockType::Stone));
        world.set_block(0, 0, 0, None);
        assert_eq!(world.block_count(), world.all_blocks().len());
    }

    #[test]
    fn visible_blocks_are_column_tops() {
        let world = small_world();
        let visible = world.visible_blocks();
        assert_eq!(visible.len(), 30);
        for block in visible {
            assert_eq!(world.surface_height(block.x(), block.z()), Some(block.y()));
        }
    }

    #[test]
    fn visible_blocks_skip_empty_columns() {
        let mut world = small_world();
        for y in 0..world.height() {
            world.set_block(1, 1, y, None);
        }
        let visible = world.visible_blocks();
        assert_eq!(visible.len(), 29);
        assert!(!visible.iter().any(|b| b.x() == 1 && b.z() == 1));
        assert_eq!(world.surface_height(1, 1), None);
    }
}
