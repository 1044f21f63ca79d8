// terrain.rs - Column-based terrain decisions
//
// Three independent noise fields are derived from one seed:
//
//   height (seed)        -> how tall a column is
//   biome  (seed + 1000) -> plains vs. mountain surfaces
//   detail (seed + 2000) -> small patches (rock edges, dirt spots)
//
// For each column the surface block is decided first, everything below it
// follows from the depth under the surface.

use super::block::BlockType;
use super::noise::NoiseField;

const BIOME_SEED_OFFSET: i64 = 1000;
const DETAIL_SEED_OFFSET: i64 = 2000;

/// Coarse biome label, informational only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Desert,
    Plains,
    Mountains,
}

/// Configuration for terrain generation parameters
///
/// Usage:
///   // Use default configuration
///   let gen = TerrainGenerator::new(seed);
///
///   // Or customize:
///   let mut config = TerrainConfig::default();
///   config.height_scale = 5.0;  // Taller columns
///   let gen = TerrainGenerator::with_config(seed, config);
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainConfig {
    // Noise frequencies
    pub height_frequency: f32,
    pub biome_frequency: f32,
    pub detail_frequency: f32,

    // Column height
    pub base_height: i32,
    pub height_scale: f32,

    // Surface rules
    pub beach_detail_threshold: f32,
    pub plains_max_height: i32,
    pub dirt_patch_threshold: f32,
    pub mountain_biome_threshold: f32,

    // Biome labels
    pub desert_biome_max: f32,
    pub plains_biome_max: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            height_frequency: 1.0,
            biome_frequency: 0.05,
            detail_frequency: 0.3,

            base_height: 0,
            height_scale: 3.0,

            // rock edge on height-1 shores
            beach_detail_threshold: 0.4,
            plains_max_height: 2,
            dirt_patch_threshold: 0.75,
            mountain_biome_threshold: 0.5,

            desert_biome_max: 0.3,
            plains_biome_max: 0.6,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGenerator {
    pub config: TerrainConfig,
    height_noise: NoiseField,
    biome_noise: NoiseField,
    detail_noise: NoiseField,
}

impl TerrainGenerator {
    pub fn new(seed: i64) -> Self {
        Self::with_config(seed, TerrainConfig::default())
    }

    pub fn with_config(seed: i64, config: TerrainConfig) -> Self {
        Self {
            config,
            height_noise: NoiseField::new(seed),
            biome_noise: NoiseField::new(seed.wrapping_add(BIOME_SEED_OFFSET)),
            detail_noise: NoiseField::new(seed.wrapping_add(DETAIL_SEED_OFFSET)),
        }
    }

    /// Unclamped column height, never negative. The world clamps it to its own height.
    pub fn terrain_height(&self, x: i32, z: i32) -> i32 {
        let f = self.config.height_frequency;
        let noise = self.height_noise.noise(x as f32 * f, z as f32 * f);
        let height = self.config.base_height + (noise * self.config.height_scale) as i32;
        height.max(0)
    }

    fn biome_value(&self, x: i32, z: i32) -> f32 {
        let f = self.config.biome_frequency;
        self.biome_noise.noise(x as f32 * f, z as f32 * f)
    }

    fn detail_value(&self, x: i32, z: i32) -> f32 {
        let f = self.config.detail_frequency;
        self.detail_noise.noise(x as f32 * f, z as f32 * f)
    }

    /// Block placed at the top of a column of the given height
    pub fn surface_block_type(&self, x: i32, z: i32, height: i32) -> BlockType {
        let cfg = &self.config;
        let detail = self.detail_value(x, z);

        if height <= 0 {
            return BlockType::Water;
        }
        if height == 1 && detail > cfg.beach_detail_threshold {
            return BlockType::Stone;
        }

        if height <= cfg.plains_max_height {
            return if detail > cfg.dirt_patch_threshold {
                BlockType::Dirt
            } else {
                BlockType::Grass
            };
        }

        if self.biome_value(x, z) > cfg.mountain_biome_threshold {
            BlockType::Stone
        } else {
            BlockType::Grass
        }
    }

    /// Block below the surface. `None` for air, including `y == surface_height`,
    /// which belongs to [`TerrainGenerator::surface_block_type`].
    pub fn subsurface_block_type(&self, y: i32, surface_height: i32) -> Option<BlockType> {
        match surface_height - y {
            1 => Some(BlockType::Dirt),
            d if d >= 2 => Some(BlockType::Stone),
            _ => None,
        }
    }

    pub fn biome(&self, x: i32, z: i32) -> Biome {
        let value = self.biome_value(x, z);
        if value < self.config.desert_biome_max {
            Biome::Desert
        } else if value < self.config.plains_biome_max {
            Biome::Plains
        } else {
            Biome::Mountains
        }
    }
}
