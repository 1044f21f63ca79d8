pub mod block;
pub mod grid;
pub mod noise;
pub mod terrain;

pub use block::{Block, BlockProperties, BlockType};
pub use grid::{WorldConfig, WorldGrid};
pub use noise::NoiseField;
pub use terrain::{Biome, TerrainConfig, TerrainGenerator};
