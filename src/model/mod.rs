// MODEL: World data and viewer state
pub mod world;
pub mod camera;

pub use world::{Block, BlockType, WorldConfig, WorldGrid};
pub use camera::{Camera, Rotation};
