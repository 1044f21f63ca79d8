// CONTROLLER: Camera commands and pointer interaction
pub mod camera_controller;
pub mod picking;
pub mod selection;

pub use camera_controller::{CameraCommand, CameraController};
pub use picking::{TilePicker, SELECTION_RADIUS};
pub use selection::TileSelection;
