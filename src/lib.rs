//! Seeded block worlds drawn in isometric projection.
//!
//! - [`model`]: terrain noise, the block grid and the per-viewer camera
//! - [`view`]: grid <-> screen transforms and painter's-algorithm ordering
//! - [`controller`]: camera commands and tile picking
//!
//! ```no_run
//! use isoworld::model::{Camera, WorldGrid};
//! use isoworld::view::draw_list;
//!
//! let world = WorldGrid::new(25, 25, 8, 12345).unwrap();
//! let camera = Camera::new(800, 600);
//! for cmd in draw_list(&world, &camera, None) {
//!     // blit atlas tile `cmd.tile_index` into `cmd.rect`
//!     let _ = cmd;
//! }
//! ```

pub mod error;
pub mod logging;
pub mod utils;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use error::WorldError;
pub use utils::Position;
