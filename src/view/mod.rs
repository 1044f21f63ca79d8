// VIEW: Projection, paint order and text maps
pub mod projection;
pub mod render;
pub mod ascii;

pub use render::{draw_list, DrawCommand, Rect, RenderOrderSolver};
