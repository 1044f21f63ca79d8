//! Isometric grid <-> screen transforms.
//!
//! Grid space is (x, y, z) with y as elevation. Screen space is in pixels,
//! 2:1 diamonds, elevation raises a tile straight up by `LAYER_HEIGHT`.
//! Every function takes the camera rotation explicitly.

use glam::{IVec2, Vec2};

use crate::model::camera::Rotation;

pub const TILE_WIDTH: f32 = 32.0;
pub const TILE_HEIGHT: f32 = 32.0;

/// footprint of one ground diamond
pub const GRID_WIDTH: f32 = 32.0;
pub const GRID_HEIGHT: f32 = 16.0;

pub const LAYER_HEIGHT: f32 = 16.0;

/// sprite offset so the diamond sits on its grid point
pub const TILE_OFFSET_X: f32 = TILE_WIDTH / 2.0;
pub const TILE_OFFSET_Y: f32 = 8.0;

const HALF_GRID_WIDTH: f32 = GRID_WIDTH / 2.0;
const HALF_GRID_HEIGHT: f32 = GRID_HEIGHT / 2.0;

pub fn rotate(x: i32, z: i32, rotation: Rotation) -> IVec2 {
    match rotation.quarter_turns() {
        1 => IVec2::new(z, -x),
        2 => IVec2::new(-x, -z),
        3 => IVec2::new(-z, x),
        _ => IVec2::new(x, z),
    }
}

/// Exact inverse of [`rotate`]
pub fn unrotate(rx: i32, rz: i32, rotation: Rotation) -> IVec2 {
    match rotation.quarter_turns() {
        1 => IVec2::new(-rz, rx),
        2 => IVec2::new(-rx, -rz),
        3 => IVec2::new(rz, -rx),
        _ => IVec2::new(rx, rz),
    }
}

pub fn grid_to_screen(x: i32, y: i32, z: i32, rotation: Rotation) -> Vec2 {
    let r = rotate(x, z, rotation);
    Vec2::new(
        (r.x - r.y) as f32 * HALF_GRID_WIDTH,
        (r.x + r.y) as f32 * HALF_GRID_HEIGHT - y as f32 * LAYER_HEIGHT,
    )
}

/// Ground-plane (y = 0) inverse of [`grid_to_screen`], rounded to the nearest cell.
///
/// Elevation cannot be recovered from a single screen point: a block at y = n
/// lands on the cell whose ground diamond shares its screen position.
pub fn screen_to_grid(screen: Vec2, rotation: Rotation) -> IVec2 {
    let gx = screen.x / HALF_GRID_WIDTH;
    let gy = screen.y / HALF_GRID_HEIGHT;
    let rx = round_half_up((gx + gy) * 0.5);
    let rz = round_half_up((gy - gx) * 0.5);
    unrotate(rx, rz, rotation)
}

// halves round towards +inf, so -0.5 -> 0
fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Bottom-left corner of the tile sprite
pub fn tile_draw_position(x: i32, y: i32, z: i32, rotation: Rotation) -> Vec2 {
    grid_to_screen(x, y, z, rotation) - Vec2::new(TILE_OFFSET_X, TILE_OFFSET_Y)
}

/// Centre of the tile sprite
pub fn tile_center(x: i32, y: i32, z: i32, rotation: Rotation) -> Vec2 {
    tile_draw_position(x, y, z, rotation) + Vec2::new(TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0)
}

/// Corners of the ground diamond around a grid point: top, right, bottom, left
pub fn tile_diamond(x: i32, y: i32, z: i32, rotation: Rotation) -> [Vec2; 4] {
    let c = grid_to_screen(x, y, z, rotation);
    [
        c + Vec2::new(0.0, HALF_GRID_HEIGHT),
        c + Vec2::new(HALF_GRID_WIDTH, 0.0),
        c - Vec2::new(0.0, HALF_GRID_HEIGHT),
        c - Vec2::new(HALF_GRID_WIDTH, 0.0),
    ]
}

/// Screen position of the middle column of a `width` x `depth` world
pub fn world_center(width: i32, depth: i32, rotation: Rotation) -> Vec2 {
    grid_to_screen(width / 2, 0, depth / 2, rotation)
}
