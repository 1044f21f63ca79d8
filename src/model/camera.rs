use std::fmt;

use glam::Vec2;

use crate::view::projection;

/// Camera rotation in quarter turns, always in 0..4
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rotation(u8);

impl Rotation {
    pub const DEG_0: Rotation = Rotation(0);
    pub const DEG_90: Rotation = Rotation(1);
    pub const DEG_180: Rotation = Rotation(2);
    pub const DEG_270: Rotation = Rotation(3);

    pub const ALL: [Rotation; 4] = [Self::DEG_0, Self::DEG_90, Self::DEG_180, Self::DEG_270];

    /// Any integer is accepted, rotation is cyclic
    pub fn new(quarter_turns: i32) -> Self {
        Rotation(quarter_turns.rem_euclid(4) as u8)
    }

    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    pub fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    pub fn clockwise(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    pub fn counter_clockwise(self) -> Self {
        Rotation((self.0 + 3) % 4)
    }
}

impl From<i32> for Rotation {
    fn from(v: i32) -> Self {
        Rotation::new(v)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Per-viewer view state: rotation plus 2D pan/zoom over the projected world.
///
/// World pixels are y-up, window pixels are y-down with the origin at the
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    rotation: Rotation,
    /// world pixel shown at the window centre
    pub position: Vec2,
    /// world pixels per window pixel
    pub zoom: f32,
    /// window size in pixels
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rotation: Rotation::DEG_0,
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, quarter_turns: i32) {
        self.rotation = Rotation::new(quarter_turns);
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotation = self.rotation.counter_clockwise();
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = Rotation::DEG_0;
    }

    /// Window pixel -> world pixel
    pub fn unproject(&self, window: Vec2) -> Vec2 {
        let centered = Vec2::new(
            window.x - self.viewport.x * 0.5,
            self.viewport.y * 0.5 - window.y,
        );
        self.position + centered * self.zoom
    }

    /// World pixel -> window pixel
    pub fn project(&self, world: Vec2) -> Vec2 {
        let centered = (world - self.position) / self.zoom;
        Vec2::new(
            centered.x + self.viewport.x * 0.5,
            self.viewport.y * 0.5 - centered.y,
        )
    }

    /// Looks at the middle of a `width` x `depth` world under the current rotation
    pub fn center_on_world(&mut self, width: i32, depth: i32) {
        self.position = projection::world_center(width, depth, self.rotation);
    }
}
