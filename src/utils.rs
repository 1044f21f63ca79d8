use std::fmt;

use glam::IVec3;

/// coordinates of a block in grid space
///
/// x = grid column, z = grid row, y = elevation
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn with_y(&self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    pub fn squared_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).pow(2) + (self.y - other.y).pow(2) + (self.z - other.z).pow(2)
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }

    /// true for the 26 cells surrounding this one (diagonals included)
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        (self.x - other.x).abs() <= 1
            && (self.y - other.y).abs() <= 1
            && (self.z - other.z).abs() <= 1
            && self != other
    }
}

impl From<IVec3> for Position {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position> for IVec3 {
    fn from(p: Position) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
