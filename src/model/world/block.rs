use std::fmt;

use crate::utils::Position;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Grass = 0,
    Dirt = 1,
    Stone = 2,
    Water = 3,
}

/// Static properties of a block type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockProperties {
    /// index into the shared texture atlas
    pub tile_index: u32,
    pub display_name: &'static str,
    pub walkable: bool,
    pub solid: bool,
}

/// indexed by `BlockType as usize`
static PROPERTIES: [BlockProperties; 4] = [
    BlockProperties { tile_index: 0, display_name: "Grass", walkable: true, solid: true },
    BlockProperties { tile_index: 1, display_name: "Dirt", walkable: true, solid: true },
    BlockProperties { tile_index: 2, display_name: "Stone", walkable: true, solid: true },
    BlockProperties { tile_index: 3, display_name: "Water", walkable: false, solid: false },
];

impl BlockType {
    pub const ALL: [BlockType; 4] = [BlockType::Grass, BlockType::Dirt, BlockType::Stone, BlockType::Water];

    pub fn properties(self) -> &'static BlockProperties {
        &PROPERTIES[self as usize]
    }

    pub fn tile_index(self) -> u32 {
        self.properties().tile_index
    }

    pub fn display_name(self) -> &'static str {
        self.properties().display_name
    }

    pub fn is_walkable(self) -> bool {
        self.properties().walkable
    }

    pub fn is_solid(self) -> bool {
        self.properties().solid
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A placed block. The position never changes, the type may.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    position: Position,
    block_type: BlockType,
}

impl Block {
    pub fn new(position: Position, block_type: BlockType) -> Self {
        Self { position, block_type }
    }

    pub fn at(x: i32, y: i32, z: i32, block_type: BlockType) -> Self {
        Self::new(Position::new(x, y, z), block_type)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn z(&self) -> i32 {
        self.position.z
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn set_block_type(&mut self, block_type: BlockType) {
        self.block_type = block_type;
    }

    pub fn is_walkable(&self) -> bool {
        self.block_type.is_walkable()
    }

    pub fn is_solid(&self) -> bool {
        self.block_type.is_solid()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block[position={}, type={}]", self.position, self.block_type)
    }
}
