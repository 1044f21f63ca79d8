//! Text maps of the world for logs and terminals.
//!
//! One character per column, one line per z row.

use crate::model::world::{BlockType, WorldGrid};

pub fn block_char(block_type: BlockType) -> char {
    match block_type {
        BlockType::Water => '~',
        BlockType::Grass => '"',
        BlockType::Dirt => ':',
        BlockType::Stone => '^',
    }
}

/// Surface block type per column, space for empty columns
pub fn top_down(world: &WorldGrid) -> String {
    render(world, |x, z| {
        world
            .surface_height(x, z)
            .and_then(|y| world.get_block(x, z, y))
            .map_or(' ', |b| block_char(b.block_type()))
    })
}

/// Marks columns too tall for a single base-36 digit
pub const ELEVATION_OVERFLOW: char = '+';

/// Surface elevation per column as a base-36 digit, space for empty columns
pub fn elevation(world: &WorldGrid) -> String {
    render(world, |x, z| {
        world.surface_height(x, z).map_or(' ', |y| {
            char::from_digit(y as u32, 36).unwrap_or(ELEVATION_OVERFLOW)
        })
    })
}

fn render(world: &WorldGrid, cell: impl Fn(i32, i32) -> char) -> String {
    let mut out = String::with_capacity(((world.width() + 1) * world.depth()) as usize);
    for z in 0..world.depth() {
        for x in 0..world.width() {
            out.push(cell(x, z));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_shape_matches_world() {
        let world = WorldGrid::new(7, 3, 5, 1).unwrap();
        let map = top_down(&world);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 7));
    }

    #[test]
    fn reflects_edits() {
        let mut world = WorldGrid::new(3, 3, 6, 1).unwrap();
        world.set_block(1, 0, 5, Some(BlockType::Stone));
        for y in 0..6 {
            world.set_block(2, 0, y, None);
        }
        let first_row = top_down(&world).lines().next().unwrap_or_default().to_string();
        assert_eq!(first_row.chars().nth(1), Some('^'));
        assert_eq!(first_row.chars().nth(2), Some(' '));

        let heights = elevation(&world);
        assert_eq!(heights.lines().next().and_then(|l| l.chars().nth(1)), Some('5'));
    }

    #[test]
    fn tall_columns_are_marked_not_blank() {
        let mut world = WorldGrid::new(3, 1, 40, 1).unwrap();
        world.set_block(0, 0, 35, Some(BlockType::Stone));
        world.set_block(1, 0, 38, Some(BlockType::Stone));
        for y in 0..40 {
            world.set_block(2, 0, y, None);
        }
        let row = elevation(&world).lines().next().unwrap_or_default().to_string();
        assert_eq!(row, format!("z{ELEVATION_OVERFLOW} "));
    }
}
