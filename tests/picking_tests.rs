//! Integration tests for tile picking and selection
use glam::Vec2;

use isoworld::controller::{TilePicker, TileSelection, SELECTION_RADIUS};
use isoworld::model::{Block, BlockType, Camera, Rotation, WorldGrid};
use isoworld::view::projection::{screen_to_grid, tile_center};

fn flat_world() -> WorldGrid {
    let mut world = WorldGrid::new(10, 10, 6, 1).expect("valid dimensions");
    for x in 0..10 {
        for z in 0..10 {
            for y in 0..6 {
                world.set_block(x, z, y, None);
            }
            world.set_block(x, z, 0, Some(BlockType::Grass));
        }
    }
    world
}

#[test]
fn test_pick_at_tile_center_returns_block() {
    let world = flat_world();
    let visible = world.visible_blocks();
    let picker = TilePicker::default();
    for r in Rotation::ALL {
        for block in &visible {
            let center = tile_center(block.x(), block.y(), block.z(), r);
            assert_eq!(picker.pick(center, &visible, r), Some(*block), "rotation {r}");
        }
    }
}

#[test]
fn test_pick_consistent_with_ground_inverse() {
    let world = flat_world();
    let visible = world.visible_blocks();
    let r = Rotation::DEG_270;
    let target = Block::at(6, 0, 3, BlockType::Grass);
    let center = tile_center(6, 0, 3, r);
    let picked = TilePicker::default().pick(center, &visible, r).expect("hit");
    assert_eq!(picked, target);

    // the sprite centre sits half a diamond above the grid point
    let ground = screen_to_grid(center - Vec2::new(0.0, 8.0), r);
    assert_eq!((ground.x, ground.y), (target.x(), target.z()));
}

#[test]
fn test_taller_neighbour_wins() {
    let mut world = flat_world();
    let r = Rotation::DEG_0;
    // (5,1,5) draws exactly where the ground tile (4,0,4) does
    world.set_block(5, 5, 1, Some(BlockType::Stone));
    let visible = world.visible_blocks();
    let center = tile_center(4, 0, 4, r);
    let picked = TilePicker::default().pick(center, &visible, r);
    assert_eq!(picked, Some(Block::at(5, 1, 5, BlockType::Stone)));
}

#[test]
fn test_pick_miss_is_none() {
    let world = flat_world();
    let visible = world.visible_blocks();
    let far = tile_center(0, 0, 0, Rotation::DEG_0) + Vec2::new(-10.0 * SELECTION_RADIUS, 0.0);
    assert_eq!(TilePicker::default().pick(far, &visible, Rotation::DEG_0), None);
}

#[test]
fn test_custom_radius() {
    let block = Block::at(0, 0, 0, BlockType::Dirt);
    let point = tile_center(0, 0, 0, Rotation::DEG_0) + Vec2::new(30.0, 0.0);
    assert_eq!(TilePicker::default().pick(point, &[block], Rotation::DEG_0), None);
    assert_eq!(TilePicker::new(40.0).pick(point, &[block], Rotation::DEG_0), Some(block));
}

#[test]
fn test_selection_through_camera() {
    let world = flat_world();
    let mut camera = Camera::new(800, 600);
    camera.set_rotation(1);
    camera.zoom = 2.0;
    camera.position = tile_center(3, 0, 7, camera.rotation());

    let mut selection = TileSelection::default();
    assert!(selection.handle_click(&world, &camera, Vec2::new(400.0, 300.0)));
    assert_eq!(selection.selected(), Some(&Block::at(3, 0, 7, BlockType::Grass)));

    selection.clear();
    assert!(!selection.has_selection());
}
