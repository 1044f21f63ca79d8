use std::env;
use std::error::Error;

use glam::Vec2;
use tracing::{info, warn};

// Import from the library crate
use isoworld::{
    logging,
    model, view, controller,
};

use model::{Camera, WorldConfig, WorldGrid};
use controller::{CameraCommand, CameraController, TileSelection};
use view::{ascii, draw_list};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// `isoworld [seed] [width depth height]`
fn parse_config(args: &[String]) -> WorldConfig {
    let mut config = WorldConfig::default();

    if let Some(arg) = args.first() {
        match arg.parse::<i64>() {
            Ok(seed) => config.seed = seed,
            Err(_) => warn!(arg = %arg, "ignoring unparsable seed"),
        }
    }

    let dim = |i: usize| args.get(i).and_then(|s| s.parse::<i32>().ok());
    match (dim(1), dim(2), dim(3)) {
        (Some(w), Some(d), Some(h)) => {
            config.width = w;
            config.depth = d;
            config.height = h;
        }
        _ if args.len() > 1 => warn!(args = ?&args[1..], "ignoring dimensions, expected three i32 values"),
        _ => {}
    }
    config
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_config(&args);
    let world = WorldGrid::with_config(config)?;

    info!(
        width = world.width(),
        depth = world.depth(),
        height = world.height(),
        seed = world.seed(),
        blocks = world.block_count(),
        visible = world.visible_blocks().len(),
        "world ready"
    );

    println!("surface:\n{}", ascii::top_down(&world));
    println!("elevation:\n{}", ascii::elevation(&world));

    let controller = CameraController::new();
    let mut camera = Camera::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    camera.center_on_world(world.width(), world.depth());

    for _ in 0..4 {
        let commands = draw_list(&world, &camera, None);
        if let (Some(first), Some(last)) = (commands.first(), commands.last()) {
            info!(
                rotation = %camera.rotation(),
                sprites = commands.len(),
                first = %first.block,
                last = %last.block,
                "paint order"
            );
        }
        controller.apply(&mut camera, CameraCommand::RotateClockwise, 0.0);
        camera.center_on_world(world.width(), world.depth());
    }

    let mut selection = TileSelection::default();
    let window_centre = Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);
    if selection.handle_click(&world, &camera, window_centre) {
        if let Some(block) = selection.selected() {
            info!(%block, walkable = block.is_walkable(), "picked at window centre");
        }
    } else {
        info!("nothing under window centre");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_default_world() {
        assert_eq!(parse_config(&[]), WorldConfig::default());
    }

    #[test]
    fn seed_and_dimensions() {
        let config = parse_config(&args(&["-7", "10", "12", "6"]));
        assert_eq!(config.seed, -7);
        assert_eq!((config.width, config.depth, config.height), (10, 12, 6));
    }

    #[test]
    fn out_of_range_dimensions_are_not_truncated() {
        let config = parse_config(&args(&["1", "4294967297", "5", "5"]));
        assert_eq!(config.seed, 1);
        let defaults = WorldConfig::default();
        assert_eq!(
            (config.width, config.depth, config.height),
            (defaults.width, defaults.depth, defaults.height)
        );
    }
}
