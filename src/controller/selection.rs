use glam::Vec2;
use tracing::debug;

use super::picking::TilePicker;
use crate::model::world::{Block, WorldGrid};
use crate::model::Camera;

/// Currently selected tile, updated from pointer clicks
pub struct TileSelection {
    selected: Option<Block>,
    enabled: bool,
    picker: TilePicker,
}

impl Default for TileSelection {
    fn default() -> Self {
        Self::new(TilePicker::default())
    }
}

impl TileSelection {
    pub fn new(picker: TilePicker) -> Self {
        Self { selected: None, enabled: true, picker }
    }

    /// Select the tile under a window-space click. Returns true if something was hit.
    ///
    /// A miss clears the selection. Clicks are ignored while disabled.
    pub fn handle_click(&mut self, world: &WorldGrid, camera: &Camera, window: Vec2) -> bool {
        if !self.enabled {
            return false;
        }

        let point = camera.unproject(window);
        self.selected = self.picker.pick(point, &world.visible_blocks(), camera.rotation());

        match &self.selected {
            Some(block) => debug!(%block, "tile selected"),
            None => debug!("selection cleared"),
        }
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Block> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
