use glam::Vec2;
use tracing::debug;

use crate::model::Camera;

/// Commands an input layer can send to a camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    RotateClockwise,
    RotateCounterClockwise,
    /// absolute quarter turns, normalised
    SetRotation(i32),
    ResetRotation,
    /// direction in world pixels, scaled by speed and frame time
    Pan(Vec2),
    /// scroll amount, positive zooms out
    Zoom(f32),
}

/// Handles camera movement, zoom and rotation
pub struct CameraController {
    pub move_speed: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            move_speed: 500.0,
            zoom_min: 0.3,
            zoom_max: 3.0,
            zoom_step: 0.1,
        }
    }

    pub fn apply(&self, camera: &mut Camera, command: CameraCommand, dt: f32) {
        match command {
            CameraCommand::RotateClockwise => camera.rotate_clockwise(),
            CameraCommand::RotateCounterClockwise => camera.rotate_counter_clockwise(),
            CameraCommand::SetRotation(r) => camera.set_rotation(r),
            CameraCommand::ResetRotation => camera.reset_rotation(),
            CameraCommand::Pan(direction) => self.pan(camera, direction, dt),
            CameraCommand::Zoom(amount) => self.zoom(camera, amount),
        }
        if matches!(
            command,
            CameraCommand::RotateClockwise
                | CameraCommand::RotateCounterClockwise
                | CameraCommand::SetRotation(_)
                | CameraCommand::ResetRotation
        ) {
            debug!(rotation = %camera.rotation(), "camera rotated");
        }
    }

    /// Move the camera along `direction` (normalised if longer than 1)
    pub fn pan(&self, camera: &mut Camera, direction: Vec2, dt: f32) {
        if direction.length_squared() > 0.0 {
            camera.position += direction.clamp_length_max(1.0) * self.move_speed * dt;
        }
    }

    pub fn zoom(&self, camera: &mut Camera, amount: f32) {
        camera.zoom = (camera.zoom + amount * self.zoom_step).clamp(self.zoom_min, self.zoom_max);
    }
}
