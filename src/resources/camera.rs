//! Shared 2D camera resource.
//!
//! The camera follows the player with exponential smoothing and can be shaken
//! horizontally. Render systems read [`Camera::view_rect`] to cull and offset
//! draw commands; no projection happens here, the renderer applies the zoom.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::geometry::Rect;

/// Shake length in frames used by the debug shake action.
pub const DEFAULT_SHAKES: u32 = 32;
/// Horizontal shake distance in map units.
pub const DEFAULT_SHAKE_DISTANCE: i32 = 4;

#[derive(Resource, Debug, Clone)]
pub struct Camera {
    center: Vec2,
    /// Visible area in map units.
    pub view_size: (i32, i32),
    /// Each frame the camera covers `1 / smoothing` of the remaining distance.
    pub smoothing: u32,
    shakes: u32,
    shake_distance: i32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new((320, 180), 10)
    }
}

impl Camera {
    pub fn new(view_size: (i32, i32), smoothing: u32) -> Self {
        Self {
            center: Vec2::ZERO,
            view_size,
            smoothing: smoothing.max(1),
            shakes: 0,
            shake_distance: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Jump straight to `center`, e.g. when a level starts.
    pub fn snap_to(&mut self, center: (i32, i32)) {
        self.center = Vec2::new(center.0 as f32, center.1 as f32);
    }

    /// Ease toward `target`.
    pub fn follow(&mut self, target: (i32, i32)) {
        let target = Vec2::new(target.0 as f32, target.1 as f32);
        self.center += (target - self.center) / self.smoothing as f32;
    }

    /// Start a shake of `shakes` frames alternating by `distance` units.
    pub fn shake(&mut self, shakes: u32, distance: i32) {
        self.shakes = shakes;
        self.shake_distance = distance;
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_distance != 0
    }

    /// Flip the shake direction once. Clears the offset when the shake is
    /// over.
    pub fn advance_shake(&mut self) {
        if self.shakes > 0 {
            self.shake_distance = -self.shake_distance;
            self.shakes -= 1;
        } else {
            self.shake_distance = 0;
        }
    }

    /// Visible area in map coordinates, shake included.
    pub fn view_rect(&self) -> Rect {
        let (w, h) = self.view_size;
        let cx = self.center.x.round() as i32 + self.shake_distance;
        let cy = self.center.y.round() as i32;
        Rect::new(cx - w / 2, cy - h / 2, w, h)
    }
}
