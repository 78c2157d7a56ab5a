use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::resources::camera::Camera;
use crate::resources::levelstatus::LevelStatus;

/// Advance the shake and ease the camera toward the player's centre.
pub fn update_camera(mut camera: ResMut<Camera>, status: Res<LevelStatus>, bodies: Query<&Body>) {
    camera.advance_shake();
    if let Some(body) = status.player.and_then(|player| bodies.get(player).ok()) {
        camera.follow(body.rect.center());
    }
}
