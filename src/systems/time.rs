use bevy_ecs::prelude::*;

use crate::resources::levelstatus::LevelStatus;
use crate::resources::worldtime::WorldTime;

/// Start a new frame: advance [`WorldTime`] by `dt` and stamp
/// the frame number on [`LevelStatus`] so completion can record it.
pub fn update_world_time(world: &mut World, dt: f32) {
    let frame = world.resource_mut::<WorldTime>().advance(dt);
    if let Some(mut status) = world.get_resource_mut::<LevelStatus>() {
        status.frame = frame;
    }
}
