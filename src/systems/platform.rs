//! Platform motion.
//!
//! Platforms move their height one unit per tick toward their destination
//! floor. Everything standing on a moving platform rides along: its `z` is
//! set to the platform's height on every tick the platform moves.
use bevy_ecs::prelude::*;

use crate::components::depth::{Depth, FloorChange};
use crate::components::overlaptracker::OverlapTracker;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::events::floor::FloorChanged;

fn changed(entity: Entity, change: FloorChange) -> FloorChanged {
    FloorChanged {
        entity,
        from: change.from,
        to: change.to,
    }
}

pub fn platform_motion(
    mut platforms: Query<(Entity, &mut Platform, &mut Depth, &OverlapTracker), Without<Player>>,
    mut riders: Query<(Entity, &mut Depth), With<Player>>,
    mut floor_changes: MessageWriter<FloorChanged>,
) {
    for (entity, mut platform, mut depth, tracker) in platforms.iter_mut() {
        if !platform.step() {
            continue;
        }
        let height = platform.height();
        if let Some(change) = depth.set_z(height) {
            floor_changes.write(changed(entity, change));
        }

        for rider in tracker.active() {
            let Ok((rider, mut rider_depth)) = riders.get_mut(rider) else {
                continue;
            };
            if let Some(change) = rider_depth.set_z(height) {
                floor_changes.write(changed(rider, change));
            }
        }
    }
}
