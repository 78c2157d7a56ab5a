//! Level completion.
//!
//! Fired once when the player reaches a keystone. [`observe_level_completed`]
//! records it in [`LevelStatus`] so the outer loop can move on to the next
//! level.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::identity::MapId;
use crate::resources::eventsink::{CoreEvent, EventSinkRes};
use crate::resources::levelstatus::LevelStatus;

#[derive(Event, Debug, Clone, Copy)]
pub struct LevelCompleted {
    pub keystone: Entity,
}

pub fn observe_level_completed(
    completed: On<LevelCompleted>,
    mut status: ResMut<LevelStatus>,
    ids: Query<&MapId>,
    sink: Res<EventSinkRes>,
) {
    if status.complete {
        return;
    }
    status.complete = true;
    status.frames_to_complete = Some(status.frame);

    let keystone = completed.event().keystone;
    if let Ok(id) = ids.get(keystone) {
        sink.record(CoreEvent::LevelCompleted { keystone: id.0 });
    }
    info!("Level completed at frame {}", status.frame);
}
