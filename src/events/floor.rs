//! Floor change notifications.
//!
//! Whenever a write to [`Depth`](crate::components::depth::Depth) moves an
//! entity to another floor, the writing system emits [`FloorChanged`].
//! Listeners read these messages; collision gating itself always reads the
//! current floor directly.

use bevy_ecs::prelude::*;

use crate::components::identity::MapId;
use crate::resources::eventsink::{CoreEvent, EventSinkRes};

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorChanged {
    pub entity: Entity,
    pub from: i32,
    pub to: i32,
}

/// Listener that reports floor changes to the event sink.
pub fn report_floor_changes(
    mut reader: MessageReader<FloorChanged>,
    ids: Query<&MapId>,
    sink: Res<EventSinkRes>,
) {
    for change in reader.read() {
        let Ok(id) = ids.get(change.entity) else {
            continue;
        };
        sink.record(CoreEvent::FloorChanged {
            id: id.0,
            from: change.from,
            to: change.to,
        });
    }
}

/// Advance the ECS message queue for [`FloorChanged`].
///
/// Run this once per frame after every listener.
pub fn update_floor_changes(mut msgs: ResMut<Messages<FloorChanged>>) {
    msgs.update();
}
