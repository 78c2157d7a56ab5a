//! Trigger pulses from switches and platforms to their targets.
//!
//! The trigger pass fires [`TriggerPulse`] for every
//! [`TriggerEffect::Pulse`](crate::components::trigger::TriggerEffect::Pulse).
//! [`observe_trigger_pulse`] delivers it to the target if the target is
//! [`Triggerable`]; pulses aimed at anything else are dropped.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::identity::MapId;
use crate::components::platform::Platform;
use crate::components::trigger::Triggerable;
use crate::resources::eventsink::{CoreEvent, EventSinkRes};

#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerPulse {
    pub source: Entity,
    pub target: Entity,
}

pub fn observe_trigger_pulse(
    pulse: On<TriggerPulse>,
    mut platforms: Query<&mut Platform>,
    ids: Query<&MapId>,
    sink: Res<EventSinkRes>,
) {
    let TriggerPulse { source, target } = *pulse.event();

    let accepted = match platforms.get_mut(target) {
        Ok(mut platform) => platform.on_trigger(),
        Err(_) => false,
    };

    if let (Ok(source), Ok(target)) = (ids.get(source), ids.get(target)) {
        sink.record(CoreEvent::Pulse {
            source: source.0,
            target: target.0,
            accepted,
        });
    }
}
