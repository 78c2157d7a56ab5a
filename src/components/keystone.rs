use bevy_ecs::prelude::Component;

use crate::components::trigger::{Contact, EnterResponse, TriggerBehavior, TriggerEffect};

/// Win marker. The player touching it completes the level.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Keystone;

impl TriggerBehavior for Keystone {
    fn on_enter(&mut self, contact: &Contact) -> EnterResponse {
        if contact.player {
            EnterResponse::track().with(TriggerEffect::Complete)
        } else {
            EnterResponse::track()
        }
    }
}
