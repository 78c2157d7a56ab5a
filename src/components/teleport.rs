use bevy_ecs::prelude::Component;

use crate::components::trigger::{Contact, EnterResponse, TriggerBehavior, TriggerEffect};
use crate::geometry::Rect;

/// Sends whoever enters to a [`TeleportDestination`].
#[derive(Component, Debug, Clone, PartialEq, Eq, Default)]
pub struct Teleport {
    /// Map id of the destination object, from the `destination` property.
    pub destination_id: Option<u32>,
    /// Destination area, filled in when the level is wired.
    pub destination: Option<Rect>,
}

impl Teleport {
    pub fn new(destination_id: Option<u32>) -> Self {
        Self {
            destination_id,
            destination: None,
        }
    }
}

/// Marker for the landing area of a teleport.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TeleportDestination;

impl TriggerBehavior for Teleport {
    fn on_enter(&mut self, contact: &Contact) -> EnterResponse {
        match self.destination {
            Some(into) if contact.teleportable => {
                EnterResponse::track().with(TriggerEffect::Teleport {
                    actor: contact.other,
                    into,
                })
            }
            _ => EnterResponse::track(),
        }
    }
}
