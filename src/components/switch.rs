use bevy_ecs::prelude::{Component, Entity};

use crate::components::trigger::{
    Contact, EnterResponse, Effects, TriggerBehavior, TriggerEffect,
};
use crate::events::audio::AudioCue;

/// Sprite frame shown while nothing stands on the switch.
pub const RELEASED_FRAME: usize = 0;
/// Sprite frame shown while pressed.
pub const PRESSED_FRAME: usize = 1;

/// Pressure pad that pulses its target when stepped on.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default)]
pub struct Switch {
    pub floor: i32,
    /// Accepted partners that have not exited yet.
    pressed_by: u32,
}

impl Switch {
    pub fn new(floor: i32) -> Self {
        Self {
            floor,
            pressed_by: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pressed_by > 0
    }

    pub fn frame(&self) -> usize {
        if self.is_active() {
            PRESSED_FRAME
        } else {
            RELEASED_FRAME
        }
    }
}

impl TriggerBehavior for Switch {
    /// Entities on another floor pass over the switch without pressing it.
    /// They are not tracked, so the press happens as soon as they land on
    /// the switch's floor while still standing on it.
    fn on_enter(&mut self, contact: &Contact) -> EnterResponse {
        if contact.other_floor != self.floor {
            return EnterResponse::reject();
        }

        let mut response = EnterResponse::track();
        if !self.is_active() {
            response = response.with(TriggerEffect::Cue(AudioCue::SwitchPress));
        }
        self.pressed_by += 1;
        if let Some(target) = contact.target {
            response = response.with(TriggerEffect::Pulse { target });
        }
        response
    }

    /// Released once the last partner steps off.
    fn on_exit(&mut self, _other: Entity) -> Effects {
        self.pressed_by = self.pressed_by.saturating_sub(1);
        Effects::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use bevy_ecs::world::World;

    fn contact(other_floor: i32, with_target: bool) -> Contact {
        let mut world = World::new();
        let trigger = world.spawn_empty().id();
        let other = world.spawn_empty().id();
        let target = world.spawn_empty().id();
        Contact {
            trigger,
            trigger_rect: Rect::new(0, 0, 16, 16),
            other,
            other_floor,
            player: true,
            teleportable: true,
            target: with_target.then_some(target),
        }
    }

    #[test]
    fn press_on_same_floor_pulses_and_cues() {
        let mut switch = Switch::new(0);
        let c = contact(0, true);
        let response = switch.on_enter(&c);
        assert!(!response.is_rejected());
        assert!(switch.is_active());
        assert_eq!(switch.frame(), PRESSED_FRAME);
        assert_eq!(
            response.effects.as_slice(),
            &[
                TriggerEffect::Cue(AudioCue::SwitchPress),
                TriggerEffect::Pulse {
                    target: c.target.unwrap()
                }
            ]
        );
    }

    #[test]
    fn other_floor_does_not_press() {
        let mut switch = Switch::new(0);
        let response = switch.on_enter(&contact(1, true));
        assert!(response.is_rejected());
        assert!(response.effects.is_empty());
        assert!(!switch.is_active());
    }

    #[test]
    fn exit_releases() {
        let mut switch = Switch::new(0);
        let c = contact(0, false);
        switch.on_enter(&c);
        switch.on_exit(c.other);
        assert!(!switch.is_active());
        assert_eq!(switch.frame(), RELEASED_FRAME);
    }

    #[test]
    fn stays_pressed_until_last_partner_exits() {
        let mut switch = Switch::new(0);
        let first = contact(0, false);
        let second = contact(0, false);
        switch.on_enter(&first);
        let response = switch.on_enter(&second);
        assert!(!response.effects.contains(&TriggerEffect::Cue(AudioCue::SwitchPress)));

        switch.on_exit(first.other);
        assert!(switch.is_active());
        assert_eq!(switch.frame(), PRESSED_FRAME);

        switch.on_exit(second.other);
        assert!(!switch.is_active());
    }
}
