//! Platforms that move between floors.
//!
//! A platform's `floor` is its destination; `height` is where it currently
//! is. Each tick `height` moves one unit toward `floor * FLOOR_HEIGHT` and
//! stops there. Actors can only step onto a platform that has stopped on
//! their own floor; anything else pushes them back.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::depth::FLOOR_HEIGHT;
use crate::components::trigger::{
    Contact, EnterResponse, Effects, TriggerBehavior, TriggerEffect, Triggerable,
};

/// Which floor transitions a pulse may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Floor 0 to floor 1 only.
    Rising,
    /// Floor 1 to floor 0 only.
    Falling,
    /// Either way.
    RisingFalling,
}

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub kind: PlatformKind,
    floor: i32,
    height: i32,
}

impl Platform {
    /// A platform resting on `floor`.
    pub fn new(kind: PlatformKind, floor: i32) -> Self {
        Self {
            kind,
            floor,
            height: floor * FLOOR_HEIGHT,
        }
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn target_height(&self) -> i32 {
        self.floor * FLOOR_HEIGHT
    }

    pub fn rising(&self) -> bool {
        self.height < self.target_height()
    }

    pub fn falling(&self) -> bool {
        self.height > self.target_height()
    }

    pub fn stopped(&self) -> bool {
        self.height == self.target_height()
    }

    /// Change the destination floor. Motion starts on the next [`step`].
    ///
    /// [`step`]: Platform::step
    pub fn set_floor(&mut self, floor: i32) {
        self.floor = floor;
    }

    /// Move one unit toward the destination. Returns `true` if it moved.
    pub fn step(&mut self) -> bool {
        if self.falling() {
            self.height -= 1;
            true
        } else if self.rising() {
            self.height += 1;
            true
        } else {
            false
        }
    }
}

impl Triggerable for Platform {
    /// Pulses are ignored while moving.
    fn on_trigger(&mut self) -> bool {
        if !self.stopped() {
            return false;
        }
        let next = match (self.kind, self.floor) {
            (PlatformKind::Rising, 0) => 1,
            (PlatformKind::Falling, 1) => 0,
            (PlatformKind::RisingFalling, 0) => 1,
            (PlatformKind::RisingFalling, _) => 0,
            _ => return false,
        };
        self.floor = next;
        true
    }
}

impl TriggerBehavior for Platform {
    fn on_enter(&mut self, contact: &Contact) -> EnterResponse {
        if !self.stopped() || contact.other_floor != self.floor {
            return EnterResponse::reject().with(TriggerEffect::PushBack {
                actor: contact.other,
                obstacle: contact.trigger_rect,
            });
        }
        match contact.target {
            Some(target) => EnterResponse::track().with(TriggerEffect::Pulse { target }),
            None => EnterResponse::track(),
        }
    }

    // Exits are always allowed, even while moving.
    fn on_exit(&mut self, _other: Entity) -> Effects {
        Effects::new()
    }
}
