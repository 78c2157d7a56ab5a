//! Behavior interfaces for triggerable entities.
//!
//! Trigger components never reach into the world themselves. Given a
//! [`Contact`] snapshot they update their own state and answer with an
//! [`EnterResponse`]: whether to track the overlap, plus a list of
//! [`TriggerEffect`]s the trigger pass applies afterwards. This keeps every
//! behavior testable without a `World`.

use bevy_ecs::prelude::Entity;
use smallvec::SmallVec;

use crate::events::audio::AudioCue;
use crate::geometry::Rect;

/// Snapshot of a trigger/partner pair taken when an enter is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub trigger: Entity,
    pub trigger_rect: Rect,
    pub other: Entity,
    pub other_floor: i32,
    /// The partner is the player.
    pub player: bool,
    /// The partner implements [`TeleportTarget`].
    pub teleportable: bool,
    /// Resolved target of the trigger, if it has one.
    pub target: Option<Entity>,
}

/// Whether an enter should be remembered by the overlap tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnterVerdict {
    #[default]
    Track,
    /// Do not track; the same contact is evaluated again next frame.
    Reject,
}

/// Side effect requested by a trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerEffect {
    /// Push the actor out of `obstacle` and clear its inputs.
    PushBack { actor: Entity, obstacle: Rect },
    /// Move the actor inside `into`.
    Teleport { actor: Entity, into: Rect },
    /// Fire `on_trigger` on the target.
    Pulse { target: Entity },
    Cue(AudioCue),
    /// The level is won.
    Complete,
}

pub type Effects = SmallVec<[TriggerEffect; 2]>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnterResponse {
    pub verdict: EnterVerdict,
    pub effects: Effects,
}

impl EnterResponse {
    pub fn track() -> Self {
        Self::default()
    }

    pub fn reject() -> Self {
        Self {
            verdict: EnterVerdict::Reject,
            effects: Effects::new(),
        }
    }

    pub fn with(mut self, effect: TriggerEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_rejected(&self) -> bool {
        self.verdict == EnterVerdict::Reject
    }
}

/// Reactions of a triggerable entity to overlap transitions.
pub trait TriggerBehavior {
    fn on_enter(&mut self, contact: &Contact) -> EnterResponse;

    fn on_exit(&mut self, _other: Entity) -> Effects {
        Effects::new()
    }
}

/// Entities that a teleport can relocate.
pub trait TeleportTarget {
    fn teleport_to(&mut self, area: &Rect);
}

/// Entities that accept pulses from switches and other triggers.
pub trait Triggerable {
    /// Returns `true` when the pulse changed state.
    fn on_trigger(&mut self) -> bool;
}
