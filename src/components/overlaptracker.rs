//! Enter/exit bookkeeping for triggerable entities.
//!
//! Overlap discovery is pull-based: the trigger pass calls [`contact`] for
//! every overlapping pair it finds each frame, and [`end_frame`] once per
//! frame afterwards. The tracker only turns that stream of per-frame contacts
//! into discrete enter and exit transitions; what happens on those
//! transitions is up to the entity's [`TriggerBehavior`].
//!
//! [`contact`]: OverlapTracker::contact
//! [`end_frame`]: OverlapTracker::end_frame
//! [`TriggerBehavior`]: crate::components::trigger::TriggerBehavior

use bevy_ecs::prelude::{Component, Entity};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Classification of one contact reported during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// The entity touched itself; nothing to do.
    Ignored,
    /// First frame of a new overlap interval; run the enter callback.
    Entering,
    /// Overlap already accepted on an earlier frame.
    Staying,
}

#[derive(Debug, Clone, Default, Component)]
pub struct OverlapTracker {
    /// Partners whose enter was accepted and that have not exited yet.
    active: FxHashSet<Entity>,
    /// Partners seen overlapping during the current frame.
    this_frame: FxHashSet<Entity>,
}

impl OverlapTracker {
    /// Classify a contact between `me` and `other`.
    pub fn contact(&self, me: Entity, other: Entity) -> ContactPhase {
        if me == other {
            ContactPhase::Ignored
        } else if self.active.contains(&other) {
            ContactPhase::Staying
        } else {
            ContactPhase::Entering
        }
    }

    /// Record `other` as overlapping this frame.
    pub fn track(&mut self, other: Entity) {
        self.this_frame.insert(other);
        self.active.insert(other);
    }

    /// Close the frame. Returns partners that were active but not seen this
    /// frame; they are removed from the active set.
    pub fn end_frame(&mut self) -> SmallVec<[Entity; 4]> {
        let exiting: SmallVec<[Entity; 4]> = self
            .active
            .iter()
            .filter(|e| !self.this_frame.contains(*e))
            .copied()
            .collect();
        for e in &exiting {
            self.active.remove(e);
        }
        self.this_frame.clear();
        exiting
    }

    pub fn is_active(&self, other: Entity) -> bool {
        self.active.contains(&other)
    }

    pub fn active(&self) -> impl Iterator<Item = Entity> + '_ {
        self.active.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn two_entities() -> (Entity, Entity) {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        (a, b)
    }

    /// Runs one frame, returning (entered, exited).
    fn frame(tracker: &mut OverlapTracker, me: Entity, overlapping: &[Entity]) -> (usize, usize) {
        let mut entered = 0;
        for other in overlapping {
            match tracker.contact(me, *other) {
                ContactPhase::Ignored => continue,
                ContactPhase::Entering => entered += 1,
                ContactPhase::Staying => {}
            }
            tracker.track(*other);
        }
        (entered, tracker.end_frame().len())
    }

    #[test]
    fn self_contact_is_ignored() {
        let (me, _) = two_entities();
        let tracker = OverlapTracker::default();
        assert_eq!(tracker.contact(me, me), ContactPhase::Ignored);
    }

    #[test]
    fn enter_and_exit_once_per_interval() {
        let (me, other) = two_entities();
        let mut tracker = OverlapTracker::default();

        let pattern = [true, true, true, false, false, true, false];
        let mut enters = 0;
        let mut exits = 0;
        for overlapping in pattern {
            let partners: &[Entity] = if overlapping { &[other] } else { &[] };
            let (entered, exited) = frame(&mut tracker, me, partners);
            enters += entered;
            exits += exited;
        }
        assert_eq!(enters, 2);
        assert_eq!(exits, 2);
        assert!(tracker.is_empty());
    }

    #[test]
    fn exit_fires_on_first_frame_without_contact() {
        let (me, other) = two_entities();
        let mut tracker = OverlapTracker::default();
        assert_eq!(frame(&mut tracker, me, &[other]), (1, 0));
        assert!(tracker.is_active(other));
        assert_eq!(frame(&mut tracker, me, &[]), (0, 1));
        assert!(!tracker.is_active(other));
    }

    #[test]
    fn untracked_rejection_reenters_every_frame() {
        let (me, other) = two_entities();
        let mut tracker = OverlapTracker::default();
        for _ in 0..3 {
            // Rejected enter: contact classified but never tracked.
            assert_eq!(tracker.contact(me, other), ContactPhase::Entering);
            assert!(tracker.end_frame().is_empty());
        }
    }
}
