//! Trigger pass.
//!
//! Once per frame, after movement and wall collision, every trigger is tested
//! against every player's feet. New overlaps run the trigger's enter
//! behavior, overlaps that ended run its exit behavior, and the effects both
//! return are applied to the world before the next pair is tested.
//!
//! Dispatch goes through the fixed [`ObjectKind`] set; each kind's component
//! implements [`TriggerBehavior`].

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::body::Body;
use crate::components::depth::Depth;
use crate::components::identity::{Kind, MapId};
use crate::components::keystone::Keystone;
use crate::components::overlaptracker::{ContactPhase, OverlapTracker};
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::switch::Switch;
use crate::components::target::TargetLink;
use crate::components::teleport::Teleport;
use crate::components::trigger::{
    Contact, Effects, EnterResponse, TeleportTarget, TriggerBehavior, TriggerEffect,
};
use crate::events::audio::AudioCue;
use crate::events::level::LevelCompleted;
use crate::events::trigger::TriggerPulse;
use crate::geometry::Rect;
use crate::level::ObjectKind;
use crate::resources::eventsink::{CoreEvent, EventSinkRes};

#[derive(Debug, Clone, Copy)]
struct TriggerInfo {
    entity: Entity,
    id: u32,
    kind: ObjectKind,
    rect: Rect,
    target: Option<Entity>,
}

pub fn resolve_triggers(world: &mut World) {
    let triggers: Vec<TriggerInfo> = {
        let mut query = world.query_filtered::<(
            Entity,
            &MapId,
            &Kind,
            &Body,
            Option<&TargetLink>,
        ), With<OverlapTracker>>();
        query
            .iter(world)
            .map(|(entity, id, kind, body, link)| TriggerInfo {
                entity,
                id: id.0,
                kind: kind.0,
                rect: body.rect,
                target: link.and_then(TargetLink::target),
            })
            .collect()
    };
    let actors: SmallVec<[Entity; 2]> = {
        let mut query = world.query_filtered::<Entity, With<Player>>();
        query.iter(world).collect()
    };

    for trigger in &triggers {
        for &actor in &actors {
            // Earlier effects may have moved the actor this frame.
            let Some(feet) = world.get::<Player>(actor).map(Player::feet) else {
                continue;
            };
            if !trigger.rect.intersects(&feet) {
                continue;
            }
            contact(world, trigger, actor);
        }
    }

    for trigger in &triggers {
        let exiting = match world.get_mut::<OverlapTracker>(trigger.entity) {
            Some(mut tracker) => tracker.end_frame(),
            None => continue,
        };
        for other in exiting {
            let effects = dispatch_exit(world, trigger, other);
            record_pair(world, trigger, other, |trigger, other| CoreEvent::Exit {
                trigger,
                other,
            });
            apply_effects(world, trigger, effects);
        }
    }
}

/// Feed one overlapping pair to the trigger's tracker.
fn contact(world: &mut World, trigger: &TriggerInfo, actor: Entity) {
    let phase = match world.get::<OverlapTracker>(trigger.entity) {
        Some(tracker) => tracker.contact(trigger.entity, actor),
        None => return,
    };

    match phase {
        ContactPhase::Ignored => {}
        ContactPhase::Staying => track(world, trigger.entity, actor),
        ContactPhase::Entering => {
            let other_floor = world.get::<Depth>(actor).map(Depth::floor).unwrap_or(0);
            let is_player = world.get::<Player>(actor).is_some();
            let contact = Contact {
                trigger: trigger.entity,
                trigger_rect: trigger.rect,
                other: actor,
                other_floor,
                player: is_player,
                teleportable: is_player,
                target: trigger.target,
            };
            let Some(response) = dispatch_enter(world, trigger, &contact) else {
                return;
            };

            if response.is_rejected() {
                record_pair(world, trigger, actor, |trigger, other| {
                    CoreEvent::Rejected { trigger, other }
                });
            } else {
                track(world, trigger.entity, actor);
                record_pair(world, trigger, actor, |trigger, other| CoreEvent::Enter {
                    trigger,
                    other,
                });
            }
            apply_effects(world, trigger, response.effects);
        }
    }
}

fn track(world: &mut World, trigger: Entity, other: Entity) {
    if let Some(mut tracker) = world.get_mut::<OverlapTracker>(trigger) {
        tracker.track(other);
    }
}

fn enter_with<T: Component<Mutability = Mutable> + TriggerBehavior>(
    world: &mut World,
    trigger: Entity,
    contact: &Contact,
) -> Option<EnterResponse> {
    world
        .get_mut::<T>(trigger)
        .map(|mut behavior| behavior.on_enter(contact))
}

fn exit_with<T: Component<Mutability = Mutable> + TriggerBehavior>(
    world: &mut World,
    trigger: Entity,
    other: Entity,
) -> Effects {
    world
        .get_mut::<T>(trigger)
        .map(|mut behavior| behavior.on_exit(other))
        .unwrap_or_default()
}

fn dispatch_enter(
    world: &mut World,
    trigger: &TriggerInfo,
    contact: &Contact,
) -> Option<EnterResponse> {
    match trigger.kind {
        ObjectKind::Teleport => enter_with::<Teleport>(world, trigger.entity, contact),
        ObjectKind::RisingPlatform
        | ObjectKind::FallingPlatform
        | ObjectKind::RisingFallingPlatform => {
            enter_with::<Platform>(world, trigger.entity, contact)
        }
        ObjectKind::Switch => enter_with::<Switch>(world, trigger.entity, contact),
        ObjectKind::Keystone => enter_with::<Keystone>(world, trigger.entity, contact),
        ObjectKind::Player | ObjectKind::TeleportDestination | ObjectKind::Wall => None,
    }
}

fn dispatch_exit(world: &mut World, trigger: &TriggerInfo, other: Entity) -> Effects {
    match trigger.kind {
        ObjectKind::Teleport => exit_with::<Teleport>(world, trigger.entity, other),
        ObjectKind::RisingPlatform
        | ObjectKind::FallingPlatform
        | ObjectKind::RisingFallingPlatform => exit_with::<Platform>(world, trigger.entity, other),
        ObjectKind::Switch => exit_with::<Switch>(world, trigger.entity, other),
        ObjectKind::Keystone => exit_with::<Keystone>(world, trigger.entity, other),
        ObjectKind::Player | ObjectKind::TeleportDestination | ObjectKind::Wall => Effects::new(),
    }
}

fn apply_effects(world: &mut World, trigger: &TriggerInfo, effects: Effects) {
    for effect in effects {
        match effect {
            TriggerEffect::PushBack { actor, obstacle } => {
                let Some(mut player) = world.get_mut::<Player>(actor) else {
                    continue;
                };
                if !player.push_back(&[obstacle]) {
                    continue;
                }
                let rect = player.rect();
                if let Some(mut body) = world.get_mut::<Body>(actor) {
                    body.rect = rect;
                }
                if let Some(id) = world.get::<MapId>(actor).copied() {
                    record(
                        world,
                        CoreEvent::PushedBack {
                            id: id.0,
                            obstacle: trigger.id,
                        },
                    );
                }
            }
            TriggerEffect::Teleport { actor, into } => {
                let Some(mut player) = world.get_mut::<Player>(actor) else {
                    continue;
                };
                player.teleport_to(&into);
                let rect = player.rect();
                if let Some(mut body) = world.get_mut::<Body>(actor) {
                    body.rect = rect;
                }
                if let Some(id) = world.get::<MapId>(actor).copied() {
                    record(
                        world,
                        CoreEvent::Teleported {
                            id: id.0,
                            teleport: trigger.id,
                        },
                    );
                }
            }
            TriggerEffect::Pulse { target } => {
                world.trigger(TriggerPulse {
                    source: trigger.entity,
                    target,
                });
            }
            TriggerEffect::Cue(cue) => {
                if let Some(mut cues) = world.get_resource_mut::<Messages<AudioCue>>() {
                    cues.write(cue);
                }
            }
            TriggerEffect::Complete => {
                world.trigger(LevelCompleted {
                    keystone: trigger.entity,
                });
            }
        }
    }
}

fn record(world: &World, event: CoreEvent) {
    if let Some(sink) = world.get_resource::<EventSinkRes>() {
        sink.record(event);
    }
}

fn record_pair(
    world: &World,
    trigger: &TriggerInfo,
    other: Entity,
    event: impl FnOnce(u32, u32) -> CoreEvent,
) {
    if let Some(other) = world.get::<MapId>(other) {
        record(world, event(trigger.id, other.0));
    }
}
