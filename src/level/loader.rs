//! Two-phase level instantiation.
//!
//! Phase one spawns an entity for every recognized map object and records
//! its id in the [`TargetRegistry`]. Phase two walks every [`TargetLink`] and
//! [`Teleport`] and binds it against the complete registry, so the order of
//! objects in the file never matters.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::body::Body;
use crate::components::depth::{Depth, FLOOR_HEIGHT};
use crate::components::identity::{Kind, MapId};
use crate::components::keystone::Keystone;
use crate::components::overlaptracker::OverlapTracker;
use crate::components::platform::{Platform, PlatformKind};
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::switch::Switch;
use crate::components::target::{TargetLink, TargetRef};
use crate::components::teleport::{Teleport, TeleportDestination};
use crate::components::wall::Wall;
use crate::events::audio::AudioCue;
use crate::level::mapobject::{LevelData, MapObject, ObjectKind, PropertyValue};
use crate::resources::eventsink::{CoreEvent, EventSinkRes};
use crate::resources::gameconfig::GameConfig;
use crate::resources::levelstatus::LevelStatus;
use crate::resources::targetregistry::TargetRegistry;

/// Size given to platforms drawn as points in the editor.
const DEFAULT_PLATFORM_SIZE: i32 = FLOOR_HEIGHT;

/// Summary of a [`spawn_level`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub spawned: usize,
    /// Objects of unknown kind or with a duplicate id.
    pub skipped: usize,
    pub links_resolved: usize,
    pub links_unresolved: usize,
}

/// Spawn every object of `level` into `world` and wire the trigger graph.
///
/// Expects [`TargetRegistry`], [`LevelStatus`], [`EventSinkRes`] and
/// `Messages<AudioCue>` to be present; [`Game`](crate::game::Game) inserts
/// them. Anomalies are reported to the event sink and never abort the load.
pub fn spawn_level(world: &mut World, level: &LevelData, config: &GameConfig) -> LoadReport {
    let mut report = LoadReport::default();

    for object in &level.objects {
        if spawn_object(world, object, config) {
            report.spawned += 1;
        } else {
            report.skipped += 1;
        }
    }

    resolve_links(world, &mut report);
    resolve_teleports(world, &mut report);

    if let Some(path) = level.music() {
        world
            .resource_mut::<Messages<AudioCue>>()
            .write(AudioCue::PlayMusic {
                path: path.to_string(),
            });
    }

    info!(
        "Level loaded: {} spawned, {} skipped, {} links resolved, {} unresolved",
        report.spawned, report.skipped, report.links_resolved, report.links_unresolved
    );
    report
}

fn record(world: &World, event: CoreEvent) {
    world.resource::<EventSinkRes>().record(event);
}

/// Integer property, reporting values that are present but not numeric.
fn int_property(world: &World, object: &MapObject, key: &str) -> Option<i64> {
    let value = object.property(key)?;
    let parsed = value.as_int();
    if parsed.is_none() {
        record(
            world,
            CoreEvent::InvalidProperty {
                id: object.id,
                key: key.to_string(),
                value: value.to_string(),
            },
        );
    }
    parsed
}

/// The object's `floor`, or 0 when absent. Values whose base height does not
/// fit in `i32` are reported and treated as absent.
fn floor_property(world: &World, object: &MapObject) -> i32 {
    let Some(value) = object.property("floor") else {
        return 0;
    };
    let floor = value
        .as_int()
        .and_then(|v| i32::try_from(v).ok())
        .filter(|floor| floor.checked_mul(FLOOR_HEIGHT).is_some());
    floor.unwrap_or_else(|| {
        record(
            world,
            CoreEvent::InvalidProperty {
                id: object.id,
                key: "floor".to_string(),
                value: value.to_string(),
            },
        );
        0
    })
}

/// The object's `target_id` (or `target`) reference.
fn target_property(world: &World, object: &MapObject) -> Option<TargetRef> {
    let (key, value) = ["target_id", "target"]
        .into_iter()
        .find_map(|key| object.property(key).map(|v| (key, v)))?;
    let parsed = match value {
        PropertyValue::Int(id) => u32::try_from(*id).ok().map(TargetRef::Id),
        PropertyValue::String(raw) => TargetRef::parse(raw),
        _ => None,
    };
    if parsed.is_none() {
        record(
            world,
            CoreEvent::InvalidProperty {
                id: object.id,
                key: key.to_string(),
                value: value.to_string(),
            },
        );
    }
    parsed
}

/// Phase one for a single object. Returns `false` if it was skipped.
fn spawn_object(world: &mut World, object: &MapObject, config: &GameConfig) -> bool {
    let kind = match object.object_kind() {
        Ok(kind) => kind,
        Err(raw) => {
            record(
                world,
                CoreEvent::UnrecognizedKind {
                    id: object.id,
                    kind: raw,
                },
            );
            return false;
        }
    };

    if world.resource::<TargetRegistry>().get(object.id).is_some() {
        record(world, CoreEvent::DuplicateId { id: object.id });
        return false;
    }

    let floor = floor_property(world, object);
    let target = target_property(world, object);
    let mut rect = object.rect();

    let entity = world
        .spawn((MapId(object.id), Kind(kind), Depth::on_floor(floor)))
        .id();

    match kind {
        ObjectKind::Player => {
            let player = Player::new(rect.x, rect.y, config.player_settings());
            rect = player.rect();
            world.entity_mut(entity).insert((
                player,
                Depth::on_floor(floor).with_elevation(config.player_elevation),
            ));
            let mut status = world.resource_mut::<LevelStatus>();
            if status.player.is_none() {
                status.player = Some(entity);
            }
        }
        ObjectKind::Teleport => {
            let destination = int_property(world, object, "destination")
                .and_then(|id| u32::try_from(id).ok());
            world
                .entity_mut(entity)
                .insert((Teleport::new(destination), OverlapTracker::default()));
        }
        ObjectKind::TeleportDestination => {
            world.entity_mut(entity).insert(TeleportDestination);
        }
        ObjectKind::Wall => {
            world.entity_mut(entity).insert(Wall);
        }
        ObjectKind::RisingPlatform
        | ObjectKind::FallingPlatform
        | ObjectKind::RisingFallingPlatform => {
            let platform_kind = match kind {
                ObjectKind::RisingPlatform => PlatformKind::Rising,
                ObjectKind::FallingPlatform => PlatformKind::Falling,
                _ => PlatformKind::RisingFalling,
            };
            if rect.w <= 0 || rect.h <= 0 {
                rect.w = DEFAULT_PLATFORM_SIZE;
                rect.h = DEFAULT_PLATFORM_SIZE;
            }
            world.entity_mut(entity).insert((
                Platform::new(platform_kind, floor),
                OverlapTracker::default(),
            ));
        }
        ObjectKind::Switch => {
            world
                .entity_mut(entity)
                .insert((Switch::new(floor), OverlapTracker::default()));
        }
        ObjectKind::Keystone => {
            world
                .entity_mut(entity)
                .insert((Keystone, OverlapTracker::default()));
        }
    }

    world.entity_mut(entity).insert(Body::new(rect));
    if let Some(tex_key) = kind.texture_key() {
        world
            .entity_mut(entity)
            .insert(Sprite::new(tex_key, config.default_layer));
    }
    if let Some(reference) = target {
        world.entity_mut(entity).insert(TargetLink::new(reference));
    }

    world
        .resource_mut::<TargetRegistry>()
        .register(object.id, entity);
    record(world, CoreEvent::Spawned { id: object.id, kind });
    true
}

/// Phase two: bind every target link against the complete registry.
fn resolve_links(world: &mut World, report: &mut LoadReport) {
    let mut query = world.query::<(Entity, &MapId, &TargetLink)>();
    let pending: Vec<(Entity, u32, u32)> = query
        .iter(world)
        .filter(|(_, _, link)| link.target().is_none())
        .map(|(entity, id, link)| (entity, id.0, link.reference.id(id.0)))
        .collect();

    for (entity, trigger, target) in pending {
        let resolved = world.resource::<TargetRegistry>().get(target);
        match resolved {
            Some(target_entity) => {
                if let Some(mut link) = world.get_mut::<TargetLink>(entity) {
                    link.resolve(target_entity);
                }
                debug!("Trigger {} linked to {}", trigger, target);
                record(world, CoreEvent::LinkResolved { trigger, target });
                report.links_resolved += 1;
            }
            None => {
                record(world, CoreEvent::LinkUnresolved { trigger, target });
                report.links_unresolved += 1;
            }
        }
    }
}

/// Phase two for teleports: copy each destination's rectangle.
fn resolve_teleports(world: &mut World, report: &mut LoadReport) {
    let mut query = world.query::<(Entity, &MapId, &Teleport)>();
    let pending: Vec<(Entity, u32, u32)> = query
        .iter(world)
        .filter_map(|(entity, id, teleport)| {
            teleport
                .destination_id
                .map(|destination| (entity, id.0, destination))
        })
        .collect();

    for (entity, trigger, destination) in pending {
        let area = world
            .resource::<TargetRegistry>()
            .get(destination)
            .and_then(|e| world.get::<Body>(e))
            .map(|body| body.rect);
        match area {
            Some(area) => {
                if let Some(mut teleport) = world.get_mut::<Teleport>(entity) {
                    teleport.destination = Some(area);
                }
                record(
                    world,
                    CoreEvent::LinkResolved {
                        trigger,
                        target: destination,
                    },
                );
                report.links_resolved += 1;
            }
            None => {
                record(
                    world,
                    CoreEvent::LinkUnresolved {
                        trigger,
                        target: destination,
                    },
                );
                report.links_unresolved += 1;
            }
        }
    }
}
