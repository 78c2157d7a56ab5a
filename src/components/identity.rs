use bevy_ecs::prelude::Component;

use crate::level::ObjectKind;

/// Identifier assigned by the source map. Unique within a level.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub u32);

/// Gameplay kind the entity was spawned as.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kind(pub ObjectKind);
