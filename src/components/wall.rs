use bevy_ecs::prelude::Component;

/// Solid level geometry. The player is pushed back out of walls.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Wall;
