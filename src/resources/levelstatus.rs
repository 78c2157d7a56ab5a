use bevy_ecs::prelude::{Entity, Resource};

/// Progress of the level currently loaded.
#[derive(Resource, Debug, Default, Clone)]
pub struct LevelStatus {
    /// The player reached a keystone.
    pub complete: bool,
    /// Frame counter, advanced by the time system.
    pub frame: u64,
    /// Frame on which the level was completed.
    pub frames_to_complete: Option<u64>,
    /// The level's player, if one was spawned.
    pub player: Option<Entity>,
}
