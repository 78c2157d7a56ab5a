//! Level clock.
//!
//! Reset on every level load; [`update_world_time`] advances it once per
//! frame before the schedule runs.
//!
//! [`update_world_time`]: crate::systems::time::update_world_time
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Seconds simulated since the level was loaded.
    pub elapsed: f32,
    /// Length of the current frame in seconds.
    pub delta: f32,
    /// Frames simulated since the level was loaded.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Start a new frame of length `dt`. Returns the frame number.
    pub fn advance(&mut self, dt: f32) -> u64 {
        self.delta = dt;
        self.elapsed += self.delta;
        self.frame_count += 1;
        self.frame_count
    }
}
