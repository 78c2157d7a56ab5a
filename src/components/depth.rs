//! Floor and height model for draw ordering and collision gating.
//!
//! Every collidable entity carries a [`Depth`]. The continuous `z` offset is
//! the source of truth; the discrete floor is derived from it by integer
//! division by [`FLOOR_HEIGHT`]. Writes that move an entity onto another
//! floor return a [`FloorChange`] so the caller can notify listeners.

use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Height of one floor in map units.
pub const FLOOR_HEIGHT: i32 = 32;

/// Bit shift applied to the elevation part of [`Depth::sort_key`].
const ELEVATION_SHIFT: u32 = 32;

/// Floor transition produced by a write to [`Depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorChange {
    pub from: i32,
    pub to: i32,
}

/// Vertical placement of an entity.
///
/// `elevation` is a constant per-entity lift used only for draw ordering
/// (the player stands slightly above objects on its own floor).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Depth {
    z: i32,
    pub elevation: i32,
}

impl Depth {
    pub fn new(z: i32) -> Self {
        Self { z, elevation: 0 }
    }

    pub fn on_floor(floor: i32) -> Self {
        Self::new(floor * FLOOR_HEIGHT)
    }

    pub fn with_elevation(mut self, elevation: i32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn floor(&self) -> i32 {
        floor_of(self.z)
    }

    /// Set the continuous offset, reporting a floor transition if any.
    pub fn set_z(&mut self, z: i32) -> Option<FloorChange> {
        let from = self.floor();
        self.z = z;
        let to = self.floor();
        (from != to).then_some(FloorChange { from, to })
    }

    /// Place the entity at the base of `floor`.
    pub fn set_floor(&mut self, floor: i32) -> Option<FloorChange> {
        self.set_z(floor * FLOOR_HEIGHT)
    }

    /// Painter's-order key for an entity occupying `rect`.
    ///
    /// The vertical centre sorts entities within a height band; `z +
    /// elevation` is shifted into the high bits so a higher floor always
    /// draws after a lower one regardless of screen position.
    pub fn sort_key(&self, rect: &Rect) -> i64 {
        let height = i64::from(self.z) + i64::from(self.elevation);
        (height << ELEVATION_SHIFT) + i64::from(rect.center_y())
    }
}

/// Floor index for a continuous offset.
pub fn floor_of(z: i32) -> i32 {
    z.div_euclid(FLOOR_HEIGHT)
}
