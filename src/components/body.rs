use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// World-space bounding rectangle of an entity.
///
/// For static objects this is the rectangle from the map. For the player it
/// is the full sprite rectangle and is rewritten every time the player moves;
/// ground collision uses the player's feet instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Body {
    pub rect: Rect,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.intersects(other)
    }
}
