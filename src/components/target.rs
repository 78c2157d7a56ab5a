//! Symbolic links from triggers to the entities they act on.

use bevy_ecs::prelude::{Component, Entity};

/// Target as written in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
    /// The trigger targets itself.
    Own,
    Id(u32),
}

impl TargetRef {
    /// Parse a property value: `"self"` or an object id.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("self") {
            Some(TargetRef::Own)
        } else {
            raw.parse().ok().map(TargetRef::Id)
        }
    }

    /// Concrete id, given the id of the trigger holding this reference.
    pub fn id(&self, own_id: u32) -> u32 {
        match self {
            TargetRef::Own => own_id,
            TargetRef::Id(id) => *id,
        }
    }
}

/// A trigger's link to its target, resolved once after the level is loaded.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLink {
    pub reference: TargetRef,
    resolved: Option<Entity>,
}

impl TargetLink {
    pub fn new(reference: TargetRef) -> Self {
        Self {
            reference,
            resolved: None,
        }
    }

    pub fn target(&self) -> Option<Entity> {
        self.resolved
    }

    /// Bind the link. A link is bound at most once; later calls return
    /// `false` and leave it unchanged.
    pub fn resolve(&mut self, target: Entity) -> bool {
        if self.resolved.is_some() {
            return false;
        }
        self.resolved = Some(target);
        true
    }
}
