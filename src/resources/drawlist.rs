//! Per-frame draw commands for the external renderer.
//!
//! The render system rebuilds the [`DrawList`] every frame in painter's
//! order: entries earlier in the list are drawn first.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::geometry::Rect;

/// What to draw, by handle. Texture loading and animation playback belong to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHandle {
    pub tex_key: String,
    pub frame: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawCommand {
    /// Map id of the entity drawn.
    pub id: u32,
    pub image: ImageHandle,
    /// Rectangle relative to the camera's top-left corner, in map units.
    pub rect: Rect,
    pub layer: i32,
    /// Height above the ground in map units; the image is drawn this far
    /// above `rect`.
    pub z_shift: i32,
}

#[derive(Resource, Debug, Default, Clone, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.commands.iter().map(|c| c.id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
