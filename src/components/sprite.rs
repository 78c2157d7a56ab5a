use bevy_ecs::prelude::Component;

/// Image handle for the rendering collaborator.
///
/// `tex_key` names a texture or sprite sheet, `frame` selects a cell of the
/// sheet and `animation` names a track for animated sprites. `layer` is the
/// map layer the sprite is drawn on.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
    pub frame: usize,
    pub animation: Option<&'static str>,
    pub layer: i32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, layer: i32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame: 0,
            animation: None,
            layer,
        }
    }
}
