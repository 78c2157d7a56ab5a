//! Draw list construction.
//!
//! Rendering itself belongs to an external collaborator. Each frame
//! [`build_draw_list`] collects every sprite visible through the camera,
//! sorts them into painter's order and stores the result in [`DrawList`].
use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::depth::Depth;
use crate::components::identity::MapId;
use crate::components::sprite::Sprite;
use crate::components::switch::Switch;
use crate::resources::camera::Camera;
use crate::resources::drawlist::{DrawCommand, DrawList, ImageHandle};

/// Show switches pressed or released.
pub fn sync_switch_sprites(mut switches: Query<(&Switch, &mut Sprite), Changed<Switch>>) {
    for (switch, mut sprite) in switches.iter_mut() {
        sprite.frame = switch.frame();
    }
}

/// Collect, cull, sort and emit draw commands.
///
/// Sprites are culled against the camera view using their rectangle lifted
/// by `z`, sorted by [`Depth::sort_key`] with the map id as tie-break, and
/// emitted with rectangles relative to the view's top-left corner.
pub fn build_draw_list(
    camera: Res<Camera>,
    sprites: Query<(&MapId, &Body, &Depth, &Sprite)>,
    mut draw_list: ResMut<DrawList>,
) {
    let view = camera.view_rect();

    let mut to_draw: Vec<(i64, u32, &Body, &Depth, &Sprite)> = sprites
        .iter()
        .filter(|(_, body, depth, _)| body.rect.offset(0, -depth.z()).intersects(&view))
        .map(|(id, body, depth, sprite)| (depth.sort_key(&body.rect), id.0, body, depth, sprite))
        .collect();

    to_draw.sort_by_key(|(key, id, ..)| (*key, *id));

    draw_list.commands.clear();
    draw_list
        .commands
        .extend(to_draw.into_iter().map(|(_, id, body, depth, sprite)| DrawCommand {
            id,
            image: ImageHandle {
                tex_key: sprite.tex_key.clone(),
                frame: sprite.frame,
                animation: sprite.animation,
            },
            rect: body.rect.offset(-view.x, -view.y),
            layer: sprite.layer,
            z_shift: depth.z(),
        }));
}
