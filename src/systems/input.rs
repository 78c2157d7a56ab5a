//! Input systems.
//!
//! [`apply_player_input`] turns key edges from
//! [`InputState`](crate::resources::input::InputState) into the player's
//! latched direction flags and handles the debug actions.
use bevy_ecs::prelude::*;

use crate::components::depth::Depth;
use crate::components::player::Player;
use crate::events::floor::FloorChanged;
use crate::resources::camera::{Camera, DEFAULT_SHAKE_DISTANCE, DEFAULT_SHAKES};
use crate::resources::input::{BoolState, InputState};

/// Latch `flag` to the key state whenever the key changed this frame.
///
/// Between edges the flag keeps whatever gameplay set it to, so a held key
/// cleared by a wall stays cleared until it is pressed again.
fn latch(flag: &mut bool, state: &BoolState) {
    if state.just_pressed || state.just_released {
        *flag = state.active;
    }
}

pub fn apply_player_input(
    input: Res<InputState>,
    mut players: Query<(Entity, &mut Player, &mut Depth)>,
    mut camera: ResMut<Camera>,
    mut floor_changes: MessageWriter<FloorChanged>,
) {
    for (entity, mut player, mut depth) in players.iter_mut() {
        let inputs = &mut player.inputs;
        latch(&mut inputs.left, &input.left);
        latch(&mut inputs.right, &input.right);
        latch(&mut inputs.up, &input.up);
        latch(&mut inputs.down, &input.down);

        let dz = i32::from(input.raise.just_pressed) - i32::from(input.lower.just_pressed);
        if dz != 0 {
            let z = depth.z().saturating_add(dz);
            if let Some(change) = depth.set_z(z) {
                floor_changes.write(FloorChanged {
                    entity,
                    from: change.from,
                    to: change.to,
                });
            }
        }
    }

    if input.shake.just_pressed {
        camera.shake(DEFAULT_SHAKES, DEFAULT_SHAKE_DISTANCE);
    }
}
