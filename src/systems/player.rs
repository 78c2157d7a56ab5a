use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCue;
use crate::resources::worldtime::WorldTime;

/// Advance every player's step, keep its body and animation in sync and
/// request a footstep for each frame it actually moved.
pub fn player_movement(
    time: Res<WorldTime>,
    mut players: Query<(&mut Player, &mut Body, Option<&mut Sprite>)>,
    mut cues: MessageWriter<AudioCue>,
) {
    for (mut player, mut body, sprite) in players.iter_mut() {
        let moved = player.advance(time.delta);
        body.rect = player.rect();
        if let Some(mut sprite) = sprite {
            sprite.animation = Some(player.animation().name());
        }
        if moved {
            cues.write(AudioCue::Footstep);
        }
    }
}
