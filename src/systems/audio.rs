//! Audio cue forwarding.
//!
//! - [`forward_audio_cues`] sends every [`AudioCue`] written this frame over
//!   the [`AudioBridge`] channel, if one is connected.
//! - [`update_audio_cues`] advances the ECS message queue so cues are
//!   dropped after both buffers have been read.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::audio::AudioCue;
use crate::resources::audio::AudioBridge;

pub fn forward_audio_cues(mut reader: MessageReader<AudioCue>, bridge: Option<Res<AudioBridge>>) {
    let Some(bridge) = bridge else {
        reader.clear();
        return;
    };
    for cue in reader.read() {
        if bridge.tx_cue.send(cue.clone()).is_err() {
            debug!("Audio receiver gone, dropping {:?}", cue);
        }
    }
}

/// Advance the ECS message queue for [`AudioCue`].
///
/// Run this after [`forward_audio_cues`] in your schedule.
pub fn update_audio_cues(mut cues: ResMut<Messages<AudioCue>>) {
    cues.update();
}
