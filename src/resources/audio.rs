//! Bridge from the ECS world to the audio collaborator.
//!
//! Use [`connect_audio`] to hand the world a channel; the returned
//! [`Receiver`] belongs to whatever plays sounds. Without a bridge, cues are
//! simply dropped at the end of the frame.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCue;

/// Sending half of the cue channel.
#[derive(Resource)]
pub struct AudioBridge {
    pub tx_cue: Sender<AudioCue>,
}

/// Create the cue channel, insert the [`AudioBridge`] and return the
/// receiving end.
pub fn connect_audio(world: &mut World) -> Receiver<AudioCue> {
    let (tx_cue, rx_cue) = unbounded::<AudioCue>();
    world.insert_resource(AudioBridge { tx_cue });
    rx_cue
}

/// Drop the bridge. The receiver sees the channel disconnect.
pub fn disconnect_audio(world: &mut World) {
    world.remove_resource::<AudioBridge>();
}
