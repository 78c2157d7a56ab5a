use bevy_ecs::message::Message;

/// One-shot sound requests sent *to* the audio collaborator.
///
/// The receiver owns playback policy; in particular it should drop a
/// footstep while another one is still playing.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCue {
    /// The player advanced this frame.
    Footstep,
    /// A switch went from released to pressed.
    SwitchPress,
    /// Start looping the level's music track.
    PlayMusic { path: String },
}
