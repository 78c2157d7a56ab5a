//! Event types and observers used by the core.
//!
//! Events provide a decoupled way for systems to communicate. Buffered
//! messages are read by systems later in the frame; observer events are
//! delivered immediately when triggered.
//!
//! Submodules:
//! - [`audio`] – one-shot cues for the audio collaborator
//! - [`floor`] – floor change notifications and their listener
//! - [`level`] – level completion and its observer
//! - [`trigger`] – pulses from triggers to their targets
//!
//! See each submodule for concrete event data and semantics.
pub mod audio;
pub mod floor;
pub mod level;
pub mod trigger;
