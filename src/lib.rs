//! Floorbound library.
//!
//! Trigger and collision core of a tile-based action game: enter/exit
//! tracking for triggers, a floor/depth model for multi-level maps, and
//! order-independent wiring of triggers to their targets. Rendering, audio
//! playback and keyboard capture are left to the caller; see
//! [`game::Game`] for the frame contract.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod level;
pub mod resources;
pub mod systems;
