//! Core systems.
//!
//! This module groups all ECS systems that advance the simulation and
//! produce the per-frame outputs. [`Game`](crate::game::Game) runs them in
//! the order listed below.
//!
//! Submodules overview
//! - [`time`] – update simulation time and delta
//! - [`input`] – latch direction flags and handle debug actions
//! - [`player`] – advance player steps, animation and footsteps
//! - [`platform`] – move platforms and their riders between floors
//! - [`walls`] – push players back out of walls
//! - [`triggers`] – enter/exit detection and trigger side effects
//! - [`camera`] – camera follow and shake
//! - [`render`] – depth-sorted draw list for the renderer
//! - [`audio`] – forward audio cues to the audio collaborator

pub mod audio;
pub mod camera;
pub mod input;
pub mod platform;
pub mod player;
pub mod render;
pub mod time;
pub mod triggers;
pub mod walls;
