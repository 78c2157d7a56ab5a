//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, timing, input, the
//! id registry, camera and output buffers. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – channel carrying audio cues to the audio collaborator
//! - `camera` – follow/shake camera and the visible area
//! - `drawlist` – depth-sorted draw commands produced each frame
//! - `eventsink` – injected sink for structured core events
//! - `gameconfig` – tunables loaded from an INI file
//! - `input` – per-frame state of the actions the core reacts to
//! - `levelstatus` – completion state of the current level
//! - `targetregistry` – map id to entity lookup for link wiring
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera;
pub mod drawlist;
pub mod eventsink;
pub mod gameconfig;
pub mod input;
pub mod levelstatus;
pub mod targetregistry;
pub mod worldtime;
