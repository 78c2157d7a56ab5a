//! ECS components for level entities.
//!
//! This module groups all component types attached to entities spawned from
//! a level. Components hold per-entity state; behavior that spans entities
//! lives in [`crate::systems`].
//!
//! Submodules overview:
//! - [`body`] – world-space bounding rectangle
//! - [`depth`] – continuous z offset, derived floor and draw-order key
//! - [`identity`] – map identifier and kind tag
//! - [`keystone`] – level completion marker
//! - [`overlaptracker`] – per-trigger enter/exit bookkeeping
//! - [`platform`] – rising and falling platforms
//! - [`player`] – grid-stepped player character and its inputs
//! - [`sprite`] – image handle for the renderer
//! - [`switch`] – pressure pads that pulse their target
//! - [`target`] – symbolic trigger → target links
//! - [`teleport`] – teleports and their landing areas
//! - [`trigger`] – behavior and capability traits for triggers
//! - [`wall`] – solid geometry

pub mod body;
pub mod depth;
pub mod identity;
pub mod keystone;
pub mod overlaptracker;
pub mod platform;
pub mod player;
pub mod sprite;
pub mod switch;
pub mod target;
pub mod teleport;
pub mod trigger;
pub mod wall;
