//! Level data as exported by the map editor.
//!
//! A level is a flat list of typed map objects plus a property bag. Object
//! geometry is in map units; per-object behavior is selected by the object's
//! `type` string and tuned by its string-keyed properties. [`spawn_level`]
//! turns a [`LevelData`] into entities.
//!
//! ```json
//! {
//!   "properties": { "music": "assets/theme.ogg" },
//!   "objects": [
//!     { "id": 1, "name": "Player", "type": "Player", "x": 64, "y": 64 },
//!     { "id": 2, "type": "Switch", "x": 128, "y": 64, "width": 32, "height": 32,
//!       "properties": { "target_id": "3" } },
//!     { "id": 3, "type": "RisingPlatform", "x": 192, "y": 64,
//!       "properties": { "floor": 0 } }
//!   ]
//! }
//! ```

pub mod loader;
pub mod mapobject;

pub use loader::{LoadReport, spawn_level};
pub use mapobject::{LevelData, MapObject, ObjectKind, PropertyValue};
