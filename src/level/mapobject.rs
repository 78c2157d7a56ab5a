//! Serde model of level files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Gameplay kinds the core knows how to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Player,
    Teleport,
    TeleportDestination,
    Wall,
    RisingPlatform,
    FallingPlatform,
    RisingFallingPlatform,
    Switch,
    Keystone,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 9] = [
        ObjectKind::Player,
        ObjectKind::Teleport,
        ObjectKind::TeleportDestination,
        ObjectKind::Wall,
        ObjectKind::RisingPlatform,
        ObjectKind::FallingPlatform,
        ObjectKind::RisingFallingPlatform,
        ObjectKind::Switch,
        ObjectKind::Keystone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Player => "Player",
            ObjectKind::Teleport => "Teleport",
            ObjectKind::TeleportDestination => "TeleportDestination",
            ObjectKind::Wall => "Wall",
            ObjectKind::RisingPlatform => "RisingPlatform",
            ObjectKind::FallingPlatform => "FallingPlatform",
            ObjectKind::RisingFallingPlatform => "RisingFallingPlatform",
            ObjectKind::Switch => "Switch",
            ObjectKind::Keystone => "Keystone",
        }
    }

    /// Texture key handed to the renderer for visible kinds.
    pub fn texture_key(&self) -> Option<&'static str> {
        match self {
            ObjectKind::Player => Some("player"),
            ObjectKind::RisingPlatform => Some("rising_platform"),
            ObjectKind::FallingPlatform => Some("falling_platform"),
            ObjectKind::RisingFallingPlatform => Some("rising_falling_platform"),
            ObjectKind::Switch => Some("switch"),
            ObjectKind::Keystone => Some("keystone"),
            ObjectKind::Teleport | ObjectKind::TeleportDestination | ObjectKind::Wall => None,
        }
    }

    /// Kinds that track overlaps with the player.
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            ObjectKind::Teleport
                | ObjectKind::RisingPlatform
                | ObjectKind::FallingPlatform
                | ObjectKind::RisingFallingPlatform
                | ObjectKind::Switch
                | ObjectKind::Keystone
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A property value. Map editors export numbers either as numbers or as
/// strings, so the numeric accessors accept both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            PropertyValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::String(v) => f.write_str(v),
        }
    }
}

pub type Properties = FxHashMap<String, PropertyValue>;

/// One object of the level's object layer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MapObject {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub properties: Properties,
}

impl MapObject {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as i32,
            self.height.round() as i32,
        )
    }

    /// Kind from the `type` field. Objects without a type named `Player`
    /// are the player.
    pub fn object_kind(&self) -> Result<ObjectKind, String> {
        if self.kind.is_empty() && self.name == "Player" {
            return Ok(ObjectKind::Player);
        }
        self.kind.parse()
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LevelData {
    #[serde(default)]
    pub properties: Properties,
    pub objects: Vec<MapObject>,
}

impl LevelData {
    /// Loads level data from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let level_data: LevelData = serde_json::from_str(&file_content)?;
        Ok(level_data)
    }

    /// Track to loop while the level is played.
    pub fn music(&self) -> Option<&str> {
        self.properties.get("music").and_then(PropertyValue::as_str)
    }
}
