//! Game configuration resource.
//!
//! Manages tunables loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! movestep = 16
//! speed = 200
//! width = 32
//! height = 32
//! feet_height = 10
//! elevation = 16
//!
//! [camera]
//! view_width = 1280
//! view_height = 720
//! zoom = 4
//! smoothing = 10
//!
//! [render]
//! default_layer = 1
//!
//! [loop]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::player::PlayerSettings;

/// Default safe values for startup
const DEFAULT_MOVESTEP: i32 = 16;
const DEFAULT_SPEED: f32 = 200.0;
const DEFAULT_PLAYER_WIDTH: i32 = 32;
const DEFAULT_PLAYER_HEIGHT: i32 = 32;
const DEFAULT_FEET_HEIGHT: i32 = 10;
const DEFAULT_PLAYER_ELEVATION: i32 = 16;
const DEFAULT_VIEW_WIDTH: u32 = 1280;
const DEFAULT_VIEW_HEIGHT: u32 = 720;
const DEFAULT_ZOOM: u32 = 4;
const DEFAULT_SMOOTHING: u32 = 10;
const DEFAULT_LAYER: i32 = 1;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Player step length in map units.
    pub movestep: i32,
    /// Player speed in map units per second.
    pub speed: f32,
    pub player_width: i32,
    pub player_height: i32,
    /// Height of the player's ground-collision strip.
    pub feet_height: i32,
    /// Draw-order lift of the player above its floor.
    pub player_elevation: i32,
    /// Window width in pixels.
    pub view_width: u32,
    /// Window height in pixels.
    pub view_height: u32,
    /// Pixels per map unit.
    pub zoom: u32,
    /// Camera follow divisor; higher is smoother.
    pub smoothing: u32,
    /// Layer sprites are drawn on.
    pub default_layer: i32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            movestep: DEFAULT_MOVESTEP,
            speed: DEFAULT_SPEED,
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            feet_height: DEFAULT_FEET_HEIGHT,
            player_elevation: DEFAULT_PLAYER_ELEVATION,
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            zoom: DEFAULT_ZOOM,
            smoothing: DEFAULT_SMOOTHING,
            default_layer: DEFAULT_LAYER,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        if let Some(v) = config.getint("player", "movestep").ok().flatten() {
            if v > 0 {
                self.movestep = v as i32;
            }
        }
        if let Some(v) = config.getfloat("player", "speed").ok().flatten() {
            if v > 0.0 {
                self.speed = v as f32;
            }
        }
        if let Some(v) = config.getint("player", "width").ok().flatten() {
            self.player_width = v as i32;
        }
        if let Some(v) = config.getint("player", "height").ok().flatten() {
            self.player_height = v as i32;
        }
        if let Some(v) = config.getint("player", "feet_height").ok().flatten() {
            self.feet_height = v as i32;
        }
        if let Some(v) = config.getint("player", "elevation").ok().flatten() {
            self.player_elevation = v as i32;
        }

        // [camera] section
        if let Some(v) = config.getuint("camera", "view_width").ok().flatten() {
            self.view_width = v as u32;
        }
        if let Some(v) = config.getuint("camera", "view_height").ok().flatten() {
            self.view_height = v as u32;
        }
        if let Some(v) = config.getuint("camera", "zoom").ok().flatten() {
            self.zoom = (v as u32).max(1);
        }
        if let Some(v) = config.getuint("camera", "smoothing").ok().flatten() {
            self.smoothing = (v as u32).max(1);
        }

        // [render] section
        if let Some(v) = config.getint("render", "default_layer").ok().flatten() {
            self.default_layer = v as i32;
        }

        // [loop] section
        if let Some(v) = config.getuint("loop", "target_fps").ok().flatten() {
            self.target_fps = (v as u32).max(1);
        }

        info!(
            "Loaded config: movestep={}, speed={}, player {}x{} (feet {}), view {}x{} zoom={}, fps={}",
            self.movestep,
            self.speed,
            self.player_width,
            self.player_height,
            self.feet_height,
            self.view_width,
            self.view_height,
            self.zoom,
            self.target_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("player", "movestep", Some(self.movestep.to_string()));
        config.set("player", "speed", Some(self.speed.to_string()));
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));
        config.set("player", "feet_height", Some(self.feet_height.to_string()));
        config.set("player", "elevation", Some(self.player_elevation.to_string()));

        config.set("camera", "view_width", Some(self.view_width.to_string()));
        config.set("camera", "view_height", Some(self.view_height.to_string()));
        config.set("camera", "zoom", Some(self.zoom.to_string()));
        config.set("camera", "smoothing", Some(self.smoothing.to_string()));

        config.set("render", "default_layer", Some(self.default_layer.to_string()));

        config.set("loop", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Player tunables derived from this configuration.
    pub fn player_settings(&self) -> PlayerSettings {
        PlayerSettings {
            movestep: self.movestep,
            speed: self.speed,
            width: self.player_width,
            height: self.player_height,
            feet_height: self.feet_height,
        }
    }

    /// Visible area in map units.
    pub fn view_size(&self) -> (i32, i32) {
        (
            (self.view_width / self.zoom) as i32,
            (self.view_height / self.zoom) as i32,
        )
    }

    /// Fixed frame delta in seconds.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}
