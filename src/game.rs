//! High-level game driver.
//!
//! [`Game`] owns the ECS [`World`] and the per-frame [`Schedule`]. The outer
//! loop (window, keyboard, renderer, audio device) lives elsewhere and talks
//! to the core only through this type:
//!
//! 1. [`Game::load_level`] spawns a level.
//! 2. Each frame the caller feeds key edges through [`Game::input_mut`],
//!    calls [`Game::tick`] and reads [`Game::draw_list`].
//! 3. [`Game::is_complete`] tells when to move on to the next level.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;

use crate::components::body::Body;
use crate::components::identity::MapId;
use crate::events::audio::AudioCue;
use crate::events::floor::{FloorChanged, report_floor_changes, update_floor_changes};
use crate::events::level::observe_level_completed;
use crate::events::trigger::observe_trigger_pulse;
use crate::level::{LevelData, LoadReport, spawn_level};
use crate::resources::audio::connect_audio;
use crate::resources::camera::Camera;
use crate::resources::drawlist::DrawList;
use crate::resources::eventsink::{EventSink, EventSinkRes, LogSink};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::levelstatus::LevelStatus;
use crate::resources::targetregistry::TargetRegistry;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{forward_audio_cues, update_audio_cues};
use crate::systems::camera::update_camera;
use crate::systems::input::apply_player_input;
use crate::systems::platform::platform_motion;
use crate::systems::player::player_movement;
use crate::systems::render::{build_draw_list, sync_switch_sprites};
use crate::systems::time::update_world_time;
use crate::systems::triggers::resolve_triggers;
use crate::systems::walls::wall_collision;

pub struct Game {
    world: World,
    update: Schedule,
}

impl Game {
    /// A game reporting core events to the `log` facade.
    pub fn new(config: GameConfig) -> Self {
        Self::with_sink(config, LogSink)
    }

    /// A game reporting core events to `sink`.
    pub fn with_sink(config: GameConfig, sink: impl EventSink + 'static) -> Self {
        let mut world = World::new();
        world.insert_resource(Camera::new(config.view_size(), config.smoothing));
        world.insert_resource(config);
        world.insert_resource(EventSinkRes::new(sink));
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(TargetRegistry::default());
        world.insert_resource(LevelStatus::default());
        world.insert_resource(DrawList::default());
        world.init_resource::<Messages<AudioCue>>();
        world.init_resource::<Messages<FloorChanged>>();

        world.spawn(Observer::new(observe_trigger_pulse));
        world.spawn(Observer::new(observe_level_completed));
        world.flush();

        let mut update = Schedule::default();
        update.add_systems(
            (
                apply_player_input,
                player_movement,
                platform_motion,
                wall_collision,
                resolve_triggers,
                report_floor_changes,
                sync_switch_sprites,
                update_camera,
                build_draw_list,
                forward_audio_cues,
                update_audio_cues,
                update_floor_changes,
            )
                .chain(),
        );

        Self { world, update }
    }

    /// Replace the current level with `level`.
    pub fn load_level(&mut self, level: &LevelData) -> LoadReport {
        let old: Vec<Entity> = {
            let mut query = self.world.query_filtered::<Entity, With<MapId>>();
            query.iter(&self.world).collect()
        };
        for entity in old {
            self.world.despawn(entity);
        }
        self.world.resource_mut::<TargetRegistry>().clear();
        self.world.insert_resource(LevelStatus::default());
        self.world.insert_resource(WorldTime::default());
        self.world.insert_resource(DrawList::default());

        let config = self.world.resource::<GameConfig>().clone();
        let report = spawn_level(&mut self.world, level, &config);

        let center = self
            .player()
            .and_then(|player| self.world.get::<Body>(player))
            .map(|body| body.rect.center());
        if let Some(center) = center {
            self.world.resource_mut::<Camera>().snap_to(center);
        }
        report
    }

    /// Run one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.resource_mut::<InputState>().end_frame();
    }

    pub fn input_mut(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    pub fn is_complete(&self) -> bool {
        self.world.resource::<LevelStatus>().complete
    }

    pub fn status(&self) -> &LevelStatus {
        self.world.resource::<LevelStatus>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn player(&self) -> Option<Entity> {
        self.world.resource::<LevelStatus>().player
    }

    /// Entity spawned for map object `id`.
    pub fn entity(&self, id: u32) -> Option<Entity> {
        self.world.resource::<TargetRegistry>().get(id)
    }

    /// Route audio cues to the returned receiver from now on.
    pub fn connect_audio(&mut self) -> Receiver<AudioCue> {
        connect_audio(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
