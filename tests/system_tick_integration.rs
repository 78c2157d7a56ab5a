//! System tick integration tests for movement, walls, platforms and triggers
//! on a bare `World`.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec2;

use floorbound::components::body::Body;
use floorbound::components::depth::Depth;
use floorbound::components::identity::{Kind, MapId};
use floorbound::components::overlaptracker::OverlapTracker;
use floorbound::components::platform::{Platform, PlatformKind};
use floorbound::components::player::{Player, PlayerSettings};
use floorbound::components::switch::Switch;
use floorbound::components::target::{TargetLink, TargetRef};
use floorbound::components::wall::Wall;
use floorbound::events::audio::AudioCue;
use floorbound::events::floor::FloorChanged;
use floorbound::events::trigger::observe_trigger_pulse;
use floorbound::geometry::Rect;
use floorbound::level::ObjectKind;
use floorbound::resources::eventsink::{CoreEvent, EventSinkRes, RecordingSink};
use floorbound::resources::worldtime::WorldTime;
use floorbound::systems::platform::platform_motion;
use floorbound::systems::player::player_movement;
use floorbound::systems::time::update_world_time;
use floorbound::systems::triggers::resolve_triggers;
use floorbound::systems::walls::wall_collision;

fn make_world() -> (World, RecordingSink) {
    let sink = RecordingSink::new();
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(EventSinkRes::new(sink.clone()));
    world.init_resource::<Messages<AudioCue>>();
    world.init_resource::<Messages<FloorChanged>>();
    (world, sink)
}

fn spawn_player(world: &mut World, id: u32, x: i32, y: i32) -> Entity {
    let player = Player::new(x, y, PlayerSettings::default());
    let rect = player.rect();
    world
        .spawn((
            MapId(id),
            Kind(ObjectKind::Player),
            player,
            Body::new(rect),
            Depth::on_floor(0),
        ))
        .id()
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_movement, wall_collision).chain());
    schedule.run(world);
}

fn tick_platforms(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(platform_motion);
    schedule.run(world);
}

fn tick_triggers(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(resolve_triggers);
    schedule.run(world);
}

fn floor_changes(world: &mut World) -> Vec<FloorChanged> {
    let mut state = SystemState::<MessageReader<FloorChanged>>::new(world);
    let mut reader = state.get_mut(world);
    reader.read().copied().collect()
}

#[test]
fn left_wall_restores_x_keeps_y_and_clears_inputs() {
    let (mut world, sink) = make_world();
    let player = spawn_player(&mut world, 1, 100, 200);
    world.spawn((MapId(2), Wall, Body::new(Rect::new(60, 150, 40, 200))));
    world.get_mut::<Player>(player).unwrap().inputs.left = true;

    update_world_time(&mut world, 1.0 / 60.0);
    tick_movement(&mut world);

    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.position(), Vec2::new(100.0, 200.0));
    assert!(!p.inputs.any());
    assert_eq!(world.get::<Body>(player).unwrap().rect, Rect::new(100, 200, 32, 32));
    assert_eq!(sink.count(|e| *e == CoreEvent::PushedBack { id: 1, obstacle: 2 }), 1);
}

#[test]
fn wall_below_restores_y_keeps_x() {
    let (mut world, _) = make_world();
    let player = spawn_player(&mut world, 1, 100, 100);
    // Feet span y 122..132; the wall starts right under them.
    world.spawn((MapId(2), Wall, Body::new(Rect::new(0, 132, 400, 40))));
    world.get_mut::<Player>(player).unwrap().inputs.down = true;

    update_world_time(&mut world, 1.0 / 60.0);
    tick_movement(&mut world);

    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.position(), Vec2::new(100.0, 100.0));
    assert!(!p.inputs.any());
}

#[test]
fn walls_ignore_distant_players() {
    let (mut world, sink) = make_world();
    let player = spawn_player(&mut world, 1, 300, 300);
    world.spawn((MapId(2), Wall, Body::new(Rect::new(0, 0, 32, 32))));
    world.get_mut::<Player>(player).unwrap().inputs.right = true;

    update_world_time(&mut world, 1.0 / 60.0);
    tick_movement(&mut world);

    assert!(world.get::<Player>(player).unwrap().position().x > 300.0);
    assert!(sink.events().is_empty());
}

#[test]
fn platform_rises_one_unit_per_tick_and_carries_riders() {
    let (mut world, _) = make_world();
    let rider = spawn_player(&mut world, 1, 0, 0);
    let mut platform = Platform::new(PlatformKind::Rising, 0);
    platform.set_floor(1);
    let mut tracker = OverlapTracker::default();
    tracker.track(rider);
    let platform = world
        .spawn((MapId(20), platform, Depth::on_floor(0), tracker))
        .id();

    for tick in 1..=32 {
        tick_platforms(&mut world);
        assert_eq!(world.get::<Platform>(platform).unwrap().height(), tick);
        assert_eq!(world.get::<Depth>(rider).unwrap().z(), tick);
    }
    tick_platforms(&mut world);
    assert!(world.get::<Platform>(platform).unwrap().stopped());
    assert_eq!(world.get::<Depth>(rider).unwrap().z(), 32);

    let changes = floor_changes(&mut world);
    assert_eq!(changes.len(), 2);
    assert!(changes.contains(&FloorChanged {
        entity: rider,
        from: 0,
        to: 1
    }));
    assert!(changes.contains(&FloorChanged {
        entity: platform,
        from: 0,
        to: 1
    }));
}

#[test]
fn stopped_platform_leaves_riders_alone() {
    let (mut world, _) = make_world();
    let rider = spawn_player(&mut world, 1, 0, 0);
    world.get_mut::<Depth>(rider).unwrap().set_z(5);
    let mut tracker = OverlapTracker::default();
    tracker.track(rider);
    world.spawn((
        MapId(20),
        Platform::new(PlatformKind::Rising, 0),
        Depth::on_floor(0),
        tracker,
    ));

    tick_platforms(&mut world);
    assert_eq!(world.get::<Depth>(rider).unwrap().z(), 5);
    assert!(floor_changes(&mut world).is_empty());
}

#[test]
fn switch_pulse_reaches_platform_through_observer() {
    let (mut world, sink) = make_world();
    world.spawn(bevy_ecs::observer::Observer::new(observe_trigger_pulse));
    world.flush();

    let player = spawn_player(&mut world, 1, 0, 0);
    let feet = world.get::<Player>(player).unwrap().feet();
    let platform = world
        .spawn((
            MapId(20),
            Kind(ObjectKind::RisingFallingPlatform),
            Platform::new(PlatformKind::RisingFalling, 0),
            Depth::on_floor(0),
            Body::new(Rect::new(200, 200, 32, 32)),
            OverlapTracker::default(),
        ))
        .id();
    let mut link = TargetLink::new(TargetRef::Id(20));
    link.resolve(platform);
    let switch = world
        .spawn((
            MapId(10),
            Kind(ObjectKind::Switch),
            Switch::new(0),
            Depth::on_floor(0),
            Body::new(feet),
            OverlapTracker::default(),
            link,
        ))
        .id();

    tick_triggers(&mut world);
    assert!(world.get::<Switch>(switch).unwrap().is_active());
    assert_eq!(world.get::<Platform>(platform).unwrap().floor(), 1);
    assert_eq!(
        sink.count(|e| *e
            == CoreEvent::Pulse {
                source: 10,
                target: 20,
                accepted: true
            }),
        1
    );

    // Still standing on it: no second pulse.
    tick_triggers(&mut world);
    assert_eq!(sink.count(|e| matches!(e, CoreEvent::Pulse { .. })), 1);
    assert!(world.get::<OverlapTracker>(switch).unwrap().is_active(player));
}
