//! Level loading integration tests: spawning, skipping and link wiring.

use rustc_hash::FxHashMap;

use floorbound::components::depth::Depth;
use floorbound::components::platform::Platform;
use floorbound::components::switch::Switch;
use floorbound::components::target::TargetLink;
use floorbound::components::teleport::Teleport;
use floorbound::events::audio::AudioCue;
use floorbound::game::Game;
use floorbound::geometry::Rect;
use floorbound::level::{LevelData, MapObject, PropertyValue};
use floorbound::resources::eventsink::{CoreEvent, RecordingSink};
use floorbound::resources::gameconfig::GameConfig;

const DT: f32 = 1.0 / 60.0;

fn obj(id: u32, kind: &str, rect: Rect, props: &[(&str, PropertyValue)]) -> MapObject {
    let properties: FxHashMap<String, PropertyValue> = props
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    MapObject {
        id,
        name: String::new(),
        kind: kind.to_string(),
        x: rect.x as f32,
        y: rect.y as f32,
        width: rect.w as f32,
        height: rect.h as f32,
        properties,
    }
}

fn text(v: &str) -> PropertyValue {
    PropertyValue::String(v.to_string())
}

fn player() -> MapObject {
    obj(1, "Player", Rect::new(64, 64, 32, 32), &[])
}

fn new_game() -> (Game, RecordingSink) {
    let sink = RecordingSink::new();
    (Game::with_sink(GameConfig::new(), sink.clone()), sink)
}

fn link_of(game: &Game, id: u32) -> Option<TargetLink> {
    let entity = game.entity(id)?;
    game.world().get::<TargetLink>(entity).copied()
}

#[test]
fn wiring_is_order_independent() {
    let switch = obj(10, "Switch", Rect::new(64, 96, 32, 16), &[("target_id", text("20"))]);
    let platform = obj(20, "RisingPlatform", Rect::new(192, 64, 32, 32), &[]);

    for objects in [
        vec![player(), switch.clone(), platform.clone()],
        vec![platform.clone(), player(), switch.clone()],
    ] {
        let (mut game, _) = new_game();
        let report = game.load_level(&LevelData {
            properties: Default::default(),
            objects,
        });
        assert_eq!(report.spawned, 3);
        assert_eq!(report.links_resolved, 1);
        let link = link_of(&game, 10).unwrap();
        assert_eq!(link.target(), game.entity(20));
    }
}

#[test]
fn self_target_links_to_itself() {
    let (mut game, sink) = new_game();
    game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![obj(
            5,
            "RisingFallingPlatform",
            Rect::new(0, 0, 32, 32),
            &[("target", text("self"))],
        )],
    });
    assert_eq!(link_of(&game, 5).unwrap().target(), game.entity(5));
    assert_eq!(
        sink.count(|e| *e == CoreEvent::LinkResolved { trigger: 5, target: 5 }),
        1
    );
}

#[test]
fn missing_target_stays_unlinked() {
    let (mut game, sink) = new_game();
    let report = game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![
            player(),
            obj(10, "Switch", Rect::new(64, 90, 32, 16), &[("target_id", PropertyValue::Int(99))]),
        ],
    });
    assert_eq!(report.links_unresolved, 1);
    assert_eq!(link_of(&game, 10).unwrap().target(), None);
    assert_eq!(
        sink.count(|e| matches!(e, CoreEvent::LinkUnresolved { trigger: 10, target: 99 })),
        1
    );

    // The player starts on the switch; pressing it pulses nothing.
    for _ in 0..10 {
        game.tick(DT);
    }
    assert_eq!(sink.count(|e| *e == CoreEvent::Enter { trigger: 10, other: 1 }), 1);
    assert_eq!(sink.count(|e| matches!(e, CoreEvent::Pulse { .. })), 0);
}

#[test]
fn unknown_kinds_and_duplicates_are_skipped() {
    let (mut game, sink) = new_game();
    let report = game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![
            player(),
            obj(2, "Lava", Rect::new(0, 0, 16, 16), &[]),
            obj(3, "Keystone", Rect::new(200, 0, 32, 32), &[]),
            obj(3, "Switch", Rect::new(300, 0, 32, 32), &[]),
        ],
    });

    assert_eq!(report.spawned, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(
        sink.count(|e| matches!(e, CoreEvent::UnrecognizedKind { id: 2, kind } if kind == "Lava")),
        1
    );
    assert_eq!(sink.count(|e| *e == CoreEvent::DuplicateId { id: 3 }), 1);
    let first = game.entity(3).unwrap();
    assert!(
        game.world()
            .get::<floorbound::components::keystone::Keystone>(first)
            .is_some()
    );
}

#[test]
fn teleport_destination_rect_is_resolved() {
    let (mut game, _) = new_game();
    game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![
            obj(7, "Teleport", Rect::new(0, 0, 32, 32), &[("destination", text("8"))]),
            obj(8, "TeleportDestination", Rect::new(320, 320, 64, 64), &[]),
        ],
    });
    let teleport = game.world().get::<Teleport>(game.entity(7).unwrap()).unwrap();
    assert_eq!(teleport.destination, Some(Rect::new(320, 320, 64, 64)));
}

#[test]
fn floor_property_places_entities() {
    let (mut game, sink) = new_game();
    game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![
            obj(4, "FallingPlatform", Rect::new(0, 0, 0, 0), &[("floor", text("1"))]),
            obj(6, "Switch", Rect::new(64, 0, 32, 32), &[("floor", text("upstairs"))]),
        ],
    });
    let platform = game.entity(4).unwrap();
    assert_eq!(game.world().get::<Platform>(platform).unwrap().floor(), 1);
    assert_eq!(game.world().get::<Depth>(platform).unwrap().z(), 32);
    assert_eq!(
        game.world()
            .get::<floorbound::components::body::Body>(platform)
            .unwrap()
            .rect,
        Rect::new(0, 0, 32, 32)
    );
    assert_eq!(
        sink.count(|e| matches!(e, CoreEvent::InvalidProperty { id: 6, key, .. } if key == "floor")),
        1
    );
}

#[test]
fn out_of_range_floor_is_reported_and_placed_on_ground() {
    let (mut game, sink) = new_game();
    game.load_level(&LevelData {
        properties: Default::default(),
        objects: vec![
            player(),
            obj(10, "Switch", Rect::new(64, 0, 32, 32), &[("floor", text("100000000"))]),
            obj(
                20,
                "RisingPlatform",
                Rect::new(128, 0, 32, 32),
                &[("floor", PropertyValue::Int(5_000_000_000))],
            ),
        ],
    });
    game.tick(DT);

    let switch = game.entity(10).unwrap();
    assert_eq!(game.world().get::<Depth>(switch).unwrap().z(), 0);
    assert_eq!(game.world().get::<Switch>(switch).unwrap().floor, 0);
    let platform = game.entity(20).unwrap();
    assert_eq!(game.world().get::<Platform>(platform).unwrap().floor(), 0);
    assert_eq!(game.world().get::<Depth>(platform).unwrap().z(), 0);
    for id in [10, 20] {
        assert_eq!(
            sink.count(
                |e| matches!(e, CoreEvent::InvalidProperty { id: i, key, .. } if *i == id && key == "floor")
            ),
            1
        );
    }
}

#[test]
fn level_music_is_cued_on_first_frame() {
    let (mut game, _) = new_game();
    let cues = game.connect_audio();
    let mut properties = FxHashMap::default();
    properties.insert("music".to_string(), text("theme.ogg"));
    game.load_level(&LevelData {
        properties,
        objects: vec![player()],
    });
    game.tick(DT);

    let received: Vec<AudioCue> = cues.try_iter().collect();
    assert_eq!(
        received,
        vec![AudioCue::PlayMusic {
            path: "theme.ogg".to_string()
        }]
    );
}

#[test]
fn reloading_replaces_the_level() {
    let (mut game, _) = new_game();
    let level = LevelData {
        properties: Default::default(),
        objects: vec![player(), obj(3, "Keystone", Rect::new(200, 0, 32, 32), &[])],
    };
    game.load_level(&level);
    game.tick(DT);
    let report = game.load_level(&level);

    assert_eq!(report.spawned, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(game.status().frame, 0);
    let mut query = game
        .world_mut()
        .query::<&floorbound::components::identity::MapId>();
    assert_eq!(query.iter(game.world()).count(), 2);
}

#[test]
fn demo_level_loads() {
    let level = LevelData::load_from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/levels/demo.json"
    ))
    .unwrap();
    let (mut game, _) = new_game();
    let report = game.load_level(&level);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.links_unresolved, 0);
    assert_eq!(report.links_resolved, 3);
    assert!(game.player().is_some());
}
