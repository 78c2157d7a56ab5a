use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::body::Body;
use crate::components::identity::MapId;
use crate::components::player::Player;
use crate::components::wall::Wall;
use crate::geometry::Rect;
use crate::resources::eventsink::{CoreEvent, EventSinkRes};

/// Push players whose feet overlap a wall back out of it.
///
/// Walls block on every floor.
pub fn wall_collision(
    walls: Query<(&MapId, &Body), (With<Wall>, Without<Player>)>,
    mut players: Query<(&MapId, &mut Player, &mut Body)>,
    sink: Res<EventSinkRes>,
) {
    for (player_id, mut player, mut body) in players.iter_mut() {
        let feet = player.feet();
        let hits: SmallVec<[(u32, Rect); 4]> = walls
            .iter()
            .filter(|(_, wall)| wall.overlaps(&feet))
            .map(|(id, wall)| (id.0, wall.rect))
            .collect();
        if hits.is_empty() {
            continue;
        }

        let obstacles: SmallVec<[Rect; 4]> = hits.iter().map(|(_, rect)| *rect).collect();
        if player.push_back(&obstacles) {
            body.rect = player.rect();
            for (wall_id, _) in &hits {
                sink.record(CoreEvent::PushedBack {
                    id: player_id.0,
                    obstacle: *wall_id,
                });
            }
        }
    }
}
