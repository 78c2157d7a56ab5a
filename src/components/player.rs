//! Grid-stepped player character.
//!
//! Movement happens in fixed steps of `movestep` map units, one axis at a
//! time. While a step is in progress input is ignored; once the destination
//! is reached the next step is chosen from the current direction flags, with
//! horizontal input winning over vertical.
//!
//! Direction flags are latched: a key press sets its flag and a release
//! clears it. Running into a wall clears every flag, so a held key does not
//! keep walking into the same obstacle until it is pressed again.

use bevy_ecs::prelude::Component;
use glam::{IVec2, Vec2};

use crate::components::trigger::TeleportTarget;
use crate::geometry::{self, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    fn from_direction(direction: IVec2) -> Option<Self> {
        match (direction.x.signum(), direction.y.signum()) {
            (-1, _) => Some(Facing::Left),
            (1, _) => Some(Facing::Right),
            (0, -1) => Some(Facing::Up),
            (0, 1) => Some(Facing::Down),
            _ => None,
        }
    }
}

/// Animation track the sprite collaborator should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnimation {
    Idle(Facing),
    Walk(Facing),
}

impl PlayerAnimation {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAnimation::Idle(Facing::Up) => "idle_up",
            PlayerAnimation::Idle(Facing::Down) => "idle_down",
            PlayerAnimation::Idle(Facing::Left) => "idle_left",
            PlayerAnimation::Idle(Facing::Right) => "idle_right",
            PlayerAnimation::Walk(Facing::Up) => "walk_up",
            PlayerAnimation::Walk(Facing::Down) => "walk_down",
            PlayerAnimation::Walk(Facing::Left) => "walk_left",
            PlayerAnimation::Walk(Facing::Right) => "walk_right",
        }
    }

    pub fn facing(&self) -> Facing {
        match self {
            PlayerAnimation::Idle(f) | PlayerAnimation::Walk(f) => *f,
        }
    }
}

/// The four latched direction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionInputs {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionInputs {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Unit step direction. Vertical input only counts when the horizontal
    /// flags cancel out or are both released.
    pub fn direction(&self) -> IVec2 {
        let dx = i32::from(self.right) - i32::from(self.left);
        let dy = if dx == 0 {
            i32::from(self.down) - i32::from(self.up)
        } else {
            0
        };
        IVec2::new(dx, dy)
    }
}

/// Tunables shared by every player instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    /// Step length in map units; destinations snap to multiples of it.
    pub movestep: i32,
    /// Linear speed in map units per second.
    pub speed: f32,
    pub width: i32,
    pub height: i32,
    pub feet_height: i32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            movestep: 16,
            speed: 200.0,
            width: 32,
            height: 32,
            feet_height: 10,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub inputs: DirectionInputs,
    position: Vec2,
    previous: Vec2,
    destination: Vec2,
    /// Direction of the step in progress; zero when idle.
    velocity: IVec2,
    settings: PlayerSettings,
    animation: PlayerAnimation,
}

impl Player {
    pub fn new(x: i32, y: i32, settings: PlayerSettings) -> Self {
        let position = Vec2::new(x as f32, y as f32);
        Self {
            inputs: DirectionInputs::default(),
            position,
            previous: position,
            destination: position,
            velocity: IVec2::ZERO,
            settings,
            animation: PlayerAnimation::Idle(Facing::Up),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn previous_position(&self) -> Vec2 {
        self.previous
    }

    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn is_stepping(&self) -> bool {
        self.velocity != IVec2::ZERO
    }

    pub fn animation(&self) -> PlayerAnimation {
        self.animation
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Full sprite rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
            self.settings.width,
            self.settings.height,
        )
    }

    /// Narrow strip along the bottom of the sprite used for ground collision.
    pub fn feet(&self) -> Rect {
        Rect::new(0, 0, self.settings.width, self.settings.feet_height)
            .with_mid_bottom(self.rect().mid_bottom())
    }

    /// Advance by `dt` seconds. Returns `true` if the player moved.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.previous = self.position;

        if self.velocity == IVec2::ZERO {
            let direction = self.inputs.direction();
            self.velocity = direction;
            self.destination = self.step_target(direction);
            if let Some(facing) = Facing::from_direction(direction) {
                self.animation = PlayerAnimation::Walk(facing);
            }
        }

        let reach = dt * self.settings.speed;
        let moved_x = approach(&mut self.position.x, self.destination.x, self.velocity.x, reach);
        let moved_y = approach(&mut self.position.y, self.destination.y, self.velocity.y, reach);

        if self.position == self.destination && self.velocity != IVec2::ZERO {
            self.velocity = IVec2::ZERO;
            if !self.inputs.any() {
                self.animation = PlayerAnimation::Idle(self.animation.facing());
            }
        }

        moved_x || moved_y
    }

    /// Undo this frame's movement out of any overlapping `obstacles`, using
    /// the feet rectangle. Clears inputs and cancels the current step when
    /// an obstacle pushed back.
    pub fn push_back(&mut self, obstacles: &[Rect]) -> bool {
        let result = geometry::push_back(&self.feet(), obstacles, self.position, self.previous);
        if result.blocked() {
            self.position = result.position;
            self.destination = self.position;
            self.inputs.clear();
        }
        result.blocked()
    }

    /// Destination one step away along `direction`, snapped to the step grid
    /// on the moving axis only.
    fn step_target(&self, direction: IVec2) -> Vec2 {
        let step = self.settings.movestep;
        let snap = |v: f32| ((v.round() as i32 + step / 2).div_euclid(step) * step) as f32;
        let mut target = self.position;
        if direction.x != 0 {
            target.x = snap(self.position.x + (direction.x * step) as f32);
        }
        if direction.y != 0 {
            target.y = snap(self.position.y + (direction.y * step) as f32);
        }
        target
    }
}

/// Move `value` toward `target` by at most `reach` along `sign`, landing
/// exactly on the target when within reach.
fn approach(value: &mut f32, target: f32, sign: i32, reach: f32) -> bool {
    if sign == 0 {
        return false;
    }
    let distance = (target - *value).abs();
    if distance == 0.0 {
        return false;
    }
    if reach >= distance {
        *value = target;
    } else {
        *value += sign as f32 * reach;
    }
    true
}

impl TeleportTarget for Player {
    fn teleport_to(&mut self, area: &Rect) {
        let rect = self.rect().clamp_into(area);
        self.position = Vec2::new(rect.x as f32, rect.y as f32);
        self.previous = self.position;
        self.destination = self.position;
        self.inputs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn player_at(x: i32, y: i32) -> Player {
        Player::new(x, y, PlayerSettings::default())
    }

    fn run_until_idle(player: &mut Player) -> usize {
        let mut ticks = 0;
        loop {
            player.advance(DT);
            ticks += 1;
            if !player.is_stepping() || ticks > 1000 {
                return ticks;
            }
        }
    }

    #[test]
    fn horizontal_input_wins() {
        let inputs = DirectionInputs {
            left: false,
            right: true,
            up: true,
            down: false,
        };
        assert_eq!(inputs.direction(), IVec2::new(1, 0));
    }

    #[test]
    fn opposing_horizontal_flags_fall_back_to_vertical() {
        let inputs = DirectionInputs {
            left: true,
            right: true,
            up: false,
            down: true,
        };
        assert_eq!(inputs.direction(), IVec2::new(0, 1));
    }

    #[test]
    fn one_step_reaches_aligned_destination() {
        let mut player = player_at(64, 64);
        player.inputs.right = true;
        player.advance(DT);
        assert_eq!(player.destination(), Vec2::new(80.0, 64.0));
        player.inputs.right = false;
        run_until_idle(&mut player);
        assert_eq!(player.position(), Vec2::new(80.0, 64.0));
        assert_eq!(player.animation(), PlayerAnimation::Idle(Facing::Right));
    }

    #[test]
    fn destination_snaps_to_step_grid() {
        let mut player = player_at(100, 64);
        player.inputs.left = true;
        player.advance(DT);
        assert_eq!(player.destination(), Vec2::new(80.0, 64.0));
    }

    #[test]
    fn input_is_ignored_mid_step() {
        let mut player = player_at(0, 0);
        player.inputs.down = true;
        player.advance(DT);
        player.inputs.down = false;
        player.inputs.right = true;
        player.advance(DT);
        assert_eq!(player.velocity(), IVec2::new(0, 1));
        assert_eq!(player.position().x, 0.0);
    }

    #[test]
    fn held_key_keeps_walking() {
        let mut player = player_at(0, 0);
        player.inputs.right = true;
        run_until_idle(&mut player);
        assert_eq!(player.position(), Vec2::new(16.0, 0.0));
        player.advance(DT);
        assert!(player.is_stepping());
        assert_eq!(player.destination(), Vec2::new(32.0, 0.0));
        assert!(matches!(player.animation(), PlayerAnimation::Walk(Facing::Right)));
    }

    #[test]
    fn idle_advance_does_not_move() {
        let mut player = player_at(5, 5);
        assert!(!player.advance(DT));
        assert_eq!(player.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn feet_sit_on_sprite_bottom() {
        let player = player_at(10, 20);
        assert_eq!(player.feet(), Rect::new(10, 42, 32, 10));
    }

    #[test]
    fn push_back_from_left_wall_restores_x_and_clears_inputs() {
        let mut player = player_at(100, 200);
        player.inputs.left = true;
        player.inputs.up = true;
        player.advance(DT);
        let before = player.previous_position();
        let wall = Rect::new(60, 150, player.rect().x - 60 + 1, 200);

        assert!(player.push_back(&[wall]));
        assert_eq!(player.position().x, before.x);
        assert_eq!(player.position().y, 200.0);
        assert!(!player.inputs.any());
    }

    #[test]
    fn push_back_from_wall_below_restores_y() {
        let mut player = player_at(100, 100);
        player.inputs.down = true;
        player.advance(DT);
        let feet = player.feet();
        let wall = Rect::new(0, feet.bottom() - 1, 400, 40);

        assert!(player.push_back(&[wall]));
        assert_eq!(player.position(), Vec2::new(100.0, 100.0));
        assert!(!player.inputs.any());
    }

    #[test]
    fn teleport_clamps_into_area() {
        let mut player = player_at(0, 0);
        player.inputs.right = true;
        player.teleport_to(&Rect::new(320, 320, 64, 64));
        assert_eq!(player.rect(), Rect::new(320, 320, 32, 32));
        assert_eq!(player.destination(), player.position());
        assert!(!player.inputs.any());
    }
}
