//! Per-frame input resource.
//!
//! Keyboard capture lives outside the core. The capturing collaborator calls
//! [`InputState::press`] and [`InputState::release`] as key events arrive,
//! and the [`Game`](crate::game::Game) clears the edge flags after each
//! frame with [`InputState::end_frame`].
use bevy_ecs::prelude::*;

/// Logical input actions the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    /// Debug: lift the player by one z unit.
    Raise,
    /// Debug: lower the player by one z unit.
    Lower,
    /// Debug: shake the camera.
    Shake,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edge flags.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed during this frame.
    pub just_pressed: bool,
    /// Whether the key was released during this frame.
    pub just_released: bool,
}

impl BoolState {
    fn press(&mut self) {
        if !self.active {
            self.just_pressed = true;
        }
        self.active = true;
    }

    fn release(&mut self) {
        if self.active {
            self.just_released = true;
        }
        self.active = false;
    }

    fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame state of every [`Action`].
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub raise: BoolState,
    pub lower: BoolState,
    pub shake: BoolState,
}

impl InputState {
    pub fn get(&self, action: Action) -> &BoolState {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Raise => &self.raise,
            Action::Lower => &self.lower,
            Action::Shake => &self.shake,
        }
    }

    fn get_mut(&mut self, action: Action) -> &mut BoolState {
        match action {
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
            Action::Raise => &mut self.raise,
            Action::Lower => &mut self.lower,
            Action::Shake => &mut self.shake,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.get_mut(action).press();
    }

    pub fn release(&mut self, action: Action) {
        self.get_mut(action).release();
    }

    /// Clear the edge flags. Held keys stay active.
    pub fn end_frame(&mut self) {
        for state in [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.raise,
            &mut self.lower,
            &mut self.shake,
        ] {
            state.end_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        for action in [
            Action::Left,
            Action::Right,
            Action::Up,
            Action::Down,
            Action::Raise,
            Action::Lower,
            Action::Shake,
        ] {
            assert_eq!(*input.get(action), BoolState::default());
        }
    }

    #[test]
    fn test_press_sets_edge_once() {
        let mut input = InputState::default();
        input.press(Action::Left);
        assert!(input.left.active);
        assert!(input.left.just_pressed);
        input.end_frame();
        input.press(Action::Left); // key repeat
        assert!(input.left.active);
        assert!(!input.left.just_pressed);
    }

    #[test]
    fn test_release_sets_edge() {
        let mut input = InputState::default();
        input.press(Action::Up);
        input.end_frame();
        input.release(Action::Up);
        assert!(!input.up.active);
        assert!(input.up.just_released);
        input.end_frame();
        assert!(!input.up.just_released);
    }
}
