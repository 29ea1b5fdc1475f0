//! Buffered directional input resource.
//!
//! The input collaborator (keyboard handler, demo script, test) writes the
//! latest direction press here; the apply system forwards it to the
//! player's pending direction once per tick. There is no buffering beyond
//! the single latest value: a new press overwrites an unconsumed one.
use bevy_ecs::prelude::Resource;

use crate::components::direction::Direction;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pressed: Option<Direction>,
}

impl InputState {
    /// Record a direction press, replacing any unconsumed one.
    pub fn press(&mut self, dir: Direction) {
        self.pressed = Some(dir);
    }

    /// Consume the buffered press, if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.pressed.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_press_overwrites_unconsumed_one() {
        let mut input = InputState::default();
        input.press(Direction::Up);
        input.press(Direction::Left);
        assert_eq!(input.take(), Some(Direction::Left));
        assert_eq!(input.take(), None);
    }
}
