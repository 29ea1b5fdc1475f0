//! Cardinal movement directions and buffered direction intent.
//!
//! Actors in the maze only ever move along one axis at a time. [`Direction`]
//! names the four legal headings and knows how to map itself to a unit
//! velocity, to its animation track keys, and to the pair of directions
//! orthogonal to it (used by the ghost redirection AI).
//!
//! [`PendingDirection`] is the buffered intent: the latest requested turn,
//! kept until the steering system can legally honor it.
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// One of the four cardinal headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit velocity vector for this heading. Exactly one axis is non-zero.
    pub fn unit(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// The two headings orthogonal to this one.
    ///
    /// Vertical headings map to the horizontal pair and vice versa. The
    /// ghost AI draws its random redirections from this pair only, so a
    /// ghost never re-selects its current axis of motion.
    pub fn orthogonal(&self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// Animation track key for normal movement in this heading.
    pub fn track(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Animation track key for the blocked-against-a-wall variant.
    pub fn wait_track(&self) -> &'static str {
        match self {
            Direction::Up => "waitup",
            Direction::Down => "waitdown",
            Direction::Left => "waitleft",
            Direction::Right => "waitright",
        }
    }

    /// Parse a heading back out of an animation track key.
    ///
    /// Accepts both the plain directional tracks and their `wait*`
    /// variants. Returns `None` for non-directional tracks such as `die`.
    pub fn from_track(key: &str) -> Option<Direction> {
        let key = key.strip_prefix("wait").unwrap_or(key);
        match key {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Buffered movement intent for an actor.
///
/// Holds at most the single latest requested heading. The steering system
/// clears it exactly when the corresponding turn is accepted; a blocked
/// turn leaves it in place for retry on a later tick.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PendingDirection(pub Option<Direction>);
