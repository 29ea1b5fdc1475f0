//! Score/status resource.
//!
//! The point accumulator is the simulation's only output sink besides logs.
//! Points only ever grow; the display string is regenerated on every change
//! so a status renderer can show it verbatim.
use bevy_ecs::prelude::Resource;

/// Points awarded per regular collectible.
pub const FOOD_POINTS: u32 = 100;
/// Points awarded per captured ghost.
pub const CAPTURE_POINTS: u32 = 5000;

#[derive(Resource, Debug, Clone)]
pub struct Score {
    points: u32,
    display: String,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self {
            points: 0,
            display: format_points(0),
        }
    }

    /// Add points and refresh the display string.
    pub fn award(&mut self, points: u32) {
        self.points += points;
        self.display = format_points(self.points);
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

fn format_points(points: u32) -> String {
    format!("{} points", points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let score = Score::new();
        assert_eq!(score.points(), 0);
        assert_eq!(score.display(), "0 points");
    }

    #[test]
    fn award_accumulates_and_refreshes_display() {
        let mut score = Score::new();
        score.award(FOOD_POINTS);
        score.award(FOOD_POINTS);
        assert_eq!(score.points(), 200);
        assert_eq!(score.display(), "200 points");
        score.award(CAPTURE_POINTS);
        assert_eq!(score.points(), 5200);
    }
}
