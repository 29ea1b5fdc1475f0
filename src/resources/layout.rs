//! Maze layout data and loading.
//!
//! Serializable structs describing a level: wall rectangles, food and
//! pellet positions, the two portal zones, and actor spawn points with
//! their initial facing. Coordinates are unscaled; the spawner multiplies
//! them by the configured scale factor.
//!
//! A malformed layout (negative dimensions, missing zones or spawns) is a
//! fatal configuration error surfaced by [`MazeLayout::validate`] before
//! the tick loop starts; per-tick systems assume a validated layout.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::direction::Direction;

/// Axis-aligned rectangle in unscaled layout coordinates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectDef {
    /// This rect with every coordinate multiplied by `scale`.
    pub fn scaled(&self, scale: f32) -> RectDef {
        RectDef {
            x: self.x * scale,
            y: self.y * scale,
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    fn has_negative_extent(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }
}

/// Actor spawn point: box plus initial facing.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SpawnDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl SpawnDef {
    pub fn rect(&self) -> RectDef {
        RectDef {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Ghost spawn point: a named spawn whose name selects its animation set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GhostDef {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl GhostDef {
    pub fn rect(&self) -> RectDef {
        RectDef {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// The two screen-wrap teleport zones.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PortalsDef {
    pub left: RectDef,
    pub right: RectDef,
}

/// Complete level description.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MazeLayout {
    pub walls: Vec<RectDef>,
    pub foods: Vec<RectDef>,
    pub pellets: Vec<RectDef>,
    pub portals: PortalsDef,
    pub player: SpawnDef,
    pub ghosts: Vec<GhostDef>,
}

impl MazeLayout {
    /// Load and validate a layout from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout {}: {}", path.display(), e))?;
        let layout: MazeLayout = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse layout {}: {}", path.display(), e))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check structural invariants the tick loop relies on.
    ///
    /// All rectangles must have non-negative extents and every ghost needs
    /// a non-empty name (it selects the ghost's animation set).
    pub fn validate(&self) -> Result<(), String> {
        let rect_groups: [(&str, &[RectDef]); 3] = [
            ("wall", &self.walls),
            ("food", &self.foods),
            ("pellet", &self.pellets),
        ];
        for (kind, rects) in rect_groups {
            for (i, rect) in rects.iter().enumerate() {
                if rect.has_negative_extent() {
                    return Err(format!("{} #{} has negative dimensions", kind, i));
                }
            }
        }
        if self.portals.left.has_negative_extent() || self.portals.right.has_negative_extent() {
            return Err("portal zone has negative dimensions".to_string());
        }
        if self.player.rect().has_negative_extent() {
            return Err("player spawn has negative dimensions".to_string());
        }
        for ghost in &self.ghosts {
            if ghost.rect().has_negative_extent() {
                return Err(format!("ghost '{}' spawn has negative dimensions", ghost.name));
            }
            if ghost.name.is_empty() {
                return Err("ghost spawn with empty name".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_layout() -> MazeLayout {
        MazeLayout {
            walls: vec![RectDef {
                x: 0.0,
                y: 0.0,
                width: 224.0,
                height: 8.0,
            }],
            foods: vec![],
            pellets: vec![],
            portals: PortalsDef {
                left: RectDef {
                    x: 0.0,
                    y: 100.0,
                    width: 2.0,
                    height: 13.0,
                },
                right: RectDef {
                    x: 222.0,
                    y: 100.0,
                    width: 2.0,
                    height: 13.0,
                },
            },
            player: SpawnDef {
                x: 100.0,
                y: 100.0,
                width: 13.0,
                height: 13.0,
                direction: Direction::Right,
            },
            ghosts: vec![GhostDef {
                name: "red".to_string(),
                x: 50.0,
                y: 100.0,
                width: 13.0,
                height: 13.0,
                direction: Direction::Up,
            }],
        }
    }

    #[test]
    fn valid_layout_passes_validation() {
        assert!(minimal_layout().validate().is_ok());
    }

    #[test]
    fn negative_wall_extent_is_rejected() {
        let mut layout = minimal_layout();
        layout.walls[0].width = -8.0;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn negative_portal_extent_is_rejected() {
        let mut layout = minimal_layout();
        layout.portals.right.height = -1.0;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn unnamed_ghost_is_rejected() {
        let mut layout = minimal_layout();
        layout.ghosts[0].name.clear();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn layout_round_trips_through_json() {
        let layout = minimal_layout();
        let json = serde_json::to_string(&layout).unwrap();
        let parsed: MazeLayout = serde_json::from_str(&json).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.walls.len(), 1);
        assert_eq!(parsed.ghosts[0].name, "red");
    }

    #[test]
    fn missing_portals_fail_to_parse() {
        let json = r#"{"walls":[],"foods":[],"pellets":[],
            "player":{"x":0,"y":0,"width":13,"height":13,"direction":"right"},
            "ghosts":[]}"#;
        assert!(serde_json::from_str::<MazeLayout>(json).is_err());
    }

    #[test]
    fn scaled_multiplies_all_coordinates() {
        let rect = RectDef {
            x: 2.0,
            y: 3.0,
            width: 4.0,
            height: 5.0,
        };
        let scaled = rect.scaled(3.0);
        assert_eq!(scaled.x, 6.0);
        assert_eq!(scaled.y, 9.0);
        assert_eq!(scaled.width, 12.0);
        assert_eq!(scaled.height, 15.0);
    }
}
