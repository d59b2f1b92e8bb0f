//! Generation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::Coord;

/// Fewest rooms a dungeon may have.
pub const MIN_NUMBER_OF_ROOMS: usize = 10;

/// Most rooms a dungeon may have.
pub const MAX_NUMBER_OF_ROOMS: usize = 50;

/// Minimum room width in cells.
pub const MIN_ROOM_WIDTH: usize = 7;

/// Minimum room height in cells.
pub const MIN_ROOM_HEIGHT: usize = 5;

/// Default maximum room width in cells.
pub const DEFAULT_MAX_ROOM_WIDTH: usize = 15;

/// Default maximum room height in cells.
pub const DEFAULT_MAX_ROOM_HEIGHT: usize = 10;

/// Configuration errors, all surfaced before generation starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player coordinates ({x}, {y}) are outside the dungeon interior")]
    PlayerOutOfBounds { x: usize, y: usize },

    #[error("maximum room {dimension} {max} is below the minimum {min}")]
    RoomBoundsInverted {
        dimension: &'static str,
        max: usize,
        min: usize,
    },
}

/// Parameters for one dungeon generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Requested room count, clamped to
    /// [`MIN_NUMBER_OF_ROOMS`]..=[`MAX_NUMBER_OF_ROOMS`] at use.
    pub rooms: usize,
    /// Largest room width placement may draw.
    pub max_room_width: usize,
    /// Largest room height placement may draw.
    pub max_room_height: usize,
    /// Player position; `None` places the player in the first room.
    pub player: Option<Coord>,
    /// RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            rooms: MIN_NUMBER_OF_ROOMS,
            max_room_width: DEFAULT_MAX_ROOM_WIDTH,
            max_room_height: DEFAULT_MAX_ROOM_HEIGHT,
            player: None,
            seed: None,
        }
    }
}

impl DungeonConfig {
    /// The room count to actually generate
    pub fn clamped_rooms(&self) -> usize {
        self.rooms.clamp(MIN_NUMBER_OF_ROOMS, MAX_NUMBER_OF_ROOMS)
    }

    /// Validate against the target grid dimensions.
    ///
    /// Checks the player coordinate (if any) is strictly inside the
    /// border and that the room size bounds are not inverted.
    pub fn validate(&self, height: usize, width: usize) -> Result<(), ConfigError> {
        if let Some(coord) = self.player {
            let inside = coord.x >= 1 && coord.x < width - 1 && coord.y >= 1 && coord.y < height - 1;
            if !inside {
                return Err(ConfigError::PlayerOutOfBounds {
                    x: coord.x,
                    y: coord.y,
                });
            }
        }
        if self.max_room_width < MIN_ROOM_WIDTH {
            return Err(ConfigError::RoomBoundsInverted {
                dimension: "width",
                max: self.max_room_width,
                min: MIN_ROOM_WIDTH,
            });
        }
        if self.max_room_height < MIN_ROOM_HEIGHT {
            return Err(ConfigError::RoomBoundsInverted {
                dimension: "height",
                max: self.max_room_height,
                min: MIN_ROOM_HEIGHT,
            });
        }
        Ok(())
    }
}
