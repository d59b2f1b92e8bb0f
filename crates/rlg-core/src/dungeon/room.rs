//! Rectangular rooms.

use serde::{Deserialize, Serialize};

use super::grid::Coord;

/// An axis-aligned rectangular room with inclusive bounds.
///
/// Rooms are accepted in order during placement and never mutated
/// afterwards; their index in the room list drives corridor connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub start_x: usize,
    pub end_x: usize,
    pub start_y: usize,
    pub end_y: usize,
}

impl Room {
    pub fn new(start_x: usize, end_x: usize, start_y: usize, end_y: usize) -> Self {
        debug_assert!(start_x <= end_x && start_y <= end_y);
        Self {
            start_x,
            end_x,
            start_y,
            end_y,
        }
    }

    /// Width in cells (inclusive span)
    pub fn width(&self) -> usize {
        self.end_x - self.start_x + 1
    }

    /// Height in cells (inclusive span)
    pub fn height(&self) -> usize {
        self.end_y - self.start_y + 1
    }

    /// The center cell, rounding toward the start corner
    pub fn center(&self) -> Coord {
        Coord::new(
            self.start_x + (self.end_x - self.start_x) / 2,
            self.start_y + (self.end_y - self.start_y) / 2,
        )
    }

    /// Check if a coordinate lies inside the room
    pub fn contains(&self, coord: Coord) -> bool {
        (self.start_x..=self.end_x).contains(&coord.x)
            && (self.start_y..=self.end_y).contains(&coord.y)
    }

    /// Check if this room, expanded by `margin` cells on every side,
    /// intersects another room.
    pub fn overlaps(&self, other: &Room, margin: usize) -> bool {
        !(self.end_x + margin < other.start_x
            || other.end_x + margin < self.start_x
            || self.end_y + margin < other.start_y
            || other.end_y + margin < self.start_y)
    }
}
