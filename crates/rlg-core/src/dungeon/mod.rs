//! Dungeon model and generation.
//!
//! Contains the cell grid, rooms, randomized room placement, and corridor
//! carving.

mod cell;
mod corridor;
mod generation;
mod grid;
mod room;

pub use cell::{Cell, CellKind, IMMUTABLE_HARDNESS, ROCK_HARDNESS};
pub use corridor::carve_corridors;
pub use generation::{
    Dungeon, GenerationError, MAX_PLACEMENT_ATTEMPTS, generate_dungeon, place_player, place_rooms,
};
pub use grid::{Coord, Grid};
pub use room::Room;
