//! rlg-core: Dungeon generation and distance fields for a roguelike.
//!
//! This crate contains the algorithmic core with no terminal dependencies:
//! a bounded grid of diggable cells, randomized room placement, corridor
//! carving, and two Dijkstra distance fields (walking and tunneling)
//! computed from the player's position. File persistence for the dungeon
//! lives in [`world`].

pub mod config;
pub mod dungeon;
pub mod pathing;
pub mod rng;
pub mod world;

/// Dungeon height in cells, including the immutable border.
pub const DUNGEON_HEIGHT: usize = 105;

/// Dungeon width in cells, including the immutable border.
pub const DUNGEON_WIDTH: usize = 160;

pub use config::{ConfigError, DungeonConfig};
pub use dungeon::{
    Cell, CellKind, Coord, Dungeon, GenerationError, Grid, Room, carve_corridors,
    generate_dungeon, place_player,
};
pub use pathing::{DistanceQueue, compute_distances};
pub use rng::DungeonRng;
pub use world::{SaveError, load_dungeon, save_dungeon};
