//! Dungeon generation pipeline.
//!
//! Rooms are placed one index at a time by randomized retry: draw a start
//! corner and a size, clamp the far edge back into the interior, shift the
//! start corner if clamping shrank the room below its minimum, then accept
//! the candidate only if it keeps a one-cell rock margin from every room
//! accepted at a lower index. Accepted rooms are stamped into the grid in
//! one pass and joined into a cycle by the corridor carver.

use thiserror::Error;

use crate::config::{ConfigError, DungeonConfig, MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH};
use crate::rng::DungeonRng;
use crate::{DUNGEON_HEIGHT, DUNGEON_WIDTH};

use super::corridor::carve_corridors;
use super::grid::{Coord, Grid};
use super::room::Room;

/// Retry cap per room index before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Room margin in rock cells required between any two rooms.
const ROOM_MARGIN: usize = 1;

/// Errors from dungeon generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not place room {room} after {attempts} attempts")]
    PlacementExhausted { room: usize, attempts: u32 },
}

/// A fully generated level: the carved grid, its rooms in placement
/// order, and the player's position.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub player: Coord,
}

/// Generate a complete dungeon from the given configuration.
///
/// Runs the full pipeline: grid initialization, room placement, corridor
/// carving, player placement. Distance fields are computed separately by
/// [`crate::pathing::compute_distances`].
pub fn generate_dungeon(config: &DungeonConfig) -> Result<Dungeon, GenerationError> {
    config.validate(DUNGEON_HEIGHT, DUNGEON_WIDTH)?;
    let mut rng = config
        .seed
        .map_or_else(DungeonRng::from_entropy, DungeonRng::new);

    let mut grid = Grid::new(DUNGEON_HEIGHT, DUNGEON_WIDTH);
    let rooms = place_rooms(grid.height(), grid.width(), config, &mut rng)?;
    for room in &rooms {
        grid.stamp_room(room);
    }
    carve_corridors(&mut grid, &rooms, &mut rng);
    let player = place_player(config.player, &rooms, &mut rng);

    Ok(Dungeon { grid, rooms, player })
}

/// Pick the player's cell: the requested coordinate if any, otherwise a
/// random cell inside the first room.
pub fn place_player(requested: Option<Coord>, rooms: &[Room], rng: &mut DungeonRng) -> Coord {
    match requested {
        Some(coord) => coord,
        None => {
            let room = &rooms[0];
            Coord::new(
                rng.range_inclusive(room.start_x, room.end_x),
                rng.range_inclusive(room.start_y, room.end_y),
            )
        }
    }
}

/// Place the configured number of rooms inside a `height` x `width` grid.
///
/// Each accepted room keeps [`ROOM_MARGIN`] rock cells from every
/// lower-indexed room; higher-indexed rooms do not exist yet, so the check
/// is intentionally one-sided. Returns [`GenerationError::PlacementExhausted`]
/// when a room index runs out of attempts.
pub fn place_rooms(
    height: usize,
    width: usize,
    config: &DungeonConfig,
    rng: &mut DungeonRng,
) -> Result<Vec<Room>, GenerationError> {
    assert!(
        width >= MIN_ROOM_WIDTH + 2 && height >= MIN_ROOM_HEIGHT + 2,
        "grid too small for any room: {height}x{width}"
    );

    let count = config.clamped_rooms();
    let mut rooms: Vec<Room> = Vec::with_capacity(count);

    for index in 0..count {
        let mut attempts = 0;
        loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                return Err(GenerationError::PlacementExhausted {
                    room: index,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = draw_room(height, width, config, rng);
            if rooms
                .iter()
                .all(|placed| !candidate.overlaps(placed, ROOM_MARGIN))
            {
                rooms.push(candidate);
                break;
            }
        }
    }

    Ok(rooms)
}

/// Draw one room candidate: random start corner and size, clamped and
/// shifted so the minimum size always fits inside the interior.
fn draw_room(height: usize, width: usize, config: &DungeonConfig, rng: &mut DungeonRng) -> Room {
    let mut start_x = rng.range_inclusive(1, width - MIN_ROOM_WIDTH - 1);
    let mut start_y = rng.range_inclusive(1, height - MIN_ROOM_HEIGHT - 1);
    let room_width = rng.range_inclusive(MIN_ROOM_WIDTH, config.max_room_width);
    let room_height = rng.range_inclusive(MIN_ROOM_HEIGHT, config.max_room_height);

    // Clamp the far edge into the interior, then shift the start corner
    // back if the clamp ate into the minimum size.
    let end_x = (start_x + room_width - 1).min(width - 2);
    if end_x - start_x + 1 < MIN_ROOM_WIDTH {
        start_x = end_x + 1 - MIN_ROOM_WIDTH;
    }
    let end_y = (start_y + room_height - 1).min(height - 2);
    if end_y - start_y + 1 < MIN_ROOM_HEIGHT {
        start_y = end_y + 1 - MIN_ROOM_HEIGHT;
    }

    let room = Room::new(start_x, end_x, start_y, end_y);
    debug_assert!(room.width() >= MIN_ROOM_WIDTH && room.height() >= MIN_ROOM_HEIGHT);
    room
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::CellKind;

    fn test_config(rooms: usize) -> DungeonConfig {
        DungeonConfig {
            rooms,
            seed: Some(0xD15EA5E),
            ..DungeonConfig::default()
        }
    }

    #[test]
    fn test_place_rooms_invariants() {
        let config = test_config(25);
        let mut rng = DungeonRng::new(42);
        let rooms = place_rooms(DUNGEON_HEIGHT, DUNGEON_WIDTH, &config, &mut rng).unwrap();
        assert_eq!(rooms.len(), 25);

        for (i, room) in rooms.iter().enumerate() {
            assert!(room.width() >= MIN_ROOM_WIDTH);
            assert!(room.height() >= MIN_ROOM_HEIGHT);
            assert!(room.width() <= config.max_room_width);
            assert!(room.height() <= config.max_room_height);
            assert!(room.start_x >= 1 && room.end_x <= DUNGEON_WIDTH - 2);
            assert!(room.start_y >= 1 && room.end_y <= DUNGEON_HEIGHT - 2);
            for other in &rooms[..i] {
                assert!(
                    !room.overlaps(other, ROOM_MARGIN),
                    "rooms {room:?} and {other:?} violate the margin"
                );
            }
        }
    }

    #[test]
    fn test_placement_exhausts_on_tiny_grid() {
        // 10 minimum-size rooms cannot fit in a 12x12 grid.
        let config = test_config(10);
        let mut rng = DungeonRng::new(7);
        let result = place_rooms(12, 12, &config, &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::PlacementExhausted { .. })
        ));
    }

    #[test]
    fn test_generate_dungeon_is_reproducible() {
        let config = test_config(12);
        let a = generate_dungeon(&config).unwrap();
        let b = generate_dungeon(&config).unwrap();
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.player, b.player);
        for coord in a.grid.coords() {
            assert_eq!(a.grid.cell(coord).hardness, b.grid.cell(coord).hardness);
        }
    }

    #[test]
    fn test_generate_dungeon_stamps_rooms_and_places_player() {
        let dungeon = generate_dungeon(&test_config(10)).unwrap();
        assert!(dungeon.rooms[0].contains(dungeon.player));
        for room in &dungeon.rooms {
            for y in room.start_y..=room.end_y {
                for x in room.start_x..=room.end_x {
                    let cell = dungeon.grid.cell(Coord::new(x, y));
                    assert_eq!(cell.kind, CellKind::Room);
                    assert!(cell.is_open());
                }
            }
        }
    }

    #[test]
    fn test_generate_dungeon_respects_requested_player() {
        let config = DungeonConfig {
            player: Some(Coord::new(80, 50)),
            ..test_config(10)
        };
        let dungeon = generate_dungeon(&config).unwrap();
        assert_eq!(dungeon.player, Coord::new(80, 50));
    }
}
