//! The dungeon grid.
//!
//! A fixed HEIGHT x WIDTH array of cells. Every cell on the outermost
//! rows/columns is immutable border rock and is never written again after
//! construction; carving is the only mutation the generation stages use.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellKind};
use super::room::Room;

/// A grid coordinate. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// King-move neighbor offsets.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The dungeon grid, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid of solid rock with an immutable border.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is smaller than 3 (no interior).
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height >= 3 && width >= 3, "grid has no interior: {height}x{width}");
        let mut cells = vec![vec![Cell::rock(); width]; height];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                    *cell = Cell::immutable();
                }
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    /// Rebuild a grid from per-cell hardness values, row-major.
    ///
    /// Cell kinds are derived from hardness: open cells load as corridors
    /// until rooms are stamped back over them.
    ///
    /// # Panics
    ///
    /// Panics if rows are ragged or either dimension is smaller than 3.
    pub fn from_hardness(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(height >= 3 && width >= 3, "grid has no interior: {height}x{width}");
        let cells = rows
            .iter()
            .map(|row| {
                assert_eq!(row.len(), width, "ragged hardness rows");
                row.iter()
                    .map(|&hardness| Cell {
                        hardness,
                        kind: if hardness == 0 {
                            CellKind::Corridor
                        } else {
                            CellKind::Rock
                        },
                        tunneling_distance: None,
                        non_tunneling_distance: None,
                    })
                    .collect()
            })
            .collect();
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.y][coord.x]
    }

    /// Check if a coordinate lies on the immutable border
    pub fn is_border(&self, coord: Coord) -> bool {
        coord.y == 0 || coord.y == self.height - 1 || coord.x == 0 || coord.x == self.width - 1
    }

    /// Check if a coordinate lies strictly inside the border
    pub fn contains_interior(&self, coord: Coord) -> bool {
        coord.x >= 1 && coord.x < self.width - 1 && coord.y >= 1 && coord.y < self.height - 1
    }

    /// Open an interior cell: hardness 0, kind Room or Corridor.
    ///
    /// # Panics
    ///
    /// Panics on a border cell or a Rock kind; both indicate a generation
    /// logic defect, not a runtime condition.
    pub fn carve(&mut self, coord: Coord, kind: CellKind) {
        assert!(
            self.contains_interior(coord),
            "carve outside the interior at ({}, {})",
            coord.x,
            coord.y
        );
        assert!(kind.is_carved(), "carve must open a cell, got {kind}");
        let cell = &mut self.cells[coord.y][coord.x];
        cell.hardness = 0;
        cell.kind = kind;
    }

    /// Carve every cell of a room
    pub fn stamp_room(&mut self, room: &Room) {
        for y in room.start_y..=room.end_y {
            for x in room.start_x..=room.end_x {
                self.carve(Coord::new(x, y), CellKind::Room);
            }
        }
    }

    /// The 8-connected neighbors of a coordinate, bounded by the grid edges
    pub fn neighbors8(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = coord.x as i32 + dx;
            let y = coord.y as i32 + dy;
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                Some(Coord::new(x as usize, y as usize))
            } else {
                None
            }
        })
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }

    pub(crate) fn set_tunneling_distance(&mut self, coord: Coord, distance: Option<u32>) {
        self.cells[coord.y][coord.x].tunneling_distance = distance;
    }

    pub(crate) fn set_non_tunneling_distance(&mut self, coord: Coord, distance: Option<u32>) {
        self.cells[coord.y][coord.x].non_tunneling_distance = distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::cell::{IMMUTABLE_HARDNESS, ROCK_HARDNESS};

    #[test]
    fn test_new_grid_border_and_interior() {
        let grid = Grid::new(10, 12);
        for coord in grid.coords() {
            let cell = grid.cell(coord);
            if grid.is_border(coord) {
                assert_eq!(cell.hardness, IMMUTABLE_HARDNESS);
            } else {
                assert_eq!(cell.hardness, ROCK_HARDNESS);
                assert!(grid.contains_interior(coord));
            }
            assert_eq!(cell.kind, CellKind::Rock);
        }
    }

    #[test]
    fn test_carve_opens_cell() {
        let mut grid = Grid::new(10, 10);
        grid.carve(Coord::new(3, 4), CellKind::Corridor);
        let cell = grid.cell(Coord::new(3, 4));
        assert_eq!(cell.hardness, 0);
        assert_eq!(cell.kind, CellKind::Corridor);
    }

    #[test]
    #[should_panic(expected = "carve outside the interior")]
    fn test_carve_border_panics() {
        let mut grid = Grid::new(10, 10);
        grid.carve(Coord::new(0, 5), CellKind::Room);
    }

    #[test]
    #[should_panic(expected = "carve must open a cell")]
    fn test_carve_rock_kind_panics() {
        let mut grid = Grid::new(10, 10);
        grid.carve(Coord::new(2, 2), CellKind::Rock);
    }

    #[test]
    fn test_neighbors8_corner_and_center() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.neighbors8(Coord::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors8(Coord::new(5, 5)).count(), 8);
        assert_eq!(grid.neighbors8(Coord::new(9, 5)).count(), 5);
    }

    #[test]
    fn test_from_hardness_derives_kinds() {
        let mut rows = vec![vec![255u8; 5]; 5];
        rows[2][2] = 0;
        rows[2][3] = 130;
        let grid = Grid::from_hardness(&rows);
        assert_eq!(grid.cell(Coord::new(2, 2)).kind, CellKind::Corridor);
        assert_eq!(grid.cell(Coord::new(3, 2)).kind, CellKind::Rock);
        assert_eq!(grid.cell(Coord::new(3, 2)).hardness, 130);
    }

    #[test]
    fn test_stamp_room() {
        let mut grid = Grid::new(20, 20);
        let room = Room::new(2, 8, 3, 7);
        grid.stamp_room(&room);
        for y in 3..=7 {
            for x in 2..=8 {
                let cell = grid.cell(Coord::new(x, y));
                assert_eq!(cell.kind, CellKind::Room);
                assert!(cell.is_open());
            }
        }
        assert_eq!(grid.cell(Coord::new(9, 5)).kind, CellKind::Rock);
    }
}
