//! ASCII rendering of the dungeon and its distance maps.
//!
//! Glyphs: rock ' ', room '.', corridor '#', player '@'. Distance maps
//! print each cell's distance modulo 10; cells a metric cannot reach (or
//! never enters) print a space.

use rlg_core::{Cell, CellKind, Coord, Grid};

/// Render the dungeon map
pub fn render_dungeon(grid: &Grid, player: Coord) -> String {
    render(grid, player, |cell| match cell.kind {
        CellKind::Rock => ' ',
        CellKind::Room => '.',
        CellKind::Corridor => '#',
    })
}

/// Render the walking distance map: open cells show distance mod 10
pub fn render_non_tunneling(grid: &Grid, player: Coord) -> String {
    render(grid, player, |cell| {
        if cell.kind == CellKind::Rock {
            ' '
        } else {
            distance_digit(cell.non_tunneling_distance)
        }
    })
}

/// Render the tunneling distance map: everything diggable shows distance
/// mod 10
pub fn render_tunneling(grid: &Grid, player: Coord) -> String {
    render(grid, player, |cell| {
        if cell.is_diggable() {
            distance_digit(cell.tunneling_distance)
        } else {
            ' '
        }
    })
}

fn distance_digit(distance: Option<u32>) -> char {
    match distance {
        Some(d) => char::from_digit(d % 10, 10).expect("mod 10 is a digit"),
        None => ' ',
    }
}

fn render(grid: &Grid, player: Coord, glyph: impl Fn(&Cell) -> char) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            if coord == player {
                out.push('@');
            } else {
                out.push(glyph(grid.cell(coord)));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlg_core::{Room, compute_distances};

    fn small_dungeon() -> (Grid, Coord) {
        let mut grid = Grid::new(7, 12);
        grid.stamp_room(&Room::new(2, 8, 2, 4));
        let player = Coord::new(3, 3);
        compute_distances(&mut grid, player);
        (grid, player)
    }

    #[test]
    fn test_dungeon_glyphs() {
        let (grid, player) = small_dungeon();
        let map = render_dungeon(&grid, player);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.len() == 12));
        assert_eq!(&lines[3][2..9], ".@.....");
        assert_eq!(lines[0], "            ");
    }

    #[test]
    fn test_non_tunneling_map_digits_and_blanks() {
        let (grid, player) = small_dungeon();
        let map = render_non_tunneling(&grid, player);
        let lines: Vec<&str> = map.lines().collect();
        // Player row: distances grow walking away from the player.
        assert_eq!(&lines[3][2..9], "1@12345");
        // Rock stays blank.
        assert_eq!(lines[6], "            ");
    }

    #[test]
    fn test_tunneling_map_covers_diggable_rock() {
        let (grid, player) = small_dungeon();
        let map = render_tunneling(&grid, player);
        let lines: Vec<&str> = map.lines().collect();
        // The immutable border prints blank, diggable interior rock does not.
        assert_eq!(lines[0], "            ");
        assert!(lines[5].trim_start().chars().next().unwrap().is_ascii_digit());
        assert_eq!(lines[3].chars().nth(3).unwrap(), '@');
    }
}
