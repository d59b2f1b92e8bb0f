//! Dual-metric Dijkstra distance fields.
//!
//! Both passes share one algorithm: enqueue every traversable cell (the
//! player's at 0, the rest unreached), then repeatedly finalize the
//! minimum and relax its 8-connected traversable neighbors through
//! decrease-key. Weights are non-negative by construction, so finalized
//! distances are exact.

use crate::dungeon::{Cell, Coord, Grid, IMMUTABLE_HARDNESS};

use super::queue::DistanceQueue;

/// Sentinel key for cells not yet reached.
const UNREACHED: u32 = u32::MAX;

/// Digging effort tier for a cell of the given hardness.
///
/// Open floor and soft rock cost 1, mid rock 2, hard rock 3. Immutable
/// rock is never traversed, so it has no weight.
pub fn tunneling_weight(hardness: u8) -> u32 {
    match hardness {
        0..=84 => 1,
        85..=170 => 2,
        171..=254 => 3,
        _ => unreachable!("immutable rock is never enqueued"),
    }
}

#[derive(Debug, Clone, Copy)]
enum Metric {
    /// Open floor only, every step costs 1.
    NonTunneling,
    /// Anything short of immutable rock, at tiered digging cost.
    Tunneling,
}

impl Metric {
    fn traversable(self, cell: &Cell) -> bool {
        match self {
            Metric::NonTunneling => cell.hardness == 0,
            Metric::Tunneling => cell.hardness < IMMUTABLE_HARDNESS,
        }
    }

    /// Cost of stepping into `cell`.
    fn step_weight(self, cell: &Cell) -> u32 {
        match self {
            Metric::NonTunneling => 1,
            Metric::Tunneling => tunneling_weight(cell.hardness),
        }
    }
}

/// Compute both distance fields from the player's cell and write them
/// into the grid. Cells with no path under a metric are left unreached.
pub fn compute_distances(grid: &mut Grid, player: Coord) {
    let non_tunneling = distance_field(grid, player, Metric::NonTunneling);
    let tunneling = distance_field(grid, player, Metric::Tunneling);

    let width = grid.width();
    for coord in grid.coords().collect::<Vec<_>>() {
        let id = coord.y * width + coord.x;
        grid.set_non_tunneling_distance(coord, finite(non_tunneling[id]));
        grid.set_tunneling_distance(coord, finite(tunneling[id]));
    }
}

fn finite(key: u32) -> Option<u32> {
    (key != UNREACHED).then_some(key)
}

/// One Dijkstra pass. Returns a flat row-major field keyed by
/// `y * width + x`, with [`UNREACHED`] for cells the metric never reached
/// (including cells it never enqueued).
fn distance_field(grid: &Grid, player: Coord, metric: Metric) -> Vec<u32> {
    let (height, width) = (grid.height(), grid.width());
    let mut dist = vec![UNREACHED; height * width];
    let mut queue = DistanceQueue::new(height, width);

    for coord in grid.coords() {
        if !metric.traversable(grid.cell(coord)) {
            continue;
        }
        let initial = if coord == player { 0 } else { UNREACHED };
        dist[coord.y * width + coord.x] = initial;
        queue.insert(coord, initial);
    }

    while let Some((coord, key)) = queue.extract_min() {
        if key == UNREACHED {
            // Everything still queued is unreachable.
            break;
        }
        for neighbor in grid.neighbors8(coord) {
            let cell = grid.cell(neighbor);
            if !metric.traversable(cell) {
                continue;
            }
            let candidate = key + metric.step_weight(cell);
            let id = neighbor.y * width + neighbor.x;
            if candidate < dist[id] {
                dist[id] = candidate;
                queue.decrease_key(neighbor, candidate);
            }
        }
    }

    // Unreached cells keep the sentinel; the player's own cell is 0 when
    // it was traversable at all.
    dist
}
