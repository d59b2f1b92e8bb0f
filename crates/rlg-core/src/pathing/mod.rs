//! Distance fields over the finished grid.
//!
//! An indexed binary min-heap drives two single-source Dijkstra passes
//! from the player's cell: one over open floor only, one allowing digging
//! through rock at tiered cost.

mod distance;
mod queue;

pub use distance::{compute_distances, tunneling_weight};
pub use queue::DistanceQueue;
