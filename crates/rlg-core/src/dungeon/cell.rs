//! Grid cell types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Hardness of the immutable border rock. Never diggable.
pub const IMMUTABLE_HARDNESS: u8 = 255;

/// Hardness of freshly initialized interior rock.
pub const ROCK_HARDNESS: u8 = 200;

/// How a cell was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Rock = 0,
    Room = 1,
    Corridor = 2,
}

impl CellKind {
    /// Check if this kind marks a carved (open) cell
    pub const fn is_carved(&self) -> bool {
        matches!(self, CellKind::Room | CellKind::Corridor)
    }
}

/// One grid position.
///
/// `hardness` is the cost-to-dig: 0 is open floor, 1-254 is diggable rock,
/// 255 is the immutable border. The two distance fields are filled in by
/// the pathing engine after generation; `None` means unreached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    pub hardness: u8,
    pub kind: CellKind,
    pub tunneling_distance: Option<u32>,
    pub non_tunneling_distance: Option<u32>,
}

impl Cell {
    /// A fresh interior rock cell
    pub const fn rock() -> Self {
        Self {
            hardness: ROCK_HARDNESS,
            kind: CellKind::Rock,
            tunneling_distance: None,
            non_tunneling_distance: None,
        }
    }

    /// An immutable border cell
    pub const fn immutable() -> Self {
        Self {
            hardness: IMMUTABLE_HARDNESS,
            kind: CellKind::Rock,
            tunneling_distance: None,
            non_tunneling_distance: None,
        }
    }

    /// Check if this cell is open floor (no digging required)
    pub const fn is_open(&self) -> bool {
        self.hardness == 0
    }

    /// Check if this cell can ever be dug through
    pub const fn is_diggable(&self) -> bool {
        self.hardness < IMMUTABLE_HARDNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_constructors() {
        let rock = Cell::rock();
        assert_eq!(rock.hardness, ROCK_HARDNESS);
        assert_eq!(rock.kind, CellKind::Rock);
        assert!(!rock.is_open());
        assert!(rock.is_diggable());

        let border = Cell::immutable();
        assert_eq!(border.hardness, IMMUTABLE_HARDNESS);
        assert!(!border.is_diggable());
    }

    #[test]
    fn test_kind_is_carved() {
        assert!(!CellKind::Rock.is_carved());
        assert!(CellKind::Room.is_carved());
        assert!(CellKind::Corridor.is_carved());
    }
}
