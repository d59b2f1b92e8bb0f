//! Binary dungeon save format.
//!
//! Layout, all integers big-endian:
//! - 12-byte marker `RLG327-S2017`
//! - u32 format version (currently 0)
//! - u32 total file size in bytes
//! - HEIGHT x WIDTH per-cell hardness bytes, row-major
//! - one 4-byte record per room: start_x, start_y, width, height
//!   (inclusive spans)
//!
//! Cell kinds are not stored; loading derives them from hardness and
//! re-stamps the stored rooms.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::dungeon::{Grid, Room};
use crate::{DUNGEON_HEIGHT, DUNGEON_WIDTH};

/// Marker bytes at the start of every dungeon file.
pub const FILE_MARKER: &[u8; 12] = b"RLG327-S2017";

/// Current format version.
pub const FORMAT_VERSION: u32 = 0;

/// Header length: marker plus version plus file size.
const HEADER_LEN: usize = 12 + 4 + 4;

/// Errors from saving or loading a dungeon file
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("dungeon file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("not a dungeon file (bad marker)")]
    BadMarker,

    #[error("unsupported dungeon file version {0}")]
    UnsupportedVersion(u32),

    #[error("dungeon file is truncated or its size field is inconsistent")]
    Truncated,

    #[error("room record {index} lies outside the dungeon interior")]
    BadRoomRecord { index: usize },

    #[error("could not resolve the home directory")]
    NoHomeDirectory,
}

/// Write the grid's hardness and the room list to `path`.
pub fn save_dungeon(path: &Path, grid: &Grid, rooms: &[Room]) -> Result<(), SaveError> {
    let mut writer = BufWriter::new(File::create(path)?);

    let file_size = (HEADER_LEN + grid.height() * grid.width() + 4 * rooms.len()) as u32;
    writer.write_all(FILE_MARKER)?;
    writer.write_all(&FORMAT_VERSION.to_be_bytes())?;
    writer.write_all(&file_size.to_be_bytes())?;

    for coord in grid.coords() {
        writer.write_all(&[grid.cell(coord).hardness])?;
    }

    for room in rooms {
        writer.write_all(&[
            room.start_x as u8,
            room.start_y as u8,
            room.width() as u8,
            room.height() as u8,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a dungeon file written by [`save_dungeon`].
///
/// Returns the reconstructed grid (kinds derived from hardness, rooms
/// re-stamped) and the room list. No partial grid escapes on error.
pub fn load_dungeon(path: &Path) -> Result<(Grid, Vec<Room>), SaveError> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut marker = [0u8; 12];
    read_exact(&mut reader, &mut marker)?;
    if &marker != FILE_MARKER {
        return Err(SaveError::BadMarker);
    }

    let version = read_u32(&mut reader)?;
    if version != FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion(version));
    }
    let file_size = read_u32(&mut reader)? as usize;

    let cell_count = DUNGEON_HEIGHT * DUNGEON_WIDTH;
    if file_size < HEADER_LEN + cell_count || (file_size - HEADER_LEN - cell_count) % 4 != 0 {
        return Err(SaveError::Truncated);
    }
    let room_count = (file_size - HEADER_LEN - cell_count) / 4;

    let mut rows = Vec::with_capacity(DUNGEON_HEIGHT);
    for _ in 0..DUNGEON_HEIGHT {
        let mut row = vec![0u8; DUNGEON_WIDTH];
        read_exact(&mut reader, &mut row)?;
        rows.push(row);
    }
    let mut grid = Grid::from_hardness(&rows);

    let mut rooms = Vec::with_capacity(room_count);
    for index in 0..room_count {
        let mut record = [0u8; 4];
        read_exact(&mut reader, &mut record)?;
        let [start_x, start_y, width, height] = record.map(usize::from);
        if width == 0 || height == 0 {
            return Err(SaveError::BadRoomRecord { index });
        }
        let room = Room::new(start_x, start_x + width - 1, start_y, start_y + height - 1);
        let interior = room.start_x >= 1
            && room.end_x <= DUNGEON_WIDTH - 2
            && room.start_y >= 1
            && room.end_y <= DUNGEON_HEIGHT - 2;
        if !interior {
            return Err(SaveError::BadRoomRecord { index });
        }
        rooms.push(room);
    }

    for room in &rooms {
        grid.stamp_room(room);
    }

    Ok((grid, rooms))
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), SaveError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            SaveError::Truncated
        } else {
            SaveError::Io(e)
        }
    })
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, SaveError> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
