//! Dungeon file locations.
//!
//! The dungeon lives at `$HOME/.rlg327/dungeon`.

use std::fs;
use std::path::PathBuf;

use super::save::SaveError;

/// Directory name under the home directory.
const DUNGEON_DIR: &str = ".rlg327";

/// Dungeon file name inside [`DUNGEON_DIR`].
const DUNGEON_FILE: &str = "dungeon";

/// The dungeon directory path, without creating it
pub fn dungeon_directory() -> Result<PathBuf, SaveError> {
    dirs::home_dir()
        .map(|home| home.join(DUNGEON_DIR))
        .ok_or(SaveError::NoHomeDirectory)
}

/// The dungeon directory path, created if missing
pub fn ensure_dungeon_directory() -> Result<PathBuf, SaveError> {
    let dir = dungeon_directory()?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of the dungeon save file
pub fn dungeon_file_path() -> Result<PathBuf, SaveError> {
    Ok(dungeon_directory()?.join(DUNGEON_FILE))
}
