//! Dungeon persistence: the on-disk format and where it lives.

mod paths;
mod save;

pub use paths::{dungeon_directory, dungeon_file_path, ensure_dungeon_directory};
pub use save::{FILE_MARKER, FORMAT_VERSION, SaveError, load_dungeon, save_dungeon};
