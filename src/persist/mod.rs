//! Persistence Module
//!
//! Saves and loads the full room sequence as a CSV file.
//!
//! ## File Format
//! ```text
//! Id,Date,Name,RoomType,IsAvailable
//! 101,2024-05-01,Alice,Single,false
//! 102,Not Booked,,Double,true
//! ```
//!
//! - `Date` is `YYYY-MM-DD` or `Not Booked` (any case on read)
//! - A header row is always written, even for an empty store
//! - Rows may be short on read; missing fields take their defaults
//!
//! Save replaces the whole file. There is no write-ahead or temp-file
//! swap: a failure mid-write can leave a truncated file.

mod codec;

pub use codec::{export, import, HEADER};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::error::{HotelError, Result};
use crate::room::Room;

/// Write `rooms` to `path`, replacing any existing file.
///
/// Returns the number of rooms written.
pub fn save<'a>(path: &Path, rooms: impl IntoIterator<Item = &'a Room>) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let count = export(rooms, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), rooms = count, "rooms saved");
    Ok(count)
}

/// Read every room from `path`.
///
/// A missing file is `PersistenceUnavailable`; any malformed row fails the
/// whole load.
pub fn load(path: &Path) -> Result<Vec<Room>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(HotelError::PersistenceUnavailable(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let rooms = import(BufReader::new(file))?;
    info!(path = %path.display(), rooms = rooms.len(), "rooms loaded");
    Ok(rooms)
}
