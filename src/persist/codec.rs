//! CSV codec
//!
//! Converts between room records and CSV rows. File handling lives in the
//! parent module; everything here works on any reader or writer.

use std::collections::HashSet;
use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{HotelError, Result};
use crate::room::{normalize_guest, BookingDate, Room, RoomId};

/// Column header, always the first row
pub const HEADER: [&str; 5] = ["Id", "Date", "Name", "RoomType", "IsAvailable"];

/// Outgoing row, borrowed from a room
#[derive(Serialize)]
struct RowOut<'a> {
    id: RoomId,
    date: String,
    name: &'a str,
    room_type: &'a str,
    is_available: bool,
}

impl<'a> From<&'a Room> for RowOut<'a> {
    fn from(room: &'a Room) -> Self {
        Self {
            id: room.id,
            date: room.booking_date.to_string(),
            name: room.guest_name.as_deref().unwrap_or(""),
            room_type: &room.room_type,
            is_available: room.available,
        }
    }
}

/// Incoming row, kept as text so each column can default or fail on its own
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RowIn {
    #[serde(rename = "Id")]
    id: String,

    #[serde(rename = "Date")]
    date: String,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "RoomType")]
    room_type: String,

    #[serde(rename = "IsAvailable")]
    is_available: String,
}

// =============================================================================
// Export
// =============================================================================

/// Write the header and one row per room. Returns the row count.
pub fn export<'a, W: Write>(rooms: impl IntoIterator<Item = &'a Room>, writer: W) -> Result<usize> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(HEADER)?;

    let mut count = 0;
    for room in rooms {
        csv.serialize(RowOut::from(room))?;
        count += 1;
    }

    csv.flush()?;
    Ok(count)
}

// =============================================================================
// Import
// =============================================================================

/// Read every row. Any bad row or a repeated id fails the whole import.
pub fn import<R: Read>(reader: R) -> Result<Vec<Room>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let mut rooms = Vec::new();
    let mut seen = HashSet::new();

    for (index, row) in csv.deserialize::<RowIn>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let room = parse_row(row?, line)?;

        if !seen.insert(room.id) {
            return Err(row_failure(line, format!("duplicate Id {}", room.id)));
        }
        rooms.push(room);
    }

    Ok(rooms)
}

/// `RoomType` is kept verbatim; the other columns are trimmed before parsing.
fn parse_row(row: RowIn, line: usize) -> Result<Room> {
    let id_text = row.id.trim();
    let id = if id_text.is_empty() {
        RoomId::default()
    } else {
        id_text
            .parse::<RoomId>()
            .map_err(|_| row_failure(line, format!("invalid Id '{}'", row.id)))?
    };

    let booking_date = row
        .date
        .parse::<BookingDate>()
        .map_err(|_| row_failure(line, format!("invalid Date '{}'", row.date)))?;

    let available = parse_bool(row.is_available.trim())
        .ok_or_else(|| row_failure(line, format!("invalid IsAvailable '{}'", row.is_available)))?;

    Ok(Room {
        id,
        room_type: row.room_type,
        available,
        guest_name: normalize_guest(&row.name),
        booking_date,
    })
}

/// `true`/`false` in any case; empty defaults to `false`.
fn parse_bool(text: &str) -> Option<bool> {
    if text.is_empty() || text.eq_ignore_ascii_case("false") {
        Some(false)
    } else if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}

fn row_failure(line: usize, message: String) -> HotelError {
    HotelError::PersistenceFailure(format!("line {}: {}", line, message))
}
