//! Booking state machine
//!
//! ```text
//!            book(guest, date)
//!   Vacant ─────────────────────▶ Occupied
//! ```
//!
//! There is no way back to `Vacant`: a booked room stays occupied. Its
//! guest and date can still be edited through [`RoomStore::update`].

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{HotelError, Result};
use crate::room::{Room, RoomId, RoomState};
use crate::store::RoomStore;

/// Guest and date for a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub guest_name: String,
    pub date: NaiveDate,
}

impl BookingRequest {
    pub fn new(guest_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            guest_name: guest_name.into(),
            date,
        }
    }
}

impl RoomStore {
    /// Book a vacant room.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyBooked` for an
    /// occupied room; in both cases nothing changes.
    pub fn book(&mut self, id: RoomId, request: BookingRequest) -> Result<()> {
        let slot = self.find_slot(id).ok_or(HotelError::NotFound(id))?;
        let room = self.room_mut(slot).ok_or(HotelError::NotFound(id))?;

        if room.is_occupied() {
            warn!(room_id = id, "booking rejected: room already booked");
            return Err(HotelError::AlreadyBooked(id));
        }

        room.occupy(&request.guest_name, request.date);
        info!(room_id = id, date = %request.date, "room booked");
        Ok(())
    }

    /// Booking state of a room
    pub fn state(&self, id: RoomId) -> Option<RoomState> {
        self.find(id).map(Room::state)
    }

    /// Vacant rooms in current list order
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.iter().filter(|room| room.state() == RoomState::Vacant)
    }
}
