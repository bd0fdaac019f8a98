//! Room Module
//!
//! The room record: the only entity the registry stores.
//!
//! ## Invariants
//! - `id` is unique across the store (enforced by `RoomStore`)
//! - A vacant room has no guest and a `NOT_BOOKED` date
//! - An occupied room carries the guest and date it was booked with

mod date;

pub use date::{BookingDate, DATE_FORMAT, NOT_BOOKED_LABEL};

use chrono::NaiveDate;

/// Room identifier
pub type RoomId = i32;

/// Booking status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomState {
    /// No active booking
    Vacant,

    /// Booked by a guest
    Occupied,
}

/// A single room record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub room_type: String,
    pub available: bool,
    pub guest_name: Option<String>,
    pub booking_date: BookingDate,
}

impl Room {
    /// Create a vacant room
    pub fn new(id: RoomId, room_type: impl Into<String>) -> Self {
        Self {
            id,
            room_type: room_type.into(),
            available: true,
            guest_name: None,
            booking_date: BookingDate::NOT_BOOKED,
        }
    }

    pub fn state(&self) -> RoomState {
        if self.available {
            RoomState::Vacant
        } else {
            RoomState::Occupied
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.state() == RoomState::Occupied
    }

    /// Set guest and date and mark the room occupied.
    ///
    /// Callers check the current state first; this only writes fields.
    pub(crate) fn occupy(&mut self, guest_name: &str, date: NaiveDate) {
        self.guest_name = normalize_guest(guest_name);
        self.booking_date = BookingDate::on(date);
        self.available = false;
    }
}

/// Empty (or blank) guest names are stored as no guest.
pub(crate) fn normalize_guest(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
