//! Command definitions
//!
//! The numbered menu operations and what they return.

use std::fmt;

use crate::booking::BookingRequest;
use crate::error::HotelError;
use crate::room::{Room, RoomId};
use crate::store::RoomUpdate;

/// Menu numbers, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    AllocateRoom = 1,
    SearchRoom = 2,
    UpdateBooking = 3,
    DeleteBooking = 4,
    ShowRooms = 5,
    BookRoom = 6,
    ShowAvailable = 7,
    Save = 8,
    Load = 9,
    Exit = 10,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AllocateRoom,
        MenuChoice::SearchRoom,
        MenuChoice::UpdateBooking,
        MenuChoice::DeleteBooking,
        MenuChoice::ShowRooms,
        MenuChoice::BookRoom,
        MenuChoice::ShowAvailable,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuChoice::AllocateRoom => "Allocate Room",
            MenuChoice::SearchRoom => "Search Room",
            MenuChoice::UpdateBooking => "Booking Update",
            MenuChoice::DeleteBooking => "Booking Delete",
            MenuChoice::ShowRooms => "Show Room Records",
            MenuChoice::BookRoom => "Book Room",
            MenuChoice::ShowAvailable => "Show Available Rooms",
            MenuChoice::Save => "Save to CSV",
            MenuChoice::Load => "Load from CSV",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::AllocateRoom => "Insert New Room",
            MenuChoice::SearchRoom => "Search Room with Room ID",
            MenuChoice::UpdateBooking => "Update a Booking Record",
            MenuChoice::DeleteBooking => "Delete a Booking Record",
            MenuChoice::ShowRooms => "Show Room Records (Sorted by Date)",
            MenuChoice::BookRoom => "Book an Available Room",
            MenuChoice::ShowAvailable => "Show Available Rooms",
            MenuChoice::Save => "Save Data to CSV File",
            MenuChoice::Load => "Load Data from CSV File",
            MenuChoice::Exit => "Save and Exit",
        }
    }
}

impl TryFrom<u8> for MenuChoice {
    type Error = HotelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or_else(|| HotelError::InvalidInput(format!("no menu choice {}", value)))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A fully-parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert a new vacant room
    Allocate { id: RoomId, room_type: String },

    /// Look up one room
    Search { id: RoomId },

    /// Edit a room's fields
    Update { id: RoomId, update: RoomUpdate },

    /// Remove a room
    Delete { id: RoomId },

    /// Sort by date, then list everything
    ShowRooms,

    /// Book a vacant room
    Book { id: RoomId, request: BookingRequest },

    /// List vacant rooms
    ShowAvailable,

    /// Write the data file
    Save,

    /// Replace all rooms from the data file
    Load,

    /// Autosave (if enabled) and stop
    Exit,
}

impl Command {
    /// Menu entry this command belongs to
    pub fn choice(&self) -> MenuChoice {
        match self {
            Command::Allocate { .. } => MenuChoice::AllocateRoom,
            Command::Search { .. } => MenuChoice::SearchRoom,
            Command::Update { .. } => MenuChoice::UpdateBooking,
            Command::Delete { .. } => MenuChoice::DeleteBooking,
            Command::ShowRooms => MenuChoice::ShowRooms,
            Command::Book { .. } => MenuChoice::BookRoom,
            Command::ShowAvailable => MenuChoice::ShowAvailable,
            Command::Save => MenuChoice::Save,
            Command::Load => MenuChoice::Load,
            Command::Exit => MenuChoice::Exit,
        }
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Mutation applied
    Done,

    /// A single room
    Room(Room),

    /// Rooms in display order
    Rooms(Vec<Room>),

    /// The room that was removed
    Deleted(Room),

    /// Rooms written to the data file
    Saved { rooms: usize },

    /// Rooms read from the data file
    Loaded { rooms: usize },

    /// Load found no data file; nothing changed
    NoData,

    /// Session ended; `saved` is the autosave count, if one ran
    Exited { saved: Option<usize> },
}
