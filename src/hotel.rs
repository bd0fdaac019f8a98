//! Hotel Module
//!
//! The facade the menu talks to. Owns the configuration and the room store.
//!
//! ## Responsibilities
//! - Route menu commands to the store, booking and sort operations
//! - Save/load the data file, replacing the store wholesale on load
//! - Autosave on exit when configured

use tracing::{debug, info};

use crate::booking::BookingRequest;
use crate::command::{Command, Response};
use crate::config::Config;
use crate::error::{HotelError, Result};
use crate::persist;
use crate::room::{Room, RoomId};
use crate::store::{RoomStore, RoomUpdate};

/// A single hotel's room registry
///
/// Exclusively owned by its caller; every operation runs to completion on
/// `&mut self` before the next starts.
pub struct Hotel {
    /// Hotel configuration
    config: Config,

    /// All rooms, in list order
    store: RoomStore,
}

impl Hotel {
    /// Create a hotel with an empty store
    ///
    /// With `load_on_start`, the data file is read first; a missing file is
    /// fine, a malformed one is an error.
    pub fn open(config: Config) -> Result<Self> {
        let mut hotel = Self {
            config,
            store: RoomStore::new(),
        };

        if hotel.config.load_on_start {
            hotel.load()?;
        }

        Ok(hotel)
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!(choice = command.choice().number(), "executing command");

        match command {
            Command::Allocate { id, room_type } => {
                self.allocate(id, room_type)?;
                Ok(Response::Done)
            }
            Command::Search { id } => self.search(id).cloned().map(Response::Room),
            Command::Update { id, update } => {
                self.update(id, update)?;
                Ok(Response::Done)
            }
            Command::Delete { id } => self.delete(id).map(Response::Deleted),
            Command::ShowRooms => Ok(Response::Rooms(self.show_rooms())),
            Command::Book { id, request } => {
                self.book(id, request)?;
                Ok(Response::Done)
            }
            Command::ShowAvailable => Ok(Response::Rooms(self.available_rooms())),
            Command::Save => self.save().map(|rooms| Response::Saved { rooms }),
            Command::Load => Ok(match self.load()? {
                Some(rooms) => Response::Loaded { rooms },
                None => Response::NoData,
            }),
            Command::Exit => self.autosave().map(|saved| Response::Exited { saved }),
        }
    }

    // =========================================================================
    // Room Operations
    // =========================================================================

    pub fn allocate(&mut self, id: RoomId, room_type: impl Into<String>) -> Result<()> {
        self.store.insert(id, room_type)
    }

    pub fn search(&self, id: RoomId) -> Result<&Room> {
        self.store.find(id).ok_or(HotelError::NotFound(id))
    }

    pub fn update(&mut self, id: RoomId, update: RoomUpdate) -> Result<()> {
        self.store.update(id, update)
    }

    pub fn delete(&mut self, id: RoomId) -> Result<Room> {
        self.store.delete(id)
    }

    /// Sort the store by date and return every room in the new order.
    pub fn show_rooms(&mut self) -> Vec<Room> {
        self.store.sort_by_date();
        self.store.iter().cloned().collect()
    }

    pub fn book(&mut self, id: RoomId, request: BookingRequest) -> Result<()> {
        self.store.book(id, request)
    }

    pub fn available_rooms(&self) -> Vec<Room> {
        self.store.available_rooms().cloned().collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every room to the data file. Returns the room count.
    pub fn save(&self) -> Result<usize> {
        persist::save(&self.config.data_file, &self.store)
    }

    /// Replace the store with the data file's rooms.
    ///
    /// `Ok(None)` means no data file was found and the store is untouched.
    /// On any other failure the store is also untouched.
    pub fn load(&mut self) -> Result<Option<usize>> {
        let rooms = match persist::load(&self.config.data_file) {
            Ok(rooms) => rooms,
            Err(HotelError::PersistenceUnavailable(path)) => {
                info!(path = %path.display(), "no saved data found");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let count = rooms.len();
        self.store.replace_all(rooms)?;
        Ok(Some(count))
    }

    /// Close the hotel, saving first if `autosave_on_exit` is set.
    pub fn close(self) -> Result<Option<usize>> {
        self.autosave()
    }

    fn autosave(&self) -> Result<Option<usize>> {
        if !self.config.autosave_on_exit {
            return Ok(None);
        }
        self.save().map(Some)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Read-only view of the store
    pub fn rooms(&self) -> &RoomStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
