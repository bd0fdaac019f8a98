//! Record Store Module
//!
//! Owns every room record in a singly-linked sequence.
//!
//! ## Responsibilities
//! - Unique-id CRUD over the sequence
//! - Insertion order until a sort runs; sort output order afterwards
//! - Destructive date sort by relinking nodes (see [`sort`])
//!
//! ## Layout
//! ```text
//!   head
//!    │
//!    ▼
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Slot(2)  │───▶│ Slot(0)  │───▶│ Slot(1)  │───▶ None
//! │ Room 103 │    │ Room 101 │    │ Room 102 │
//! └──────────┘    └──────────┘    └──────────┘
//! ```
//! Nodes live in a slot arena; `next` links are slot indices.
//!
//! Every mutating operation validates before it touches a link or a field,
//! so a failed call leaves the store exactly as it was.

mod arena;
pub mod sort;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::booking::BookingRequest;
use crate::error::{HotelError, Result};
use crate::room::{Room, RoomId};

use arena::{Arena, SlotId};
pub use sort::SortStats;

/// Field changes applied by [`RoomStore::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUpdate {
    /// Replacement id (may equal the current one)
    pub new_id: RoomId,

    /// Replacement room type
    pub room_type: String,

    /// Replacement guest and date; only applied to occupied rooms
    pub booking: Option<BookingRequest>,
}

/// Linked sequence of room records
#[derive(Debug, Default)]
pub struct RoomStore {
    arena: Arena,
    head: Option<SlotId>,
}

impl RoomStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
        }
    }

    /// Build a store from rooms in the given order.
    ///
    /// Fails with `DuplicateId` if two rooms share an id.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self> {
        let mut store = Self::new();
        store.replace_all(rooms)?;
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.arena.live()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Append a new vacant room at the tail.
    pub fn insert(&mut self, id: RoomId, room_type: impl Into<String>) -> Result<()> {
        if self.contains(id) {
            warn!(room_id = id, "insert rejected: duplicate id");
            return Err(HotelError::DuplicateId(id));
        }

        let slot = self.arena.alloc(Room::new(id, room_type));
        match self.tail() {
            Some(tail) => self.arena.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }

        debug!(room_id = id, %slot, "room inserted");
        Ok(())
    }

    /// Find a room by id
    pub fn find(&self, id: RoomId) -> Option<&Room> {
        self.iter().find(|room| room.id == id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.find(id).is_some()
    }

    /// Change a room's id and type, and its guest/date if it is occupied.
    ///
    /// A booking payload for a vacant room is ignored; vacant rooms only
    /// gain a guest through [`RoomStore::book`].
    pub fn update(&mut self, id: RoomId, update: RoomUpdate) -> Result<()> {
        let slot = self.find_slot(id).ok_or(HotelError::NotFound(id))?;

        if update.new_id != id && self.contains(update.new_id) {
            warn!(room_id = id, new_id = update.new_id, "update rejected: duplicate id");
            return Err(HotelError::DuplicateId(update.new_id));
        }

        let room = self.room_mut(slot).ok_or(HotelError::NotFound(id))?;
        room.id = update.new_id;
        room.room_type = update.room_type;

        match update.booking {
            Some(booking) if room.is_occupied() => {
                room.occupy(&booking.guest_name, booking.date);
            }
            Some(_) => {
                debug!(room_id = id, "room is vacant, booking fields left unchanged");
            }
            None => {}
        }

        debug!(room_id = id, new_id = update.new_id, "room updated");
        Ok(())
    }

    /// Unlink a room and return it.
    pub fn delete(&mut self, id: RoomId) -> Result<Room> {
        let mut prev: Option<SlotId> = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            let next = self.arena.next(slot);

            if self.arena.room(slot).map(|room| room.id) == Some(id) {
                match prev {
                    None => self.head = next,
                    Some(prev) => self.arena.set_next(prev, next),
                }
                debug!(room_id = id, %slot, "room deleted");
                return self.arena.release(slot).ok_or(HotelError::NotFound(id));
            }

            prev = Some(slot);
            cursor = next;
        }

        Err(HotelError::NotFound(id))
    }

    /// Iterate rooms in current list order
    pub fn iter(&self) -> Rooms<'_> {
        Rooms {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    /// Drop every room
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    /// Discard the current sequence and rebuild it from `rooms`, in order.
    ///
    /// Ids are checked first; on `DuplicateId` the store is unchanged.
    pub fn replace_all(&mut self, rooms: Vec<Room>) -> Result<()> {
        let mut seen = HashSet::with_capacity(rooms.len());
        if let Some(dup) = rooms.iter().find(|room| !seen.insert(room.id)) {
            return Err(HotelError::DuplicateId(dup.id));
        }

        self.clear();

        let mut tail: Option<SlotId> = None;
        for room in rooms {
            let slot = self.arena.alloc(room);
            match tail {
                Some(tail) => self.arena.set_next(tail, Some(slot)),
                None => self.head = Some(slot),
            }
            tail = Some(slot);
        }

        Ok(())
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Reorder the sequence by booking date, not-booked rooms first.
    ///
    /// Stable; the previous order is not retained.
    pub fn sort_by_date(&mut self) -> SortStats {
        let (head, stats) = sort::sort_by_date(&mut self.arena, self.head);
        self.head = head;

        debug!(
            records = stats.records,
            partitions = stats.partitions,
            "rooms sorted by date"
        );
        stats
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn slots(&self) -> Slots<'_> {
        Slots {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    pub(crate) fn find_slot(&self, id: RoomId) -> Option<SlotId> {
        self.slots()
            .find(|&slot| self.arena.room(slot).map(|room| room.id) == Some(id))
    }

    pub(crate) fn room_mut(&mut self, slot: SlotId) -> Option<&mut Room> {
        self.arena.get_mut(slot).map(|node| &mut node.room)
    }

    /// Walk to the last node; no tail pointer is cached.
    fn tail(&self) -> Option<SlotId> {
        self.slots().last()
    }
}

impl<'a> IntoIterator for &'a RoomStore {
    type Item = &'a Room;
    type IntoIter = Rooms<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over rooms in list order
pub struct Rooms<'a> {
    arena: &'a Arena,
    cursor: Option<SlotId>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.room)
    }
}

struct Slots<'a> {
    arena: &'a Arena,
    cursor: Option<SlotId>,
}

impl Iterator for Slots<'_> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        self.cursor = self.arena.next(slot);
        Some(slot)
    }
}
