//! Slot arena backing the linked room sequence
//!
//! Nodes live in a `Vec` of slots and link to each other by `SlotId`.
//! Released slots go on a free list and are reused by later allocations,
//! so a `SlotId` stays valid for as long as its node is linked.

use std::fmt;

use crate::room::{BookingDate, Room};

/// Identifies a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(pub usize);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A linked node: one room plus the link to its successor
#[derive(Debug)]
pub(crate) struct Node {
    pub room: Room,
    pub next: Option<SlotId>,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    /// `None` marks a released slot
    slots: Vec<Option<Node>>,

    /// Released slots, reused LIFO
    free: Vec<SlotId>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a room in a fresh, unlinked node.
    pub fn alloc(&mut self, room: Room) -> SlotId {
        let node = Node { room, next: None };

        match self.free.pop() {
            Some(slot) => {
                self.slots[slot.0] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        }
    }

    /// Release a node and hand its room back. The caller unlinks it first.
    pub fn release(&mut self, slot: SlotId) -> Option<Room> {
        let node = self.slots.get_mut(slot.0)?.take()?;
        self.free.push(slot);
        Some(node.room)
    }

    pub fn get(&self, slot: SlotId) -> Option<&Node> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Node> {
        self.slots.get_mut(slot.0).and_then(Option::as_mut)
    }

    pub fn room(&self, slot: SlotId) -> Option<&Room> {
        self.get(slot).map(|node| &node.room)
    }

    pub fn next(&self, slot: SlotId) -> Option<SlotId> {
        self.get(slot).and_then(|node| node.next)
    }

    pub fn set_next(&mut self, slot: SlotId, next: Option<SlotId>) {
        if let Some(node) = self.get_mut(slot) {
            node.next = next;
        }
    }

    /// Detach a node from its successor, returning the old link.
    pub fn take_next(&mut self, slot: SlotId) -> Option<SlotId> {
        self.get_mut(slot).and_then(|node| node.next.take())
    }

    /// Sort key of a linked node. Released slots never sit in a chain.
    pub fn date(&self, slot: SlotId) -> BookingDate {
        self.room(slot)
            .map(|room| room.booking_date)
            .unwrap_or_default()
    }

    /// Number of live nodes
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
