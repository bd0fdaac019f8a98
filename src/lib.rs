//! # Innkeep
//!
//! An in-memory room registry for a small hotel:
//! - Unique-id CRUD over a singly-linked sequence of room records
//! - Vacant -> Occupied booking
//! - Date-sorted listing by in-place list quicksort
//! - Whole-file CSV save/load
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Menu CLI                                │
//! │                (numbered commands)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Hotel                                   │
//! │              (command routing, autosave)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  RoomStore  │          │   Persist   │
//!   │ CRUD, book, │◀────────▶│    (CSV)    │
//!   │    sort     │          └─────────────┘
//!   └──────┬──────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │    Arena    │
//!   │ (slot list) │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod room;
pub mod store;
pub mod booking;
pub mod persist;
pub mod command;
pub mod hotel;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{HotelError, Result};
pub use config::Config;
pub use hotel::Hotel;
pub use room::{BookingDate, Room, RoomId, RoomState};
pub use store::{RoomStore, RoomUpdate, SortStats};
pub use booking::BookingRequest;
pub use command::{Command, MenuChoice, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Innkeep
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
