//! Error types for Innkeep
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::room::RoomId;

/// Result type alias using HotelError
pub type Result<T> = std::result::Result<T, HotelError>;

/// Unified error type for Innkeep operations
#[derive(Debug, Error)]
pub enum HotelError {
    // -------------------------------------------------------------------------
    // Record Store Errors
    // -------------------------------------------------------------------------
    #[error("Room ID {0} already exists")]
    DuplicateId(RoomId),

    #[error("Room ID {0} not found")]
    NotFound(RoomId),

    // -------------------------------------------------------------------------
    // Booking Errors
    // -------------------------------------------------------------------------
    #[error("Room {0} is already booked")]
    AlreadyBooked(RoomId),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("No data found at {}", .0.display())]
    PersistenceUnavailable(PathBuf),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for HotelError {
    fn from(err: csv::Error) -> Self {
        HotelError::PersistenceFailure(err.to_string())
    }
}
