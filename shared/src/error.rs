//! Error taxonomy
//!
//! Business-rule violations are recoverable and always reported to the caller
//! as typed failures with enough context to render a specific message.
//! `Persistence` is surfaced without undoing the in-memory mutation that
//! preceded it; the caller must treat the entity kind's state as tentatively
//! inconsistent with durable storage.

use crate::models::RoomStatus;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotelError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("room {room_number}: illegal transition {current} -> {attempted}")]
    InvalidTransition {
        room_number: u32,
        current: RoomStatus,
        attempted: RoomStatus,
    },

    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: u32,
    },

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("reservation already cancelled: {0}")]
    AlreadyCancelled(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl HotelError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        HotelError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        HotelError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        HotelError::Unauthorized(msg.into())
    }
}

pub type HotelResult<T> = Result<T, HotelError>;
