//! Room Model

use serde::{Deserialize, Serialize};

/// Room lifecycle status
///
/// Legal transitions:
/// `Available → Reserved → Occupied → Cleaning → Available`, plus
/// `Available → Occupied` (walk-in) and `Reserved/Occupied → Available`
/// (cancellation / force-release).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Reserved,
    Occupied,
    Cleaning,
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Reserved => "RESERVED",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Cleaning => "CLEANING",
        };
        f.write_str(s)
    }
}

/// Room entity
///
/// `room_number` is the immutable unique key; `status` mutates exclusively
/// through the room service transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub room_number: u32,
    pub room_type: String,
    /// Nightly base price in minor currency units
    pub base_price: i64,
    pub status: RoomStatus,
}

/// Create room payload (admin registration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: u32,
    pub room_type: String,
    pub base_price: i64,
}

/// Update room payload (type / price only; status goes through transitions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub room_type: Option<String>,
    pub base_price: Option<i64>,
}
