//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Cancellation marks the record `Cancelled` and retains it; reservations are
/// never physically removed from the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    Cancelled,
    Completed,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::CheckedIn => "CHECKED_IN",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Server-generated `RES-XXXXXXXX` token, unique within the ledger
    pub reservation_id: String,
    pub customer_id: String,
    /// References an existing room at creation time
    pub room_number: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Total room charge for the stay, minor currency units
    pub total_price: i64,
    pub status: ReservationStatus,
    /// Creation timestamp, Unix millis (ledger append order tie-break)
    pub created_at: i64,
}

impl Reservation {
    /// Whether this record still binds the room (Confirmed or CheckedIn).
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Confirmed | ReservationStatus::CheckedIn
        )
    }
}
