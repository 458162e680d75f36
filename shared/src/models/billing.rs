//! Billing Models
//!
//! `Bill` and `OccupancyReport` are derived on demand and never persisted;
//! `Payment` is an append-only record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Checkout bill, computed from the active stay plus matching food orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub reservation_id: String,
    pub room_number: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Day difference between check-in and check-out, minimum 1
    pub stay_days: i64,
    pub room_fee: i64,
    pub food_fee: i64,
    pub total_amount: i64,
    /// Human-readable summary of ordered items, one line per order
    pub food_items_summary: String,
}

/// Immutable payment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Server-generated `PAY-XXXXXXXX` token
    pub payment_id: String,
    pub customer_id: String,
    pub room_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    pub amount: i64,
    pub method: String,
    /// Unix millis
    pub timestamp: i64,
}

/// Occupancy and revenue report over a date window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_rooms: usize,
    pub occupied: usize,
    pub reserved: usize,
    /// Percent of rooms currently occupied
    pub occupancy_rate: f64,
    /// Percent of rooms currently occupied or reserved
    pub reservation_rate: f64,
    /// Non-cancelled reservations with check-in inside the window
    pub room_revenue: i64,
    /// Full order log (the order ledger carries no date window)
    pub fnb_revenue: i64,
    pub total_revenue: i64,
}
