//! Time helpers
//!
//! Stay dates are `NaiveDate`; everything else is Unix millis.

use chrono::NaiveDate;
use shared::{HotelError, HotelResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> HotelResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| HotelError::validation(format!("Invalid date format: {}", date)))
}

/// Day difference between check-in and check-out, minimum 1.
///
/// A same-day stay still bills one night.
pub fn stay_days(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(1)
}

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
