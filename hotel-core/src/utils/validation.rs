//! Input validation helpers
//!
//! Centralized limits and checks shared by the admin CRUD paths. Business
//! rules stay in the services; this module only rejects malformed input
//! before it reaches a critical section.

use shared::{HotelError, HotelResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: food items, room types, customers
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and notes
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, payment methods
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> HotelResult<()> {
    if value.trim().is_empty() {
        return Err(HotelError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(HotelError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> HotelResult<()> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(HotelError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Validate a monetary amount: strictly positive.
pub fn validate_price(price: i64, field: &str) -> HotelResult<()> {
    if price <= 0 {
        return Err(HotelError::validation(format!(
            "{field} must be positive, got {price}"
        )));
    }
    Ok(())
}

/// Validate an order quantity: at least one unit.
pub fn validate_count(count: u32, field: &str) -> HotelResult<()> {
    if count == 0 {
        return Err(HotelError::validation(format!("{field} must be at least 1")));
    }
    Ok(())
}
