//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
///
/// The phone number doubles as a soft unique key for front-desk lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Server-generated `CUST-XXXXXXXX` token
    pub customer_id: String,
    pub name: String,
    pub phone_number: String,
}

/// Register customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone_number: String,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}
