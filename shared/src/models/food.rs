//! Food & Beverage Models

use serde::{Deserialize, Serialize};

/// Food item entity (`name` is the unique key)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Unit price in minor currency units, always > 0
    pub price: i64,
    pub description: String,
    /// Remaining stock; never decremented below zero
    pub stock: u32,
}

/// Create food item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemCreate {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub stock: u32,
}

/// Update food item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemUpdate {
    pub price: Option<i64>,
    pub description: Option<String>,
    pub stock: Option<u32>,
}

/// Room-service order record, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodOrder {
    pub customer_id: String,
    pub room_number: u32,
    pub food_name: String,
    pub count: u32,
    /// `count * unit price` at order time, minor currency units
    pub total_price: i64,
    /// Unix millis
    pub timestamp: i64,
}
