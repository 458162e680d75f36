//! Domain models
//!
//! Entities are plain serde structs; every status field is a closed enum with
//! exhaustive matching at the use sites. Monetary amounts are `i64` in minor
//! currency units, timestamps are Unix millis.

mod billing;
mod customer;
mod food;
mod reservation;
mod room;

pub use billing::{Bill, OccupancyReport, Payment};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use food::{FoodItem, FoodItemCreate, FoodItemUpdate, FoodOrder};
pub use reservation::{Reservation, ReservationStatus};
pub use room::{Room, RoomCreate, RoomStatus, RoomUpdate};
