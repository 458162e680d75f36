//! Shared domain types for the hotel transactional core
//!
//! This crate holds everything the service layer and its collaborators agree
//! on: the entity models with their closed status enumerations, the typed
//! error taxonomy, and the whole-collection [`Store`] persistence contract.

pub mod error;
pub mod models;
pub mod store;
pub mod util;

pub use error::{HotelError, HotelResult};
pub use models::{
    Bill, Customer, CustomerCreate, CustomerUpdate, FoodItem, FoodItemCreate, FoodItemUpdate,
    FoodOrder, OccupancyReport, Payment, Reservation, ReservationStatus, Room, RoomCreate,
    RoomStatus, RoomUpdate,
};
pub use store::{load_all, save_all, EntityKind, Store, StoreError, StoreResult};
