//! Hotel Core - transactional state management for a hotel server
//!
//! # Architecture
//!
//! The crate owns the shared mutable hotel state and keeps it correct under
//! concurrent requests:
//!
//! - **Room lifecycle** (`services::RoomService`): the AVAILABLE / RESERVED /
//!   OCCUPIED / CLEANING state machine
//! - **Reservation ledger** (`services::ReservationService`): booking,
//!   check-in/out and cancellation, kept consistent with room state
//! - **Inventory** (`services::InventoryService`): food stock and the
//!   serialized room-service order path
//! - **Billing** (`services::BillingService`): pure bill aggregation and
//!   append-only payments
//!
//! # Module Structure
//!
//! ```text
//! hotel-core/src/
//! ├── core/          # Config, dependency-injected HotelState
//! ├── services/      # The transactional services
//! ├── store/         # Whole-collection Store implementations
//! └── utils/         # Logger, validation, time helpers
//! ```
//!
//! Every mutating operation runs as one critical section per entity kind:
//! read, check, mutate, persist through the [`shared::Store`] collaborator,
//! all under that kind's write lock. The wire transport and request dispatch
//! live outside this crate and call the services with already-typed arguments.

pub mod core;
pub mod services;
pub mod store;
pub mod utils;

pub use crate::core::{Config, HotelState};
pub use services::{
    BillingService, CustomerService, InventoryService, ReportService, ReservationService,
    RoomService,
};
pub use store::{JsonFileStore, MemoryStore};
pub use utils::logger::{init_logger, init_logger_with_file};
