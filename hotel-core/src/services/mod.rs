//! Transactional services
//!
//! Each service owns one (or two) entity-kind collections behind a coarse
//! `parking_lot::RwLock` and persists every mutation through the Store while
//! still holding the write lock, so the whole read-check-mutate-persist
//! sequence is one critical section. Cross-service calls follow a fixed lock
//! order (reservations before rooms, items before orders) so no cycle exists.

mod billing_service;
mod customer_service;
mod inventory_service;
mod report_service;
mod reservation_service;
mod room_service;

pub use billing_service::BillingService;
pub use customer_service::CustomerService;
pub use inventory_service::InventoryService;
pub use report_service::ReportService;
pub use reservation_service::ReservationService;
pub use room_service::RoomService;
