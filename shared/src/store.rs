//! Store collaborator contract
//!
//! The persistence collaborator only knows how to load and save a whole
//! collection per entity kind. No partial writes, no append, no queries, no
//! transactional guarantees of its own. Every mutation re-saves the full
//! collection, and atomicity comes from the entity-kind lock held by the
//! calling service.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// The entity kinds the core persists, one collection each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Rooms,
    Reservations,
    FoodItems,
    FoodOrders,
    Customers,
    Payments,
}

impl EntityKind {
    /// Collection file name used by file-backed stores
    pub fn file_name(&self) -> &'static str {
        match self {
            EntityKind::Rooms => "rooms.json",
            EntityKind::Reservations => "reservations.json",
            EntityKind::FoodItems => "food_items.json",
            EntityKind::FoodOrders => "food_orders.json",
            EntityKind::Customers => "customers.json",
            EntityKind::Payments => "payments.json",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntityKind::Rooms => "rooms",
            EntityKind::Reservations => "reservations",
            EntityKind::FoodItems => "food_items",
            EntityKind::FoodOrders => "food_orders",
            EntityKind::Customers => "customers",
            EntityKind::Payments => "payments",
        };
        f.write_str(s)
    }
}

/// Store failures
///
/// A failed save leaves the caller's in-memory state as the source of truth;
/// services surface this error without rolling back (the collection is then
/// tentatively inconsistent with durable storage).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored {kind} collection is corrupt: {message}")]
    Corrupt { kind: EntityKind, message: String },

    #[error("failed to serialize {kind} collection: {message}")]
    Serialization { kind: EntityKind, message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection load/save primitives
///
/// `load_raw` returns `None` when the collection has never been saved, which
/// callers treat as an empty collection.
pub trait Store: Send + Sync {
    fn load_raw(&self, kind: EntityKind) -> StoreResult<Option<Vec<u8>>>;
    fn save_raw(&self, kind: EntityKind, bytes: Vec<u8>) -> StoreResult<()>;
}

/// Load and deserialize a full collection
pub fn load_all<T: DeserializeOwned>(store: &dyn Store, kind: EntityKind) -> StoreResult<Vec<T>> {
    match store.load_raw(kind)? {
        None => Ok(Vec::new()),
        Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            kind,
            message: e.to_string(),
        }),
    }
}

/// Serialize and save a full collection
pub fn save_all<T: Serialize>(store: &dyn Store, kind: EntityKind, items: &[T]) -> StoreResult<()> {
    let bytes = serde_json::to_vec(items).map_err(|e| StoreError::Serialization {
        kind,
        message: e.to_string(),
    })?;
    store.save_raw(kind, bytes)
}
