//! In-memory store
//!
//! Used by tests and embedding scenarios that do not need durability. The
//! map lock only guards the collection table itself; serialization ordering
//! comes from the entity-kind locks held by the services.

use parking_lot::RwLock;
use shared::{EntityKind, Store, StoreResult};
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<EntityKind, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_raw(&self, kind: EntityKind) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.collections.read().get(&kind).cloned())
    }

    fn save_raw(&self, kind: EntityKind, bytes: Vec<u8>) -> StoreResult<()> {
        self.collections.write().insert(kind, bytes);
        Ok(())
    }
}
