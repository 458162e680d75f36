//! Room Service
//!
//! Authoritative owner of the room lifecycle state machine. Every transition
//! checks legality against the current status, mutates in memory, and saves
//! the full room collection through the store before returning, all under
//! the room-kind write lock. Concurrent writers see at most one winner.

use crate::utils::validation::{validate_price, validate_required_text, MAX_NAME_LEN};
use parking_lot::RwLock;
use shared::{
    load_all, save_all, EntityKind, HotelError, HotelResult, Room, RoomCreate, RoomStatus,
    RoomUpdate, Store,
};
use std::sync::Arc;
use tracing::info;

pub struct RoomService {
    store: Arc<dyn Store>,
    rooms: RwLock<Vec<Room>>,
}

impl RoomService {
    /// Load the room collection from the store.
    pub fn load(store: Arc<dyn Store>) -> HotelResult<Self> {
        let rooms: Vec<Room> = load_all(store.as_ref(), EntityKind::Rooms)?;
        info!(count = rooms.len(), "room collection loaded");
        Ok(Self {
            store,
            rooms: RwLock::new(rooms),
        })
    }

    fn persist(&self, rooms: &[Room]) -> HotelResult<()> {
        save_all(self.store.as_ref(), EntityKind::Rooms, rooms)?;
        Ok(())
    }

    /// Apply a checked transition: legal only from one of `legal_from`.
    ///
    /// On an illegal source state the room is left untouched and the error
    /// reports both the current and the attempted status.
    fn transition(
        &self,
        room_number: u32,
        attempted: RoomStatus,
        legal_from: &[RoomStatus],
    ) -> HotelResult<()> {
        let mut rooms = self.rooms.write();
        let room = rooms
            .iter_mut()
            .find(|r| r.room_number == room_number)
            .ok_or_else(|| HotelError::not_found("room", room_number))?;

        let current = room.status;
        if !legal_from.contains(&current) {
            return Err(HotelError::InvalidTransition {
                room_number,
                current,
                attempted,
            });
        }

        room.status = attempted;
        self.persist(&rooms)?;
        info!(room = room_number, from = %current, to = %attempted, "room transition");
        Ok(())
    }

    // ── Lifecycle transitions ───────────────────────────────────────

    /// AVAILABLE → RESERVED
    pub fn reserve(&self, room_number: u32) -> HotelResult<()> {
        self.transition(room_number, RoomStatus::Reserved, &[RoomStatus::Available])
    }

    /// RESERVED/AVAILABLE → OCCUPIED (walk-ins check in from AVAILABLE)
    pub fn check_in(&self, room_number: u32) -> HotelResult<()> {
        self.transition(
            room_number,
            RoomStatus::Occupied,
            &[RoomStatus::Reserved, RoomStatus::Available],
        )
    }

    /// OCCUPIED → CLEANING
    pub fn check_out(&self, room_number: u32) -> HotelResult<()> {
        self.transition(room_number, RoomStatus::Cleaning, &[RoomStatus::Occupied])
    }

    /// CLEANING → AVAILABLE
    pub fn finish_cleaning(&self, room_number: u32) -> HotelResult<()> {
        self.transition(room_number, RoomStatus::Available, &[RoomStatus::Cleaning])
    }

    /// Force-release a room back to AVAILABLE regardless of prior state.
    ///
    /// Used to restore availability after a reservation cancellation;
    /// idempotent: an already-available room is left as is.
    pub fn cancel_booking(&self, room_number: u32) -> HotelResult<()> {
        let mut rooms = self.rooms.write();
        let room = rooms
            .iter_mut()
            .find(|r| r.room_number == room_number)
            .ok_or_else(|| HotelError::not_found("room", room_number))?;

        if room.status == RoomStatus::Available {
            return Ok(());
        }

        let previous = room.status;
        room.status = RoomStatus::Available;
        self.persist(&rooms)?;
        info!(room = room_number, from = %previous, "room force-released");
        Ok(())
    }

    // ── Admin CRUD ──────────────────────────────────────────────────

    /// Register a new room; rejects duplicate room numbers.
    pub fn add_room(&self, data: RoomCreate) -> HotelResult<Room> {
        validate_required_text(&data.room_type, "room type", MAX_NAME_LEN)?;
        validate_price(data.base_price, "base price")?;

        let mut rooms = self.rooms.write();
        if rooms.iter().any(|r| r.room_number == data.room_number) {
            return Err(HotelError::DuplicateId(format!(
                "room {}",
                data.room_number
            )));
        }

        let room = Room {
            room_number: data.room_number,
            room_type: data.room_type,
            base_price: data.base_price,
            status: RoomStatus::Available,
        };
        rooms.push(room.clone());
        self.persist(&rooms)?;
        info!(room = room.room_number, "room registered");
        Ok(room)
    }

    /// Update room type and/or base price. Status only mutates through the
    /// lifecycle transitions.
    pub fn update_room(&self, room_number: u32, data: RoomUpdate) -> HotelResult<Room> {
        if let Some(ref t) = data.room_type {
            validate_required_text(t, "room type", MAX_NAME_LEN)?;
        }
        if let Some(p) = data.base_price {
            validate_price(p, "base price")?;
        }

        let mut rooms = self.rooms.write();
        let room = rooms
            .iter_mut()
            .find(|r| r.room_number == room_number)
            .ok_or_else(|| HotelError::not_found("room", room_number))?;

        if let Some(t) = data.room_type {
            room.room_type = t;
        }
        if let Some(p) = data.base_price {
            room.base_price = p;
        }
        let updated = room.clone();
        self.persist(&rooms)?;
        Ok(updated)
    }

    /// Remove a room from the collection.
    ///
    /// Only reachable through `ReservationService::delete_room`, which holds
    /// the ledger lock across the active-reservation check and this call.
    pub(crate) fn delete_room(&self, room_number: u32) -> HotelResult<()> {
        let mut rooms = self.rooms.write();
        let before = rooms.len();
        rooms.retain(|r| r.room_number != room_number);
        if rooms.len() == before {
            return Err(HotelError::not_found("room", room_number));
        }
        self.persist(&rooms)?;
        info!(room = room_number, "room deleted");
        Ok(())
    }

    // ── Read projections ────────────────────────────────────────────

    /// Snapshot of the full room collection.
    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.read().clone()
    }

    pub fn room(&self, room_number: u32) -> HotelResult<Room> {
        self.rooms
            .read()
            .iter()
            .find(|r| r.room_number == room_number)
            .cloned()
            .ok_or_else(|| HotelError::not_found("room", room_number))
    }

    pub fn status_of(&self, room_number: u32) -> HotelResult<RoomStatus> {
        self.room(room_number).map(|r| r.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service_with_room(n: u32) -> RoomService {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let service = RoomService::load(store).unwrap();
        service
            .add_room(RoomCreate {
                room_number: n,
                room_type: "Standard".to_string(),
                base_price: 80000,
            })
            .unwrap();
        service
    }

    #[test]
    fn test_full_lifecycle() {
        let service = service_with_room(101);
        assert_eq!(service.status_of(101).unwrap(), RoomStatus::Available);

        service.reserve(101).unwrap();
        assert_eq!(service.status_of(101).unwrap(), RoomStatus::Reserved);

        service.check_in(101).unwrap();
        assert_eq!(service.status_of(101).unwrap(), RoomStatus::Occupied);

        service.check_out(101).unwrap();
        assert_eq!(service.status_of(101).unwrap(), RoomStatus::Cleaning);

        service.finish_cleaning(101).unwrap();
        assert_eq!(service.status_of(101).unwrap(), RoomStatus::Available);
    }

    #[test]
    fn test_walk_in_check_in_from_available() {
        let service = service_with_room(102);
        service.check_in(102).unwrap();
        assert_eq!(service.status_of(102).unwrap(), RoomStatus::Occupied);
    }

    #[test]
    fn test_illegal_transitions_leave_status_unchanged() {
        let service = service_with_room(103);
        service.check_in(103).unwrap();

        // Occupied room cannot be reserved or checked in again
        let err = service.reserve(103).unwrap_err();
        assert!(matches!(
            err,
            HotelError::InvalidTransition {
                current: RoomStatus::Occupied,
                attempted: RoomStatus::Reserved,
                ..
            }
        ));
        assert!(service.check_in(103).is_err());
        assert_eq!(service.status_of(103).unwrap(), RoomStatus::Occupied);

        // Checkout is only legal from Occupied
        service.check_out(103).unwrap();
        assert!(service.check_out(103).is_err());
        assert_eq!(service.status_of(103).unwrap(), RoomStatus::Cleaning);
    }

    #[test]
    fn test_finish_cleaning_twice_reports_invalid_transition() {
        let service = service_with_room(104);
        service.check_in(104).unwrap();
        service.check_out(104).unwrap();
        service.finish_cleaning(104).unwrap();

        let err = service.finish_cleaning(104).unwrap_err();
        assert!(matches!(err, HotelError::InvalidTransition { .. }));
        assert_eq!(service.status_of(104).unwrap(), RoomStatus::Available);
    }

    #[test]
    fn test_cancel_booking_is_idempotent() {
        let service = service_with_room(105);
        service.reserve(105).unwrap();

        service.cancel_booking(105).unwrap();
        assert_eq!(service.status_of(105).unwrap(), RoomStatus::Available);
        service.cancel_booking(105).unwrap();
        assert_eq!(service.status_of(105).unwrap(), RoomStatus::Available);
    }

    #[test]
    fn test_unknown_room_is_not_found() {
        let service = service_with_room(106);
        assert!(matches!(
            service.reserve(999),
            Err(HotelError::NotFound { .. })
        ));
        assert!(matches!(
            service.cancel_booking(999),
            Err(HotelError::NotFound { .. })
        ));
    }

    #[test]
    fn test_add_room_rejects_duplicates_and_bad_price() {
        let service = service_with_room(107);
        let dup = service.add_room(RoomCreate {
            room_number: 107,
            room_type: "Deluxe".to_string(),
            base_price: 120000,
        });
        assert!(matches!(dup, Err(HotelError::DuplicateId(_))));

        let bad = service.add_room(RoomCreate {
            room_number: 108,
            room_type: "Deluxe".to_string(),
            base_price: 0,
        });
        assert!(matches!(bad, Err(HotelError::Validation(_))));
    }

    #[test]
    fn test_update_room_keeps_status() {
        let service = service_with_room(109);
        service.reserve(109).unwrap();

        let updated = service
            .update_room(
                109,
                RoomUpdate {
                    room_type: Some("Suite".to_string()),
                    base_price: Some(200000),
                },
            )
            .unwrap();
        assert_eq!(updated.room_type, "Suite");
        assert_eq!(updated.base_price, 200000);
        assert_eq!(updated.status, RoomStatus::Reserved);
    }

    #[test]
    fn test_collection_survives_reload() {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        {
            let service = RoomService::load(store.clone()).unwrap();
            service
                .add_room(RoomCreate {
                    room_number: 201,
                    room_type: "Standard".to_string(),
                    base_price: 80000,
                })
                .unwrap();
            service.reserve(201).unwrap();
        }
        let reloaded = RoomService::load(store).unwrap();
        assert_eq!(reloaded.status_of(201).unwrap(), RoomStatus::Reserved);
    }
}
