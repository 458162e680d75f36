//! Reservation Service
//!
//! The booking ledger. Creation, check-in/out and cancellation keep
//! reservation status and room status jointly consistent: a room is OCCUPIED
//! iff a CHECKED_IN reservation exists for it, RESERVED implies a CONFIRMED
//! one. Cancelled records are retained for audit and billing history.
//!
//! Lock order: the reservation write lock is taken first, room transitions
//! are invoked while it is held. Nothing in the room service takes the
//! reservation lock, so the order is acyclic.

use crate::services::RoomService;
use crate::utils::time::now_millis;
use crate::utils::validation::{validate_price, validate_required_text, MAX_SHORT_TEXT_LEN};
use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::util::prefixed_token;
use shared::{
    load_all, save_all, EntityKind, HotelError, HotelResult, Reservation, ReservationStatus, Store,
};
use std::sync::Arc;
use tracing::info;

pub struct ReservationService {
    store: Arc<dyn Store>,
    rooms: Arc<RoomService>,
    reservations: RwLock<Vec<Reservation>>,
}

/// Most recent entry for the room still holding it (CONFIRMED or CHECKED_IN).
/// Stale CANCELLED/COMPLETED records are ignored.
fn latest_active_for_room(list: &[Reservation], room_number: u32) -> Option<&Reservation> {
    list.iter()
        .rev()
        .find(|r| r.room_number == room_number && r.is_active())
}

impl ReservationService {
    /// Load the reservation ledger from the store.
    pub fn load(store: Arc<dyn Store>, rooms: Arc<RoomService>) -> HotelResult<Self> {
        let reservations: Vec<Reservation> = load_all(store.as_ref(), EntityKind::Reservations)?;
        info!(count = reservations.len(), "reservation ledger loaded");
        Ok(Self {
            store,
            rooms,
            reservations: RwLock::new(reservations),
        })
    }

    fn persist(&self, reservations: &[Reservation]) -> HotelResult<()> {
        save_all(self.store.as_ref(), EntityKind::Reservations, reservations)?;
        Ok(())
    }

    /// Generate a `RES-XXXXXXXX` id not present in the ledger.
    fn unique_reservation_id(reservations: &[Reservation]) -> String {
        loop {
            let id = prefixed_token("RES");
            if !reservations.iter().any(|r| r.reservation_id == id) {
                return id;
            }
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Book a room: creates a CONFIRMED reservation and moves the room to
    /// RESERVED, all-or-nothing. A failed room transition (room absent, or
    /// not AVAILABLE) leaves no reservation behind.
    pub fn book(
        &self,
        customer_id: &str,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_price: i64,
    ) -> HotelResult<Reservation> {
        validate_required_text(customer_id, "customer id", MAX_SHORT_TEXT_LEN)?;
        validate_price(total_price, "total price")?;
        if check_out < check_in {
            return Err(HotelError::validation(format!(
                "check-out {} precedes check-in {}",
                check_out, check_in
            )));
        }

        let mut reservations = self.reservations.write();

        // Referenced room must exist at creation time; the reserve call
        // below then settles the AVAILABLE -> RESERVED race, admitting at
        // most one winner.
        self.rooms.room(room_number)?;

        let reservation = Reservation {
            reservation_id: Self::unique_reservation_id(&reservations),
            customer_id: customer_id.to_string(),
            room_number,
            check_in,
            check_out,
            total_price,
            status: ReservationStatus::Confirmed,
            created_at: now_millis(),
        };

        self.rooms.reserve(room_number)?;

        reservations.push(reservation.clone());
        self.persist(&reservations)?;
        info!(
            reservation = %reservation.reservation_id,
            room = room_number,
            customer = customer_id,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Cancel a reservation, restore room availability, and return the freed
    /// room number so the caller can notify dependent systems.
    pub fn cancel(&self, reservation_id: &str) -> HotelResult<u32> {
        let mut reservations = self.reservations.write();
        let reservation = reservations
            .iter_mut()
            .find(|r| r.reservation_id == reservation_id)
            .ok_or_else(|| HotelError::not_found("reservation", reservation_id))?;

        if reservation.status == ReservationStatus::Cancelled {
            return Err(HotelError::AlreadyCancelled(reservation_id.to_string()));
        }

        reservation.status = ReservationStatus::Cancelled;
        let room_number = reservation.room_number;
        self.persist(&reservations)?;

        self.rooms.cancel_booking(room_number)?;
        info!(reservation = reservation_id, room = room_number, "reservation cancelled");
        Ok(room_number)
    }

    /// Check a guest in against their CONFIRMED reservation for the room.
    pub fn check_in(&self, customer_id: &str, room_number: u32) -> HotelResult<Reservation> {
        let mut reservations = self.reservations.write();
        let idx = reservations
            .iter()
            .rposition(|r| {
                r.customer_id == customer_id
                    && r.room_number == room_number
                    && r.status == ReservationStatus::Confirmed
            })
            .ok_or_else(|| {
                HotelError::unauthorized(format!(
                    "no confirmed reservation for room {} under customer {}",
                    room_number, customer_id
                ))
            })?;

        self.rooms.check_in(room_number)?;

        reservations[idx].status = ReservationStatus::CheckedIn;
        let checked_in = reservations[idx].clone();
        self.persist(&reservations)?;
        info!(
            reservation = %checked_in.reservation_id,
            room = room_number,
            "guest checked in"
        );
        Ok(checked_in)
    }

    /// Complete the active stay for a room and move the room to CLEANING.
    pub fn check_out(&self, room_number: u32) -> HotelResult<Reservation> {
        let mut reservations = self.reservations.write();
        let idx = reservations
            .iter()
            .rposition(|r| {
                r.room_number == room_number && r.status == ReservationStatus::CheckedIn
            })
            .ok_or_else(|| HotelError::not_found("active stay for room", room_number))?;

        self.rooms.check_out(room_number)?;

        reservations[idx].status = ReservationStatus::Completed;
        let completed = reservations[idx].clone();
        self.persist(&reservations)?;
        info!(
            reservation = %completed.reservation_id,
            room = room_number,
            "guest checked out"
        );
        Ok(completed)
    }

    // ── Read projections ────────────────────────────────────────────

    pub fn list_all(&self) -> Vec<Reservation> {
        self.reservations.read().clone()
    }

    pub fn list_by_customer(&self, customer_id: &str) -> Vec<Reservation> {
        self.reservations
            .read()
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// The guest's current CHECKED_IN stay for the room, if any.
    pub fn active_stay(&self, customer_id: &str, room_number: u32) -> Option<Reservation> {
        self.reservations
            .read()
            .iter()
            .rev()
            .find(|r| {
                r.customer_id == customer_id
                    && r.room_number == room_number
                    && r.status == ReservationStatus::CheckedIn
            })
            .cloned()
    }

    /// Remove a room, refusing while a CONFIRMED or CHECKED_IN reservation
    /// still references it.
    ///
    /// The ledger write lock is held across the removal, so a concurrent
    /// `book` cannot commit between the check and the delete (same lock
    /// order as `book`: reservations, then rooms).
    pub fn delete_room(&self, room_number: u32) -> HotelResult<()> {
        let reservations = self.reservations.write();
        if latest_active_for_room(&reservations, room_number).is_some() {
            return Err(HotelError::validation(format!(
                "room {} still referenced by an active reservation",
                room_number
            )));
        }
        self.rooms.delete_room(room_number)
    }
}
