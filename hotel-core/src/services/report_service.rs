//! Report Service
//!
//! Management reporting over consistent snapshots: occupancy and reservation
//! rates from the current room collection, room revenue from non-cancelled
//! reservations whose check-in falls inside the requested window, and F&B
//! revenue from the full order log (orders carry no stay window).

use crate::services::{InventoryService, ReservationService, RoomService};
use chrono::NaiveDate;
use shared::{HotelError, HotelResult, OccupancyReport, ReservationStatus, RoomStatus};
use std::sync::Arc;

pub struct ReportService {
    rooms: Arc<RoomService>,
    reservations: Arc<ReservationService>,
    inventory: Arc<InventoryService>,
}

impl ReportService {
    pub fn new(
        rooms: Arc<RoomService>,
        reservations: Arc<ReservationService>,
        inventory: Arc<InventoryService>,
    ) -> Self {
        Self {
            rooms,
            reservations,
            inventory,
        }
    }

    /// Build the occupancy/revenue report for an inclusive date window.
    pub fn occupancy_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HotelResult<OccupancyReport> {
        if end < start {
            return Err(HotelError::validation(format!(
                "report window end {} precedes start {}",
                end, start
            )));
        }

        let rooms = self.rooms.list_rooms();
        let total_rooms = rooms.len();
        let occupied = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Occupied)
            .count();
        let reserved = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Reserved)
            .count();

        let (occupancy_rate, reservation_rate) = if total_rooms == 0 {
            (0.0, 0.0)
        } else {
            (
                occupied as f64 / total_rooms as f64 * 100.0,
                (occupied + reserved) as f64 / total_rooms as f64 * 100.0,
            )
        };

        let room_revenue: i64 = self
            .reservations
            .list_all()
            .iter()
            .filter(|r| r.status != ReservationStatus::Cancelled)
            .filter(|r| r.check_in >= start && r.check_in <= end)
            .map(|r| r.total_price)
            .sum();

        let fnb_revenue = self.inventory.total_fnb_revenue();

        Ok(OccupancyReport {
            start,
            end,
            total_rooms,
            occupied,
            reserved,
            occupancy_rate,
            reservation_rate,
            room_revenue,
            fnb_revenue,
            total_revenue: room_revenue + fnb_revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::{RoomCreate, Store};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn setup() -> (Arc<RoomService>, Arc<ReservationService>, ReportService) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let rooms = Arc::new(RoomService::load(store.clone()).unwrap());
        for n in [101, 102, 103, 104] {
            rooms
                .add_room(RoomCreate {
                    room_number: n,
                    room_type: "Standard".to_string(),
                    base_price: 80000,
                })
                .unwrap();
        }
        let reservations =
            Arc::new(ReservationService::load(store.clone(), rooms.clone()).unwrap());
        let inventory = Arc::new(
            InventoryService::load(store, rooms.clone(), reservations.clone()).unwrap(),
        );
        let reports = ReportService::new(rooms.clone(), reservations.clone(), inventory);
        (rooms, reservations, reports)
    }

    #[test]
    fn test_rates_over_current_room_state() {
        let (_rooms, reservations, reports) = setup();

        // 101 occupied, 102 reserved, 103/104 available
        reservations
            .book("C1", 101, date("2024-01-10"), date("2024-01-12"), 160000)
            .unwrap();
        reservations.check_in("C1", 101).unwrap();
        reservations
            .book("C2", 102, date("2024-01-11"), date("2024-01-13"), 160000)
            .unwrap();

        let report = reports
            .occupancy_report(date("2024-01-01"), date("2024-01-31"))
            .unwrap();
        assert_eq!(report.total_rooms, 4);
        assert_eq!(report.occupied, 1);
        assert_eq!(report.reserved, 1);
        assert!((report.occupancy_rate - 25.0).abs() < f64::EPSILON);
        assert!((report.reservation_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_revenue_window_excludes_cancelled_and_out_of_range() {
        let (_rooms, reservations, reports) = setup();

        reservations
            .book("C1", 101, date("2024-01-10"), date("2024-01-12"), 160000)
            .unwrap();
        let cancelled = reservations
            .book("C2", 102, date("2024-01-11"), date("2024-01-13"), 200000)
            .unwrap();
        reservations.cancel(&cancelled.reservation_id).unwrap();
        reservations
            .book("C3", 103, date("2024-02-01"), date("2024-02-03"), 300000)
            .unwrap();

        let report = reports
            .occupancy_report(date("2024-01-01"), date("2024-01-31"))
            .unwrap();
        assert_eq!(report.room_revenue, 160000);
        assert_eq!(report.total_revenue, 160000);
    }

    #[test]
    fn test_empty_hotel_has_zero_rates() {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let rooms = Arc::new(RoomService::load(store.clone()).unwrap());
        let reservations =
            Arc::new(ReservationService::load(store.clone(), rooms.clone()).unwrap());
        let inventory = Arc::new(
            InventoryService::load(store, rooms.clone(), reservations.clone()).unwrap(),
        );
        let reports = ReportService::new(rooms, reservations, inventory);

        let report = reports
            .occupancy_report(date("2024-01-01"), date("2024-01-31"))
            .unwrap();
        assert_eq!(report.total_rooms, 0);
        assert_eq!(report.occupancy_rate, 0.0);
    }

    #[test]
    fn test_reversed_window_rejected() {
        let (_, _, reports) = setup();
        assert!(matches!(
            reports.occupancy_report(date("2024-01-31"), date("2024-01-01")),
            Err(HotelError::Validation(_))
        ));
    }
}
