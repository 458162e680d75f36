//! Concurrency stress tests.
//!
//! Hammers the serialized order path and the booking race from many blocking
//! workers and checks the invariants that matter: stock never oversells and
//! a room admits exactly one booking.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use hotel_core::{Config, HotelState, MemoryStore};
use rand::Rng;
use shared::{FoodItemCreate, HotelError, RoomCreate, Store};

const WORKERS: usize = 64;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn memory_state() -> HotelState {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    HotelState::with_store(Config::with_overrides("unused"), store).unwrap()
}

/// Room 101 occupied by C1 so orders are authorized.
fn occupied_state() -> HotelState {
    let state = memory_state();
    state
        .rooms()
        .add_room(RoomCreate {
            room_number: 101,
            room_type: "Standard".to_string(),
            base_price: 80000,
        })
        .unwrap();
    state
        .reservations()
        .book("C1", 101, date("2024-01-10"), date("2024-01-12"), 160000)
        .unwrap();
    state.reservations().check_in("C1", 101).unwrap();
    state
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_never_oversell() {
    let state = occupied_state();
    let stock = 40u32;
    state
        .inventory()
        .add_item(FoodItemCreate {
            name: "Club Sandwich".to_string(),
            price: 12000,
            description: None,
            stock,
        })
        .unwrap();

    let fulfilled = Arc::new(AtomicUsize::new(0));
    let rejected = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::with_capacity(WORKERS);
    for _ in 0..WORKERS {
        let state = state.clone();
        let fulfilled = fulfilled.clone();
        let rejected = rejected.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let count = rand::thread_rng().gen_range(1..=3);
            match state.inventory().order("C1", 101, "Club Sandwich", count) {
                Ok(order) => {
                    fulfilled.fetch_add(order.count as usize, Ordering::SeqCst);
                }
                Err(HotelError::InsufficientStock { .. }) => {
                    rejected.fetch_add(1, Ordering::SeqCst);
                }
                Err(other) => panic!("unexpected order failure: {other}"),
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let sold = fulfilled.load(Ordering::SeqCst) as u32;
    let remaining = state.inventory().item("Club Sandwich").unwrap().stock;

    // Units sold and units left always reconcile against the opening stock.
    assert!(sold <= stock, "oversold: {} of {}", sold, stock);
    assert_eq!(remaining, stock - sold);

    // The order log agrees with the counters.
    let logged: u32 = state
        .inventory()
        .list_orders()
        .iter()
        .filter(|o| o.food_name == "Club Sandwich")
        .map(|o| o.count)
        .sum();
    assert_eq!(logged, sold);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_orders_on_scarce_stock_admit_one_winner() {
    let state = occupied_state();
    state
        .inventory()
        .add_item(FoodItemCreate {
            name: "Lobster".to_string(),
            price: 90000,
            description: None,
            stock: 4,
        })
        .unwrap();

    // Two 3-unit orders against stock 4: exactly one can fit.
    let mut handles = Vec::new();
    for _ in 0..2 {
        let state = state.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            state.inventory().order("C1", 101, "Lobster", 3).is_ok()
        }));
    }
    let mut wins = 0;
    for handle in handles {
        if handle.await.unwrap() {
            wins += 1;
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(state.inventory().item("Lobster").unwrap().stock, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_admit_one_winner() {
    let state = memory_state();
    state
        .rooms()
        .add_room(RoomCreate {
            room_number: 301,
            room_type: "Suite".to_string(),
            base_price: 150000,
        })
        .unwrap();

    let wins = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::with_capacity(WORKERS);
    for i in 0..WORKERS {
        let state = state.clone();
        let wins = wins.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let customer = format!("C{}", i);
            match state
                .reservations()
                .book(&customer, 301, date("2024-05-01"), date("2024-05-03"), 300000)
            {
                Ok(_) => {
                    wins.fetch_add(1, Ordering::SeqCst);
                }
                Err(HotelError::InvalidTransition { .. }) => {}
                Err(other) => panic!("unexpected booking failure: {other}"),
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(wins.load(Ordering::SeqCst), 1);

    // Exactly one CONFIRMED record in the ledger, room RESERVED.
    let confirmed = state
        .reservations()
        .list_all()
        .iter()
        .filter(|r| r.is_active())
        .count();
    assert_eq!(confirmed, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_book_and_delete_never_orphan_a_reservation() {
    let state = memory_state();
    let rooms: Vec<u32> = (400..400 + WORKERS as u32).collect();
    for &n in &rooms {
        state
            .rooms()
            .add_room(RoomCreate {
                room_number: n,
                room_type: "Standard".to_string(),
                base_price: 80000,
            })
            .unwrap();
    }

    // One booker and one deleter race on every room. Either may lose: the
    // booker with NotFound once the room is gone, the deleter with a
    // validation refusal once the booking landed.
    let mut handles = Vec::with_capacity(rooms.len() * 2);
    for &n in &rooms {
        let booker = state.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            match booker.reservations().book(
                &format!("C{}", n),
                n,
                date("2024-06-01"),
                date("2024-06-03"),
                160000,
            ) {
                Ok(_) | Err(HotelError::NotFound { .. }) => {}
                Err(other) => panic!("unexpected booking failure: {other}"),
            }
        }));
        let deleter = state.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            match deleter.delete_room(n) {
                Ok(()) | Err(HotelError::Validation(_)) => {}
                Err(other) => panic!("unexpected deletion failure: {other}"),
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every surviving active reservation must still reference a live room.
    for reservation in state.reservations().list_all() {
        if reservation.is_active() {
            assert!(
                state.rooms().room(reservation.room_number).is_ok(),
                "active reservation {} references deleted room {}",
                reservation.reservation_id,
                reservation.room_number
            );
        }
    }
}
