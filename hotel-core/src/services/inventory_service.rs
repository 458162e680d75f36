//! Inventory Service
//!
//! Food item stock and the room-service order path. Ordering is the one
//! check-then-act sequence that must be strictly serialized: the stock check,
//! the decrement, the item persist and the order append all run under the
//! item-kind write lock, so two concurrent orders can never both pass the
//! check and jointly oversell.

use crate::services::{ReservationService, RoomService};
use crate::utils::time::now_millis;
use crate::utils::validation::{
    validate_count, validate_optional_text, validate_price, validate_required_text, MAX_NAME_LEN,
    MAX_NOTE_LEN,
};
use parking_lot::RwLock;
use shared::{
    load_all, save_all, EntityKind, FoodItem, FoodItemCreate, FoodItemUpdate, FoodOrder,
    HotelError, HotelResult, RoomStatus, Store,
};
use std::sync::Arc;
use tracing::info;

pub struct InventoryService {
    store: Arc<dyn Store>,
    rooms: Arc<RoomService>,
    reservations: Arc<ReservationService>,
    items: RwLock<Vec<FoodItem>>,
    orders: RwLock<Vec<FoodOrder>>,
}

impl InventoryService {
    /// Load the item and order collections from the store.
    pub fn load(
        store: Arc<dyn Store>,
        rooms: Arc<RoomService>,
        reservations: Arc<ReservationService>,
    ) -> HotelResult<Self> {
        let items: Vec<FoodItem> = load_all(store.as_ref(), EntityKind::FoodItems)?;
        let orders: Vec<FoodOrder> = load_all(store.as_ref(), EntityKind::FoodOrders)?;
        info!(
            items = items.len(),
            orders = orders.len(),
            "inventory loaded"
        );
        Ok(Self {
            store,
            rooms,
            reservations,
            items: RwLock::new(items),
            orders: RwLock::new(orders),
        })
    }

    fn persist_items(&self, items: &[FoodItem]) -> HotelResult<()> {
        save_all(self.store.as_ref(), EntityKind::FoodItems, items)?;
        Ok(())
    }

    fn persist_orders(&self, orders: &[FoodOrder]) -> HotelResult<()> {
        save_all(self.store.as_ref(), EntityKind::FoodOrders, orders)?;
        Ok(())
    }

    /// Seed the starter menu when the store holds no items yet.
    pub fn seed_default_menu(&self) -> HotelResult<bool> {
        let mut items = self.items.write();
        if !items.is_empty() {
            return Ok(false);
        }
        let menu = [
            ("Fried Chicken", 20000, "Crispy whole fried chicken", 10),
            ("Pizza", 25000, "Loaded with cheese", 10),
            ("Cola", 2000, "500ml bottle", 50),
            ("Draft Beer", 5000, "500cc glass", 30),
        ];
        for (name, price, description, stock) in menu {
            items.push(FoodItem {
                name: name.to_string(),
                price,
                description: description.to_string(),
                stock,
            });
        }
        self.persist_items(&items)?;
        info!(count = items.len(), "default menu seeded");
        Ok(true)
    }

    // ── Order fulfillment ───────────────────────────────────────────

    /// Place a room-service order.
    ///
    /// The guest must currently occupy the room (room OCCUPIED plus a
    /// CHECKED_IN stay under their id). The stock check and decrement run
    /// as one critical section; stock never goes negative.
    pub fn order(
        &self,
        customer_id: &str,
        room_number: u32,
        food_name: &str,
        count: u32,
    ) -> HotelResult<FoodOrder> {
        validate_count(count, "count")?;

        // Authorization reads take their own short-lived locks and are
        // released before the items lock below.
        if self.rooms.status_of(room_number)? != RoomStatus::Occupied {
            return Err(HotelError::unauthorized(format!(
                "room {} is not occupied",
                room_number
            )));
        }
        if self.reservations.active_stay(customer_id, room_number).is_none() {
            return Err(HotelError::unauthorized(format!(
                "customer {} has no active stay in room {}",
                customer_id, room_number
            )));
        }

        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|i| i.name == food_name)
            .ok_or_else(|| HotelError::not_found("food item", food_name))?;

        if item.stock < count {
            return Err(HotelError::InsufficientStock {
                item: food_name.to_string(),
                requested: count,
                available: item.stock,
            });
        }

        item.stock -= count;
        let order = FoodOrder {
            customer_id: customer_id.to_string(),
            room_number,
            food_name: food_name.to_string(),
            count,
            total_price: item.price * count as i64,
            timestamp: now_millis(),
        };
        self.persist_items(&items)?;

        let mut orders = self.orders.write();
        orders.push(order.clone());
        self.persist_orders(&orders)?;
        info!(
            room = room_number,
            item = food_name,
            count,
            total = order.total_price,
            "room service order recorded"
        );
        Ok(order)
    }

    // ── Admin CRUD ──────────────────────────────────────────────────

    pub fn add_item(&self, data: FoodItemCreate) -> HotelResult<FoodItem> {
        validate_required_text(&data.name, "item name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_price(data.price, "price")?;

        let mut items = self.items.write();
        if items.iter().any(|i| i.name == data.name) {
            return Err(HotelError::DuplicateId(format!("food item {}", data.name)));
        }

        let item = FoodItem {
            name: data.name,
            price: data.price,
            description: data.description.unwrap_or_default(),
            stock: data.stock,
        };
        items.push(item.clone());
        self.persist_items(&items)?;
        info!(item = %item.name, "food item added");
        Ok(item)
    }

    pub fn update_item(&self, name: &str, data: FoodItemUpdate) -> HotelResult<FoodItem> {
        if let Some(p) = data.price {
            validate_price(p, "price")?;
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;

        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| HotelError::not_found("food item", name))?;

        if let Some(p) = data.price {
            item.price = p;
        }
        if let Some(d) = data.description {
            item.description = d;
        }
        if let Some(s) = data.stock {
            item.stock = s;
        }
        let updated = item.clone();
        self.persist_items(&items)?;
        Ok(updated)
    }

    pub fn delete_item(&self, name: &str) -> HotelResult<()> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| i.name != name);
        if items.len() == before {
            return Err(HotelError::not_found("food item", name));
        }
        self.persist_items(&items)?;
        info!(item = name, "food item deleted");
        Ok(())
    }

    // ── Read projections ────────────────────────────────────────────

    pub fn list_items(&self) -> Vec<FoodItem> {
        self.items.read().clone()
    }

    pub fn item(&self, name: &str) -> HotelResult<FoodItem> {
        self.items
            .read()
            .iter()
            .find(|i| i.name == name)
            .cloned()
            .ok_or_else(|| HotelError::not_found("food item", name))
    }

    pub fn list_orders(&self) -> Vec<FoodOrder> {
        self.orders.read().clone()
    }

    /// All orders placed by the guest for the room, in append order.
    pub fn orders_for(&self, customer_id: &str, room_number: u32) -> Vec<FoodOrder> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.customer_id == customer_id && o.room_number == room_number)
            .cloned()
            .collect()
    }

    /// Total food-and-beverage revenue across the full order log.
    pub fn total_fnb_revenue(&self) -> i64 {
        self.orders.read().iter().map(|o| o.total_price).sum()
    }
}
