//! Billing Service
//!
//! Pure aggregation over the reservation ledger and the order log; the only
//! thing it ever writes is the append-only payment record. Recording a
//! payment never triggers checkout or room release; those stay explicit
//! calls on the reservation service.

use crate::services::{InventoryService, ReservationService};
use crate::utils::time::{now_millis, stay_days};
use crate::utils::validation::{
    validate_price, validate_required_text, MAX_SHORT_TEXT_LEN,
};
use parking_lot::RwLock;
use shared::util::prefixed_token;
use shared::{
    load_all, save_all, Bill, EntityKind, HotelError, HotelResult, Payment, Store,
};
use std::sync::Arc;
use tracing::info;

pub struct BillingService {
    store: Arc<dyn Store>,
    reservations: Arc<ReservationService>,
    inventory: Arc<InventoryService>,
    payments: RwLock<Vec<Payment>>,
}

impl BillingService {
    /// Load the payment log from the store.
    pub fn load(
        store: Arc<dyn Store>,
        reservations: Arc<ReservationService>,
        inventory: Arc<InventoryService>,
    ) -> HotelResult<Self> {
        let payments: Vec<Payment> = load_all(store.as_ref(), EntityKind::Payments)?;
        Ok(Self {
            store,
            reservations,
            inventory,
            payments: RwLock::new(payments),
        })
    }

    /// Aggregate the guest's bill for their current stay.
    ///
    /// Requires a CHECKED_IN reservation for `(customer, room)`; sums all
    /// matching food orders. Mutates nothing.
    pub fn calculate_bill(&self, customer_id: &str, room_number: u32) -> HotelResult<Bill> {
        let stay = self
            .reservations
            .active_stay(customer_id, room_number)
            .ok_or_else(|| {
                HotelError::not_found(
                    "active stay",
                    format!("customer {} in room {}", customer_id, room_number),
                )
            })?;

        let orders = self.inventory.orders_for(customer_id, room_number);
        let food_fee: i64 = orders.iter().map(|o| o.total_price).sum();
        let food_items_summary = if orders.is_empty() {
            "no room service orders".to_string()
        } else {
            orders
                .iter()
                .map(|o| format!("{} x{} = {}", o.food_name, o.count, o.total_price))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let days = stay_days(stay.check_in, stay.check_out);
        let room_fee = stay.total_price;

        Ok(Bill {
            reservation_id: stay.reservation_id,
            room_number,
            check_in: stay.check_in,
            check_out: stay.check_out,
            stay_days: days,
            room_fee,
            food_fee,
            total_amount: room_fee + food_fee,
            food_items_summary,
        })
    }

    /// Append an immutable payment record.
    pub fn record_payment(
        &self,
        customer_id: &str,
        room_number: u32,
        reservation_id: Option<String>,
        amount: i64,
        method: &str,
    ) -> HotelResult<Payment> {
        validate_required_text(customer_id, "customer id", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(method, "payment method", MAX_SHORT_TEXT_LEN)?;
        validate_price(amount, "amount")?;

        let mut payments = self.payments.write();
        let payment_id = loop {
            let id = prefixed_token("PAY");
            if !payments.iter().any(|p| p.payment_id == id) {
                break id;
            }
        };

        let payment = Payment {
            payment_id,
            customer_id: customer_id.to_string(),
            room_number,
            reservation_id,
            amount,
            method: method.to_string(),
            timestamp: now_millis(),
        };
        payments.push(payment.clone());
        save_all(self.store.as_ref(), EntityKind::Payments, &payments)?;
        info!(
            payment = %payment.payment_id,
            room = room_number,
            amount,
            "payment recorded"
        );
        Ok(payment)
    }

    pub fn list_payments(&self) -> Vec<Payment> {
        self.payments.read().clone()
    }
}
