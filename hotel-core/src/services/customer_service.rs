//! Customer Service
//!
//! Front-desk customer registry. The phone number acts as a soft unique key:
//! registration and updates reject a number already held by another customer.

use crate::utils::validation::{
    validate_required_text, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};
use parking_lot::RwLock;
use shared::util::prefixed_token;
use shared::{
    load_all, save_all, Customer, CustomerCreate, CustomerUpdate, EntityKind, HotelError,
    HotelResult, Store,
};
use std::sync::Arc;
use tracing::info;

pub struct CustomerService {
    store: Arc<dyn Store>,
    customers: RwLock<Vec<Customer>>,
}

fn phone_taken(customers: &[Customer], phone: &str, exclude_id: Option<&str>) -> bool {
    customers
        .iter()
        .filter(|c| Some(c.customer_id.as_str()) != exclude_id)
        .any(|c| c.phone_number == phone)
}

impl CustomerService {
    pub fn load(store: Arc<dyn Store>) -> HotelResult<Self> {
        let customers: Vec<Customer> = load_all(store.as_ref(), EntityKind::Customers)?;
        Ok(Self {
            store,
            customers: RwLock::new(customers),
        })
    }

    fn persist(&self, customers: &[Customer]) -> HotelResult<()> {
        save_all(self.store.as_ref(), EntityKind::Customers, customers)?;
        Ok(())
    }

    /// Register a customer with a server-generated `CUST-` id.
    pub fn register(&self, data: CustomerCreate) -> HotelResult<Customer> {
        validate_required_text(&data.name, "customer name", MAX_NAME_LEN)?;
        validate_required_text(&data.phone_number, "phone number", MAX_SHORT_TEXT_LEN)?;

        let mut customers = self.customers.write();
        if phone_taken(&customers, &data.phone_number, None) {
            return Err(HotelError::DuplicateId(format!(
                "phone number {}",
                data.phone_number
            )));
        }

        let customer_id = loop {
            let id = prefixed_token("CUST");
            if !customers.iter().any(|c| c.customer_id == id) {
                break id;
            }
        };
        let customer = Customer {
            customer_id,
            name: data.name,
            phone_number: data.phone_number,
        };
        customers.push(customer.clone());
        self.persist(&customers)?;
        info!(customer = %customer.customer_id, "customer registered");
        Ok(customer)
    }

    /// Update name and/or phone number; the duplicate-phone check excludes
    /// the customer being updated.
    pub fn update(&self, customer_id: &str, data: CustomerUpdate) -> HotelResult<Customer> {
        if let Some(ref n) = data.name {
            validate_required_text(n, "customer name", MAX_NAME_LEN)?;
        }
        if let Some(ref p) = data.phone_number {
            validate_required_text(p, "phone number", MAX_SHORT_TEXT_LEN)?;
        }

        let mut customers = self.customers.write();
        if let Some(ref p) = data.phone_number {
            if phone_taken(&customers, p, Some(customer_id)) {
                return Err(HotelError::DuplicateId(format!("phone number {}", p)));
            }
        }

        let customer = customers
            .iter_mut()
            .find(|c| c.customer_id == customer_id)
            .ok_or_else(|| HotelError::not_found("customer", customer_id))?;

        if let Some(n) = data.name {
            customer.name = n;
        }
        if let Some(p) = data.phone_number {
            customer.phone_number = p;
        }
        let updated = customer.clone();
        self.persist(&customers)?;
        Ok(updated)
    }

    pub fn delete(&self, customer_id: &str) -> HotelResult<()> {
        let mut customers = self.customers.write();
        let before = customers.len();
        customers.retain(|c| c.customer_id != customer_id);
        if customers.len() == before {
            return Err(HotelError::not_found("customer", customer_id));
        }
        self.persist(&customers)?;
        info!(customer = customer_id, "customer deleted");
        Ok(())
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.read().clone()
    }

    pub fn find(&self, customer_id: &str) -> HotelResult<Customer> {
        self.customers
            .read()
            .iter()
            .find(|c| c.customer_id == customer_id)
            .cloned()
            .ok_or_else(|| HotelError::not_found("customer", customer_id))
    }

    pub fn find_by_phone(&self, phone_number: &str) -> Option<Customer> {
        self.customers
            .read()
            .iter()
            .find(|c| c.phone_number == phone_number)
            .cloned()
    }
}
