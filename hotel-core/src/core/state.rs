use std::sync::Arc;

use shared::{HotelResult, Store};
use tracing::info;

use crate::core::Config;
use crate::services::{
    BillingService, CustomerService, InventoryService, ReportService, ReservationService,
    RoomService,
};
use crate::store::JsonFileStore;

/// Server state holding shared references to every service.
///
/// Services are wired in dependency order (rooms first, reports last) and
/// share one [`Store`]. Cloning the state is an `Arc` bump per field, so
/// handlers can take it by value.
///
/// # Example
///
/// ```ignore
/// let state = HotelState::initialize(Config::from_env())?;
/// state.reservations().book("CUST-A1B2C3D4", 101, check_in, check_out, 160000)?;
/// ```
#[derive(Clone)]
pub struct HotelState {
    config: Config,
    store: Arc<dyn Store>,
    rooms: Arc<RoomService>,
    reservations: Arc<ReservationService>,
    inventory: Arc<InventoryService>,
    billing: Arc<BillingService>,
    customers: Arc<CustomerService>,
    reports: Arc<ReportService>,
}

impl HotelState {
    /// Open the JSON file store under `config.data_dir` and load all state.
    pub fn initialize(config: Config) -> HotelResult<Self> {
        let store = Arc::new(JsonFileStore::open(&config.data_dir)?);
        Self::with_store(config, store)
    }

    /// Build the state on top of an existing store. Tests use this with the
    /// in-memory store.
    pub fn with_store(config: Config, store: Arc<dyn Store>) -> HotelResult<Self> {
        let rooms = Arc::new(RoomService::load(store.clone())?);
        let reservations = Arc::new(ReservationService::load(store.clone(), rooms.clone())?);
        let inventory = Arc::new(InventoryService::load(
            store.clone(),
            rooms.clone(),
            reservations.clone(),
        )?);
        let billing = Arc::new(BillingService::load(
            store.clone(),
            reservations.clone(),
            inventory.clone(),
        )?);
        let customers = Arc::new(CustomerService::load(store.clone())?);
        let reports = Arc::new(ReportService::new(
            rooms.clone(),
            reservations.clone(),
            inventory.clone(),
        ));

        if inventory.seed_default_menu()? {
            info!("default menu seeded");
        }
        info!(
            environment = %config.environment,
            data_dir = %config.data_dir,
            "hotel state initialized"
        );

        Ok(Self {
            config,
            store,
            rooms,
            reservations,
            inventory,
            billing,
            customers,
            reports,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    pub fn rooms(&self) -> &Arc<RoomService> {
        &self.rooms
    }

    pub fn reservations(&self) -> &Arc<ReservationService> {
        &self.reservations
    }

    pub fn inventory(&self) -> &Arc<InventoryService> {
        &self.inventory
    }

    pub fn billing(&self) -> &Arc<BillingService> {
        &self.billing
    }

    pub fn customers(&self) -> &Arc<CustomerService> {
        &self.customers
    }

    pub fn reports(&self) -> &Arc<ReportService> {
        &self.reports
    }

    /// Delete a room, refusing while any CONFIRMED or CHECKED_IN reservation
    /// still points at it. Cancelled and completed history does not block.
    /// The guard and the removal run under the reservation ledger lock.
    pub fn delete_room(&self, room_number: u32) -> HotelResult<()> {
        self.reservations.delete_room(room_number)
    }
}
