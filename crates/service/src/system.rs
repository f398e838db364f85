use std::sync::Arc;

use configs::StoreConfig;
use models::{Customer, Hotel, IdGenerator, Reservation};

use crate::errors::ServiceError;
use crate::managers::{CustomerManager, HotelManager, ReservationManager};
use crate::storage::{CollectionStore, JsonMapStore, MemoryMapStore};

/// The three managers wired over one set of stores.
///
/// The hotel store is shared between the hotel and reservation managers.
#[derive(Clone)]
pub struct HotelSystem {
    pub hotels: HotelManager,
    pub customers: CustomerManager,
    pub reservations: ReservationManager,
}

impl HotelSystem {
    pub fn new(
        hotels: Arc<dyn CollectionStore<Hotel>>,
        customers: Arc<dyn CollectionStore<Customer>>,
        reservations: Arc<dyn CollectionStore<Reservation>>,
    ) -> Self {
        Self {
            hotels: HotelManager::new(Arc::clone(&hotels)),
            customers: CustomerManager::new(customers),
            reservations: ReservationManager::new(reservations, hotels),
        }
    }

    /// JSON file stores at the configured locations.
    pub fn from_config(cfg: &StoreConfig) -> Result<Self, ServiceError> {
        cfg.validate().map_err(|e| ServiceError::Validation(e.to_string()))?;
        Ok(Self::new(
            Arc::new(JsonMapStore::<Hotel>::new("hotels", &cfg.hotels_path)),
            Arc::new(JsonMapStore::<Customer>::new("customers", &cfg.customers_path)),
            Arc::new(JsonMapStore::<Reservation>::new("reservations", &cfg.reservations_path)),
        ))
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryMapStore::<Hotel>::new("hotels")),
            Arc::new(MemoryMapStore::<Customer>::new("customers")),
            Arc::new(MemoryMapStore::<Reservation>::new("reservations")),
        )
    }

    pub fn with_ids(self, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            hotels: self.hotels.with_ids(Arc::clone(&ids)),
            customers: self.customers.with_ids(Arc::clone(&ids)),
            reservations: self.reservations.with_ids(ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Sequential(AtomicUsize);

    impl IdGenerator for Sequential {
        fn next_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn injected_ids_are_shared_across_managers() -> Result<(), anyhow::Error> {
        let sys = HotelSystem::in_memory().with_ids(Arc::new(Sequential(AtomicUsize::new(0))));
        let h = sys.hotels.create("Inn", "Rome", 1)?;
        let c = sys.customers.create("Ann", "ann@x.com")?;
        let r = sys.reservations.create(&c.id, &h.id)?.unwrap();
        assert_eq!((h.id.as_str(), c.id.as_str(), r.id.as_str()), ("id-0", "id-1", "id-2"));
        Ok(())
    }

    #[test]
    fn hotel_store_is_shared() -> Result<(), anyhow::Error> {
        let sys = HotelSystem::in_memory();
        let h = sys.hotels.create("Inn", "Rome", 2)?;
        sys.reservations.create("c1", &h.id)?;
        assert_eq!(sys.hotels.get(&h.id).map(|h| h.available_rooms), Some(1));
        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = StoreConfig::default();
        cfg.reservations_path = cfg.hotels_path.clone();
        assert!(matches!(HotelSystem::from_config(&cfg), Err(ServiceError::Validation(_))));
    }
}
