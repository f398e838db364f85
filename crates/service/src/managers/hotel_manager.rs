use std::sync::Arc;

use configs::StoreConfig;
use models::{Hotel, IdGenerator, UuidV4Ids};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{remove_and_save, Collection, CollectionStore, JsonMapStore};

/// Create, delete and list hotels.
#[derive(Clone)]
pub struct HotelManager {
    store: Arc<dyn CollectionStore<Hotel>>,
    ids: Arc<dyn IdGenerator>,
}

impl HotelManager {
    pub fn new(store: Arc<dyn CollectionStore<Hotel>>) -> Self {
        Self { store, ids: Arc::new(UuidV4Ids) }
    }

    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self::new(Arc::new(JsonMapStore::<Hotel>::new("hotels", &cfg.hotels_path)))
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Create a hotel with all `rooms` available and persist it.
    /// `rooms` is stored as given, including zero or negative values.
    pub fn create(&self, name: &str, location: &str, rooms: i64) -> Result<Hotel, ServiceError> {
        let mut hotels = self.store.load();
        let hotel = Hotel::new(self.ids.next_id(), name, location, rooms);
        hotels.insert(hotel.id.clone(), hotel.clone());
        self.store.save(&hotels)?;
        info!(hotel_id = %hotel.id, rooms, "hotel created");
        Ok(hotel)
    }

    /// Delete a hotel; returns whether it existed. Reservations against it are left in place.
    pub fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let removed = remove_and_save(self.store.as_ref(), id)?;
        if removed {
            info!(hotel_id = %id, "hotel deleted");
        }
        Ok(removed)
    }

    pub fn list(&self) -> Collection<Hotel> {
        self.store.load()
    }

    pub fn get(&self, id: &str) -> Option<Hotel> {
        self.store.load().remove(id)
    }
}
