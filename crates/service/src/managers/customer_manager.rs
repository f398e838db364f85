use std::sync::Arc;

use configs::StoreConfig;
use models::{Customer, IdGenerator, UuidV4Ids};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{remove_and_save, Collection, CollectionStore, JsonMapStore};

#[derive(Clone)]
pub struct CustomerManager {
    store: Arc<dyn CollectionStore<Customer>>,
    ids: Arc<dyn IdGenerator>,
}

impl CustomerManager {
    pub fn new(store: Arc<dyn CollectionStore<Customer>>) -> Self {
        Self { store, ids: Arc::new(UuidV4Ids) }
    }

    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self::new(Arc::new(JsonMapStore::<Customer>::new("customers", &cfg.customers_path)))
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn create(&self, name: &str, email: &str) -> Result<Customer, ServiceError> {
        let mut customers = self.store.load();
        let customer = Customer::new(self.ids.next_id(), name, email);
        customers.insert(customer.id.clone(), customer.clone());
        self.store.save(&customers)?;
        info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Delete a customer; returns whether it existed.
    pub fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let removed = remove_and_save(self.store.as_ref(), id)?;
        if removed {
            info!(customer_id = %id, "customer deleted");
        }
        Ok(removed)
    }

    pub fn list(&self) -> Collection<Customer> {
        self.store.load()
    }

    pub fn get(&self, id: &str) -> Option<Customer> {
        self.store.load().remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryMapStore;

    #[test]
    fn customer_crud() -> Result<(), anyhow::Error> {
        let store = Arc::new(MemoryMapStore::<Customer>::new("customers"));
        let customers = CustomerManager::new(store.clone());

        let john = customers.create("John Doe", "john@example.com")?;
        let jane = customers.create("Jane Doe", "jane@example.com")?;
        assert_eq!(customers.list().len(), 2);
        assert_eq!(customers.get(&john.id).map(|c| c.email), Some("john@example.com".to_string()));

        assert!(customers.delete(&jane.id)?);
        assert!(!customers.delete(&jane.id)?);
        assert_eq!(store.load().len(), 1);
        Ok(())
    }
}
