use std::{marker::PhantomData, sync::{Mutex, MutexGuard}};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::ServiceError;
use crate::storage::collection_store::{Collection, CollectionStore};

struct Slot {
    content: Option<Value>,
    saves: usize,
}

/// In-memory record store.
///
/// Holds the serialised JSON document rather than live records, so loads and
/// saves go through the same serde path as [`super::JsonMapStore`] and every
/// load hands out an independent copy.
pub struct MemoryMapStore<V> {
    name: String,
    slot: Mutex<Slot>,
    _records: PhantomData<fn() -> V>,
}

impl<V> MemoryMapStore<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new(name: &str) -> Self {
        Self::from_slot(name, None)
    }

    /// Seed the store with an arbitrary document, valid or not.
    pub fn with_raw(name: &str, raw: Value) -> Self {
        Self::from_slot(name, Some(raw))
    }

    fn from_slot(name: &str, content: Option<Value>) -> Self {
        Self {
            name: name.to_string(),
            slot: Mutex::new(Slot { content, saves: 0 }),
            _records: PhantomData,
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    pub fn raw(&self) -> Option<Value> {
        self.lock().content.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<V> CollectionStore<V> for MemoryMapStore<V>
where
    V: Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Collection<V> {
        let Some(content) = self.raw() else {
            return Collection::new();
        };
        serde_json::from_value(content).unwrap_or_else(|error| {
            warn!(store = %self.name, %error, "store unreadable; continuing with an empty collection");
            Collection::new()
        })
    }

    fn save(&self, records: &Collection<V>) -> Result<(), ServiceError> {
        let value = serde_json::to_value(records).map_err(|e| ServiceError::storage(&self.name, e))?;
        let mut slot = self.lock();
        slot.content = Some(value);
        slot.saves += 1;
        Ok(())
    }
}
