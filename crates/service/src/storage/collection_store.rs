use std::collections::HashMap;

use crate::errors::ServiceError;

/// Records keyed by their id.
pub type Collection<V> = HashMap<String, V>;

/// A named, durable collection of records.
///
/// `load` fails open: a missing store is an empty collection, and an
/// unreadable or malformed one is logged and also treated as empty.
/// `save` replaces the stored collection entirely.
pub trait CollectionStore<V>: Send + Sync {
    fn name(&self) -> &str;
    fn load(&self) -> Collection<V>;
    fn save(&self, records: &Collection<V>) -> Result<(), ServiceError>;
}

/// Remove `id` and persist; an absent id leaves the store untouched.
pub fn remove_and_save<V>(store: &dyn CollectionStore<V>, id: &str) -> Result<bool, ServiceError> {
    let mut records = store.load();
    if records.remove(id).is_none() {
        return Ok(false);
    }
    store.save(&records)?;
    Ok(true)
}
