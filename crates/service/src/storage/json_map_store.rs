use std::{fs, io, marker::PhantomData, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::storage::collection_store::{Collection, CollectionStore};

/// Generic JSON file-backed record store.
///
/// Persists a `HashMap<String, V>` as one JSON object (outer key = record id)
/// and rewrites the whole file on every save. A crash mid-write can leave a
/// truncated file, which the next load treats as corrupt.
pub struct JsonMapStore<V> {
    name: String,
    file_path: PathBuf,
    _records: PhantomData<fn() -> V>,
}

impl<V> JsonMapStore<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Store named `name` at `path`. Nothing is read or created until first use.
    pub fn new<P: Into<PathBuf>>(name: &str, path: P) -> Self {
        Self { name: name.to_string(), file_path: path.into(), _records: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read(&self) -> Result<Option<Collection<V>>, String> {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };
        serde_json::from_slice(&bytes).map(Some).map_err(|e| e.to_string())
    }
}

impl<V> CollectionStore<V> for JsonMapStore<V>
where
    V: Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Collection<V> {
        match self.read() {
            Ok(Some(records)) => records,
            Ok(None) => {
                debug!(store = %self.name, path = %self.file_path.display(), "store file missing; starting empty");
                Collection::new()
            }
            Err(error) => {
                warn!(
                    store = %self.name,
                    path = %self.file_path.display(),
                    %error,
                    "store unreadable; continuing with an empty collection"
                );
                Collection::new()
            }
        }
    }

    fn save(&self, records: &Collection<V>) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ServiceError::storage(&self.name, e))?;
        }
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
        records.serialize(&mut ser).map_err(|e| ServiceError::storage(&self.name, e))?;
        fs::write(&self.file_path, data).map_err(|e| ServiceError::storage(&self.name, e))?;
        debug!(store = %self.name, records = records.len(), "store saved");
        Ok(())
    }
}
