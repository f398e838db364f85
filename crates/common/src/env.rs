//! Environment/runtime helpers
//!
//! Sanity checks run by the binary before any store is touched.

use std::path::Path;
use tracing::warn;

/// Ensure the parent directory of every store path exists.
/// A path that already exists as a directory is reported, since the store
/// could never be written there.
pub fn ensure_store_dirs<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<()> {
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            warn!(path = %path.display(), "store path is a directory; saves will fail");
            continue;
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("hotel_env_{}", uuid::Uuid::new_v4()));
        let store = root.join("nested").join("hotels.json");
        ensure_store_dirs(&[&store])?;
        assert!(root.join("nested").is_dir());
        assert!(!store.exists());
        let _ = std::fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn bare_file_names_need_no_directory() -> anyhow::Result<()> {
        ensure_store_dirs(&["hotels.json"])?;
        Ok(())
    }
}
