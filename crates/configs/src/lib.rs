use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::{Path, PathBuf};

pub const HOTELS_FILE: &str = "hotels.json";
pub const CUSTOMERS_FILE: &str = "customers.json";
pub const RESERVATIONS_FILE: &str = "reservations.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub stores: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the three record stores.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default = "default_hotels_path")]
    pub hotels_path: PathBuf,
    #[serde(default = "default_customers_path")]
    pub customers_path: PathBuf,
    #[serde(default = "default_reservations_path")]
    pub reservations_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            hotels_path: default_hotels_path(),
            customers_path: default_customers_path(),
            reservations_path: default_reservations_path(),
        }
    }
}

fn default_hotels_path() -> PathBuf { PathBuf::from(HOTELS_FILE) }
fn default_customers_path() -> PathBuf { PathBuf::from(CUSTOMERS_FILE) }
fn default_reservations_path() -> PathBuf { PathBuf::from(RESERVATIONS_FILE) }

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Load the file named by `CONFIG_PATH` (default `config.toml`).
/// A missing file yields the defaults; a malformed one is an error.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.stores.normalize_from_env();
        self.stores.validate()
    }
}

impl StoreConfig {
    /// All three stores under `dir`, using the default file names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            hotels_path: dir.join(HOTELS_FILE),
            customers_path: dir.join(CUSTOMERS_FILE),
            reservations_path: dir.join(RESERVATIONS_FILE),
        }
    }

    pub fn normalize_from_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override store paths from `HOTELS_STORE`, `CUSTOMERS_STORE` and `RESERVATIONS_STORE`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(p) = non_empty("HOTELS_STORE") { self.hotels_path = PathBuf::from(p); }
        if let Some(p) = non_empty("CUSTOMERS_STORE") { self.customers_path = PathBuf::from(p); }
        if let Some(p) = non_empty("RESERVATIONS_STORE") { self.reservations_path = PathBuf::from(p); }
    }

    pub fn validate(&self) -> Result<()> {
        let entries = [
            ("stores.hotels_path", &self.hotels_path),
            ("stores.customers_path", &self.customers_path),
            ("stores.reservations_path", &self.reservations_path),
        ];
        for (key, path) in entries {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("{key} must not be empty"));
            }
        }
        if self.hotels_path == self.customers_path
            || self.hotels_path == self.reservations_path
            || self.customers_path == self.reservations_path
        {
            return Err(anyhow!("each collection needs its own store path"));
        }
        Ok(())
    }
}
