//! LocalStorage store for the web build

use web_sys::Storage;

use super::{BestScoreStore, StoreError};

/// Best score as a decimal string under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "vip_shooter_best";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }

    pub fn read(&self) -> Result<u32, StoreError> {
        let storage = Self::storage()?;
        let Some(raw) = storage
            .get_item(&self.key)
            .map_err(|_| StoreError::Unavailable)?
        else {
            return Ok(0);
        };
        raw.trim()
            .parse::<u32>()
            .map_err(|e| StoreError::Parse(format!("{raw:?}: {e}")))
    }

    pub fn write(&self, best: u32) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, &best.to_string())
            .map_err(|_| StoreError::Unavailable)
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> u32 {
        self.read().unwrap_or_else(|e| {
            log::warn!("{}, starting from 0", e);
            0
        })
    }

    fn save_best(&mut self, best: u32) {
        match self.write(best) {
            Ok(()) => log::info!("Best score {} saved", best),
            Err(e) => log::warn!("{}, best not persisted", e),
        }
    }
}
