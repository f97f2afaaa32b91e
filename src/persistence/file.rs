//! JSON file store for native builds

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BestScoreStore, StoreError};

/// On-disk envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
struct BestRecord {
    best: u32,
}

/// Best score kept as `{"best": n}` in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_FILE: &'static str = "vip_shooter_best.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as `Ok(0)`
    pub fn read(&self) -> Result<u32, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let record: BestRecord = serde_json::from_str(&json)?;
        Ok(record.best)
    }

    /// Write through a temp file so a crash never leaves a torn record
    pub fn write(&self, best: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&BestRecord { best })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl BestScoreStore for JsonFileStore {
    fn load_best(&self) -> u32 {
        self.read().unwrap_or_else(|e| {
            log::warn!("{} ({}), starting from 0", e, self.path.display());
            0
        })
    }

    fn save_best(&mut self, best: u32) {
        match self.write(best) {
            Ok(()) => log::info!("Best score {} saved to {}", best, self.path.display()),
            Err(e) => log::warn!("{} ({}), best not persisted", e, self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vip_shooter_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.read().unwrap(), 0);
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save_best(130);
        assert_eq!(JsonFileStore::new(&path).load_best(), 130);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"best":130}"#);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_zero() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ best: ").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read(), Err(StoreError::Parse(_))));
        assert_eq!(store.load_best(), 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_not_fatal() {
        let mut store = JsonFileStore::new(
            std::env::temp_dir()
                .join("vip_shooter_no_such_dir")
                .join("deeper")
                .join("best.json"),
        );
        store.save_best(10);
        assert_eq!(store.load_best(), 0);
    }
}
