//! Best score persistence
//!
//! Stores are infallible at the trait boundary: a missing or unreadable best
//! score loads as 0 and a failed write is logged and dropped. Nothing here can
//! stop a session from running.

use std::fmt;

pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Load/save of the single best score
pub trait BestScoreStore {
    /// Stored best, or 0 when absent or unreadable
    fn load_best(&self) -> u32;
    /// Persist a new best; failures are swallowed
    fn save_best(&mut self, best: u32);
}

/// Failure inside a store implementation
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(String),
    /// Backing storage not reachable (no window, storage disabled)
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "best score i/o failed: {e}"),
            Self::Parse(msg) => write!(f, "best score unreadable: {msg}"),
            Self::Unavailable => write!(f, "best score storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// In-process store; the default when nothing should touch disk
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best: Option<u32>,
    /// Number of writes received
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }

    pub fn stored(&self) -> Option<u32> {
        self.best
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save_best(&mut self, best: u32) {
        self.best = Some(best);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.load_best(), 0);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::with_best(40);
        assert_eq!(store.load_best(), 40);
        store.save_best(90);
        assert_eq!(store.load_best(), 90);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Parse("bad digit".into());
        assert_eq!(err.to_string(), "best score unreadable: bad digit");
        let io: StoreError = std::io::Error::other("disk full").into();
        assert!(std::error::Error::source(&io).is_some());
    }
}
