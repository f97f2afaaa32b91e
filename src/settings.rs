//! Player preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Visual Effects ===
    /// Draw explosion particles (the simulation always runs them)
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            particles: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "vip_shooter_settings";

    /// Volumes back into [0, 1]
    pub fn sanitized(mut self) -> Self {
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self
    }

    /// Parse settings JSON; missing fields take defaults, garbage yields None
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Settings>(json)
            .ok()
            .map(Self::sanitized)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Settings saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"muted": true}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert!(settings.particles);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 4.0, "sfx_volume": -1.0}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Settings::from_json("not json").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()), Some(settings));
    }
}
