//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::MUSIC_VOLUME;
use crate::sim::PlatformSpeed;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Gameplay ===
    /// Platform fall speed (constant unless the ramp is opted into)
    pub platform_speed: PlatformSpeed,
    /// Fixed run seed; a clock-derived seed is used when unset
    pub seed: Option<u64>,

    // === Assets ===
    /// Directory (native) or URL prefix (web) holding the asset files
    pub asset_root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            music_volume: MUSIC_VOLUME,
            muted: false,
            mute_on_blur: true,

            platform_speed: PlatformSpeed::default(),
            seed: None,

            asset_root: "assets".to_string(),
        }
    }
}

impl Settings {
    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "skyhop_settings";

    /// Settings file used by the native build
    pub const FILE_NAME: &'static str = "skyhop_settings.json";

    /// Environment variable overriding the native settings path
    pub const PATH_ENV: &'static str = "SKYHOP_SETTINGS";

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

    /// Load settings from `$SKYHOP_SETTINGS` or `./skyhop_settings.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::FILE_NAME.to_string());
        Self::load_from(std::path::Path::new(&path))
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::debug!("No settings at {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
