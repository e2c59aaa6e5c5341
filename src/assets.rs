//! Asset manifest
//!
//! Maps the scene's asset keys to files under the asset root. Both builds
//! check every entry up front and refuse to start if any is missing: the
//! native build looks on disk, the browser build sends a HEAD request.

use thiserror::Error;

use crate::sim::MusicTrack;

/// What an asset is loaded as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

/// One manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: &'static str,
    pub file: &'static str,
    pub kind: AssetKind,
}

/// Everything the scene preloads
pub const ENTRIES: [AssetEntry; 7] = [
    AssetEntry {
        key: "background",
        file: "space.png",
        kind: AssetKind::Image,
    },
    AssetEntry {
        key: "player",
        file: "MC.png",
        kind: AssetKind::Image,
    },
    AssetEntry {
        key: "platform",
        file: "platform.png",
        kind: AssetKind::Image,
    },
    AssetEntry {
        key: "basePlatform",
        file: "basePlatform.png",
        kind: AssetKind::Image,
    },
    AssetEntry {
        key: "spikes",
        file: "spikes.png",
        kind: AssetKind::Image,
    },
    AssetEntry {
        key: "backgroundMusic",
        file: "CelesteMIDI.mp3",
        kind: AssetKind::Audio,
    },
    AssetEntry {
        key: "gameOverMusic",
        file: "DustMIDI.mp3",
        kind: AssetKind::Audio,
    },
];

/// Asset loading failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{key}` not found at {path}")]
    Missing { key: &'static str, path: String },
    #[error("unknown asset key `{0}`")]
    UnknownKey(String),
    #[error("could not create audio element for `{key}`")]
    Audio { key: &'static str },
    #[error("no browser window")]
    NoWindow,
}

/// Asset keys resolved against a root directory or URL prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    root: String,
}

impl AssetManifest {
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        while root.len() > 1 && root.ends_with('/') {
            root.pop();
        }
        Self { root }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn entries(&self) -> &'static [AssetEntry] {
        &ENTRIES
    }

    pub fn entry(&self, key: &str) -> Result<&'static AssetEntry, AssetError> {
        ENTRIES
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| AssetError::UnknownKey(key.to_string()))
    }

    /// Path (native) or URL (web) for a key
    pub fn path_of(&self, key: &str) -> Result<String, AssetError> {
        let entry = self.entry(key)?;
        Ok(self.join(entry.file))
    }

    /// Manifest key of a music track
    pub fn track_key(track: MusicTrack) -> &'static str {
        match track {
            MusicTrack::Background => "backgroundMusic",
            MusicTrack::GameOver => "gameOverMusic",
        }
    }

    fn join(&self, file: &str) -> String {
        if self.root.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.root, file)
        }
    }

    /// Check every entry exists on disk; fails on the first missing one
    #[cfg(not(target_arch = "wasm32"))]
    pub fn verify(&self) -> Result<(), AssetError> {
        for entry in &ENTRIES {
            let path = self.join(entry.file);
            if !std::path::Path::new(&path).is_file() {
                return Err(AssetError::Missing {
                    key: entry.key,
                    path,
                });
            }
            log::debug!("Asset {} -> {}", entry.key, path);
        }
        log::info!("All {} assets present under {}", ENTRIES.len(), self.root);
        Ok(())
    }

    /// HEAD-fetch every entry; fails on the first one the server won't serve
    #[cfg(target_arch = "wasm32")]
    pub async fn verify_remote(&self) -> Result<(), AssetError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{RequestInit, Response};

        let window = web_sys::window().ok_or(AssetError::NoWindow)?;
        for entry in &ENTRIES {
            let url = self.join(entry.file);
            let init = RequestInit::new();
            init.set_method("HEAD");

            // Network failures count as missing
            let status = match JsFuture::from(window.fetch_with_str_and_init(&url, &init)).await {
                Ok(value) => value.dyn_into::<Response>().map_or(0, |r| r.status()),
                Err(_) => 0,
            };
            check_status(entry, url, status)?;
        }
        log::info!("All {} assets reachable under {}", ENTRIES.len(), self.root);
        Ok(())
    }
}

/// Map an HTTP status for `entry` to success or `Missing`; 0 means no response
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn check_status(entry: &AssetEntry, url: String, status: u16) -> Result<(), AssetError> {
    if (200..300).contains(&status) {
        log::debug!("Asset {} -> {}", entry.key, url);
        return Ok(());
    }
    log::warn!("Asset {} at {} answered {}", entry.key, url, status);
    Err(AssetError::Missing {
        key: entry.key,
        path: url,
    })
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new("assets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let manifest = AssetManifest::new("static/assets/");
        assert_eq!(
            manifest.path_of("player").unwrap(),
            "static/assets/MC.png"
        );
        assert_eq!(
            manifest
                .path_of(AssetManifest::track_key(MusicTrack::GameOver))
                .unwrap(),
            "static/assets/DustMIDI.mp3"
        );
    }

    #[test]
    fn test_unknown_key() {
        let err = AssetManifest::default().path_of("boss").unwrap_err();
        assert!(matches!(err, AssetError::UnknownKey(ref k) if k == "boss"));
    }

    #[test]
    fn test_keys_unique() {
        for (i, a) in ENTRIES.iter().enumerate() {
            assert!(ENTRIES[i + 1..].iter().all(|b| b.key != a.key));
        }
        let audio = ENTRIES.iter().filter(|e| e.kind == AssetKind::Audio).count();
        assert_eq!(audio, 2);
    }

    #[test]
    fn test_http_status_check() {
        let entry = AssetManifest::default().entry("spikes").unwrap();
        assert!(check_status(entry, "assets/spikes.png".into(), 200).is_ok());
        assert!(check_status(entry, "assets/spikes.png".into(), 204).is_ok());

        for status in [0, 304, 404, 500] {
            let err = check_status(entry, "assets/spikes.png".into(), status).unwrap_err();
            assert!(matches!(
                err,
                AssetError::Missing { key: "spikes", ref path } if path == "assets/spikes.png"
            ));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_verify_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        for entry in ENTRIES.iter().filter(|e| e.key != "spikes") {
            std::fs::write(dir.path().join(entry.file), b"").unwrap();
        }

        let err = AssetManifest::new(root.clone()).verify().unwrap_err();
        assert!(matches!(err, AssetError::Missing { key: "spikes", .. }));

        std::fs::write(dir.path().join("spikes.png"), b"").unwrap();
        assert!(AssetManifest::new(root).verify().is_ok());
    }
}
