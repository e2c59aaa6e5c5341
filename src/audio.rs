//! Music playback
//!
//! Two tracks: looping background music and the one-shot game-over jingle.
//! The simulation only emits `PlayMusic`/`StopMusic` events; this module turns
//! them into `<audio>` element calls in the browser. The native build keeps
//! the same bookkeeping and just logs.

#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

use crate::assets::{AssetError, AssetManifest};
use crate::settings::Settings;
use crate::sim::{GameEvent, MusicTrack};

const TRACKS: [MusicTrack; 2] = [MusicTrack::Background, MusicTrack::GameOver];

/// One music track and its playback state
struct Track {
    track: MusicTrack,
    playing: bool,
    #[cfg(target_arch = "wasm32")]
    looped: bool,
    #[cfg(target_arch = "wasm32")]
    element: HtmlAudioElement,
}

/// Audio manager for the game
pub struct AudioManager {
    tracks: Vec<Track>,
    volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Create one player per track
    pub fn new(manifest: &AssetManifest, settings: &Settings) -> Result<Self, AssetError> {
        let mut tracks = Vec::with_capacity(TRACKS.len());
        for track in TRACKS {
            let key = AssetManifest::track_key(track);
            let url = manifest.path_of(key)?;

            #[cfg(target_arch = "wasm32")]
            let element = {
                let element =
                    HtmlAudioElement::new_with_src(&url).map_err(|_| AssetError::Audio { key })?;
                element.set_preload("auto");
                element
            };

            log::debug!("Music {:?} -> {}", track, url);
            tracks.push(Track {
                track,
                playing: false,
                #[cfg(target_arch = "wasm32")]
                looped: false,
                #[cfg(target_arch = "wasm32")]
                element,
            });
        }

        let mut audio = Self {
            tracks,
            volume: 0.0,
            muted: false,
        };
        audio.set_volume(settings.effective_music_volume());
        audio.set_muted(settings.muted);
        Ok(audio)
    }

    /// React to a simulation event
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PlayMusic { track, looped } => self.play(track, looped),
            GameEvent::StopMusic(track) => self.stop(track),
            _ => {}
        }
    }

    /// Start a track from the beginning
    pub fn play(&mut self, track: MusicTrack, looped: bool) {
        let Some(t) = self.track_mut(track) else {
            return;
        };
        t.playing = true;

        #[cfg(target_arch = "wasm32")]
        {
            t.looped = looped;
            t.element.set_loop(looped);
            t.element.set_current_time(0.0);
            // Browsers reject the play() promise before the first user gesture;
            // resume() retries looping tracks on the next key press
            match t.element.play() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        log::warn!("Playback of {:?} was blocked", track);
                    }
                }),
                Err(e) => log::warn!("Playback of {:?} failed: {:?}", track, e),
            }
        }

        log::debug!("Play {:?} (loop: {})", track, looped);
    }

    /// Stop a track and rewind it
    pub fn stop(&mut self, track: MusicTrack) {
        let Some(t) = self.track_mut(track) else {
            return;
        };
        if !t.playing {
            return;
        }
        t.playing = false;

        #[cfg(target_arch = "wasm32")]
        {
            let _ = t.element.pause();
            t.element.set_current_time(0.0);
        }

        log::debug!("Stop {:?}", track);
    }

    /// Retry tracks the browser refused to start before a user gesture
    #[cfg(target_arch = "wasm32")]
    pub fn resume(&self) {
        for t in &self.tracks {
            if t.playing && t.looped && t.element.paused() {
                let _ = t.element.play();
            }
        }
    }

    pub fn is_playing(&self, track: MusicTrack) -> bool {
        self.tracks.iter().any(|t| {
            #[cfg(target_arch = "wasm32")]
            let finished = !t.looped && t.element.ended();
            #[cfg(not(target_arch = "wasm32"))]
            let finished = false;
            t.track == track && t.playing && !finished
        })
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        #[cfg(target_arch = "wasm32")]
        for t in &self.tracks {
            t.element.set_volume(f64::from(self.volume));
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Mute/unmute all audio; playback position is kept
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        #[cfg(target_arch = "wasm32")]
        for t in &self.tracks {
            t.element.set_muted(muted);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn track_mut(&mut self, track: MusicTrack) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.track == track)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::consts::MUSIC_VOLUME;

    fn manager() -> AudioManager {
        AudioManager::new(&AssetManifest::default(), &Settings::default()).unwrap()
    }

    #[test]
    fn test_default_volume() {
        let audio = manager();
        assert!((audio.volume() - MUSIC_VOLUME).abs() < 1e-6);
        assert!(!audio.is_muted());
    }

    #[test]
    fn test_events_drive_playback() {
        let mut audio = manager();
        audio.apply(&GameEvent::PlayMusic {
            track: MusicTrack::Background,
            looped: true,
        });
        assert!(audio.is_playing(MusicTrack::Background));

        audio.apply(&GameEvent::StopMusic(MusicTrack::Background));
        audio.apply(&GameEvent::PlayMusic {
            track: MusicTrack::GameOver,
            looped: false,
        });
        assert!(!audio.is_playing(MusicTrack::Background));
        assert!(audio.is_playing(MusicTrack::GameOver));
    }

    #[test]
    fn test_other_events_ignored() {
        let mut audio = manager();
        audio.apply(&GameEvent::ScoreChanged(3));
        audio.apply(&GameEvent::HazardArmed);
        assert!(!audio.is_playing(MusicTrack::Background));
        assert!(!audio.is_playing(MusicTrack::GameOver));
    }

    #[test]
    fn test_muted_from_settings() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let audio = AudioManager::new(&AssetManifest::default(), &settings).unwrap();
        assert!(audio.is_muted());
        assert_eq!(audio.volume(), 0.0);
    }

    #[test]
    fn test_volume_scaled_by_master() {
        let settings = Settings {
            master_volume: 0.5,
            music_volume: 0.8,
            ..Settings::default()
        };
        let audio = AudioManager::new(&AssetManifest::default(), &settings).unwrap();
        assert!((audio.volume() - 0.4).abs() < 1e-6);

        let loud = Settings {
            master_volume: 2.0,
            music_volume: 1.0,
            ..Settings::default()
        };
        let audio = AudioManager::new(&AssetManifest::default(), &loud).unwrap();
        assert_eq!(audio.volume(), 1.0);
    }
}
