//! Events flowing into and out of the simulation
//!
//! Inbound events (`WorldEvent`) are what an engine would normally deliver
//! through callbacks: collisions, timers, key presses. They all go through
//! `Session::dispatch`, so tests can inject them directly.
//!
//! Outbound events (`GameEvent`) are consumed by the front-end for audio and HUD.

use serde::{Deserialize, Serialize};

/// Identity of a physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Player,
    Platform(u32),
    Hazard,
}

/// Two bodies touched during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub a: BodyId,
    pub b: BodyId,
}

impl CollisionEvent {
    /// True if this collision is between `x` and `y`, in either order
    pub fn involves(&self, x: BodyId, y: BodyId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// One-shot timers a scene can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// Replace the base platform with spikes
    HazardSwap,
}

/// A scheduled timer reached its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerFired {
    pub id: TimerId,
}

/// A key went down (any key; used by the restart listener)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: String,
}

impl InputEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Everything `Session::dispatch` accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    Collision(CollisionEvent),
    Timer(TimerFired),
    Input(InputEvent),
}

impl From<CollisionEvent> for WorldEvent {
    fn from(e: CollisionEvent) -> Self {
        WorldEvent::Collision(e)
    }
}

impl From<TimerFired> for WorldEvent {
    fn from(e: TimerFired) -> Self {
        WorldEvent::Timer(e)
    }
}

impl From<InputEvent> for WorldEvent {
    fn from(e: InputEvent) -> Self {
        WorldEvent::Input(e)
    }
}

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    /// Looping in-game music
    Background,
    /// One-shot sting after death
    GameOver,
}

/// Simulation output for the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score overlay must show this value
    ScoreChanged(u64),
    PlayMusic { track: MusicTrack, looped: bool },
    StopMusic(MusicTrack),
    /// The base platform just turned into spikes
    HazardArmed,
    /// Run ended; `new_best` when the highscore was raised
    GameOver {
        score: u64,
        highscore: u64,
        new_best: bool,
    },
    /// Scene was rebuilt after a game over
    Restarted,
}
