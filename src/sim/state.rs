//! World state and core simulation types
//!
//! Everything one scene run owns lives in `World`. A restart throws the whole
//! value away and bootstraps a new one; only the session keeps the highscore.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawner::PlatformSpeed;
use super::timers::Timers;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player hit the spikes; physics paused until a key is pressed
    GameOver,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Per-edge contact flags, cleared at the start of every physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    /// Jumps used since last touching ground (0..=2)
    pub jumps: u8,
    /// Red tint after game over (visual only)
    pub tinted: bool,
    /// Contact with other bodies on each edge
    pub touching: Edges,
    /// Contact with the world bounds on each edge
    pub blocked: Edges,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            facing: Facing::Right,
            jumps: 0,
            tinted: false,
            touching: Edges::default(),
            blocked: Edges::default(),
        }
    }

    /// Standing on a body (world bounds do not count)
    pub fn is_grounded(&self) -> bool {
        self.touching.down
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// A falling platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Collides with the player
    pub collider: bool,
}

impl Platform {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: PLATFORM_SIZE,
            collider: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// All platforms of the run, sharing one downward velocity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformCollection {
    pub platforms: Vec<Platform>,
    /// Downward velocity (pixels/s) applied to every member
    pub velocity_y: f32,
}

impl PlatformCollection {
    pub fn add(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    pub fn set_velocity_y(&mut self, vy: f32) {
        self.velocity_y = vy;
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }
}

/// Floor hazard variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Safe base platform the player starts on
    Base,
    /// Lethal spikes; touching them ends the run
    Spikes,
}

/// The static floor body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: HazardKind,
}

impl Hazard {
    pub fn base() -> Self {
        Self {
            pos: HAZARD_POS,
            size: HAZARD_SIZE,
            kind: HazardKind::Base,
        }
    }

    pub fn is_lethal(&self) -> bool {
        self.kind == HazardKind::Spikes
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Rotating backdrop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Rotation in degrees
    pub angle: f32,
    /// Degrees added every tick
    pub rotation_speed: f32,
    /// Multiplier over the viewport size
    pub scale: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            angle: 0.0,
            rotation_speed: BACKGROUND_ROTATION_SPEED,
            scale: BACKGROUND_SCALE,
        }
    }
}

impl Background {
    pub fn rotate(&mut self) {
        self.angle += self.rotation_speed;
    }
}

/// RNG state wrapper for serialization
///
/// Each draw derives a fresh generator from `(seed, stream)` and bumps the
/// stream, so the state is two integers and replays exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw
    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete state of one scene run (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation clock (ms since scene start)
    pub elapsed_ms: f64,
    /// How platform speed is chosen
    pub speed: PlatformSpeed,
    pub player: Player,
    pub platforms: PlatformCollection,
    pub hazard: Hazard,
    pub background: Background,
    pub timers: Timers,
    /// Restart listener is waiting for a key
    pub restart_armed: bool,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Bare world with player, hazard and background; no platforms or timers yet
    pub fn new(seed: u64, speed: PlatformSpeed) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            elapsed_ms: 0.0,
            speed,
            player: Player::new(PLAYER_SPAWN),
            platforms: PlatformCollection::default(),
            hazard: Hazard::base(),
            background: Background::default(),
            timers: Timers::new(),
            restart_armed: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
