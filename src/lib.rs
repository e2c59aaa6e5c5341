//! Skyhop - A double-jump arcade platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, platforms, hazard, game over)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Background / game-over music playback
//! - `assets`: Asset manifest and startup checks
//! - `hud`: Score and game-over overlay projection

pub mod assets;
pub mod audio;
pub mod highscore;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetManifest};
pub use highscore::Highscore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical viewport (pixels, y grows downward)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Clear colour behind everything
    pub const BACKGROUND_COLOR: u32 = 0xabcdef;

    /// Downward acceleration applied to the player (pixels/s²)
    pub const GRAVITY: f32 = 850.0;
    /// Maximum overlap (beyond per-step travel) still resolved by separation
    pub const OVERLAP_BIAS: f32 = 4.0;

    /// Player defaults
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 450.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(48.0, 64.0);
    pub const RUN_SPEED: f32 = 260.0;
    /// Upward impulse for both jumps (negative = up)
    pub const JUMP_VELOCITY: f32 = -695.0;
    pub const MAX_JUMPS: u8 = 2;

    /// Platforms
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(100.0, 32.0);
    pub const PLATFORM_BATCH: usize = 8;
    pub const PLATFORM_MIN_GAP: f32 = 200.0;
    /// Default downward platform speed (pixels/s)
    pub const PLATFORM_SPEED: f32 = 50.0;
    /// Horizontal range for recycled platforms (inclusive, center x)
    pub const RECYCLE_X_MIN: i32 = 40;
    pub const RECYCLE_X_MAX: i32 = 800;

    /// Floor hazard (base platform, later spikes)
    pub const HAZARD_POS: Vec2 = Vec2::new(400.0, 590.0);
    pub const HAZARD_SIZE: Vec2 = Vec2::new(800.0, 26.0);
    /// Delay before the base platform turns into spikes
    pub const HAZARD_DELAY_MS: f64 = 10_000.0;

    /// Background decoration
    pub const BACKGROUND_ROTATION_SPEED: f32 = 0.01; // degrees per tick
    pub const BACKGROUND_SCALE: f32 = 1.5;

    /// Music volume (0.0 - 1.0)
    pub const MUSIC_VOLUME: f32 = 0.3;
}
