//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Engine callbacks modelled as explicit events
//! - No rendering, audio or platform dependencies

pub mod bootstrap;
pub mod collision;
pub mod events;
pub mod index;
pub mod motion;
pub mod physics;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timers;
pub mod transition;

pub use bootstrap::bootstrap;
pub use collision::{Aabb, CollisionResult};
pub use events::{
    BodyId, CollisionEvent, GameEvent, InputEvent, MusicTrack, TimerFired, TimerId, WorldEvent,
};
pub use index::{LinearScan, TopIndex};
pub use motion::{Cursors, JumpState};
pub use session::Session;
pub use spawner::PlatformSpeed;
pub use state::{
    Background, Facing, GamePhase, Hazard, HazardKind, Platform, PlatformCollection, Player, World,
};
pub use tick::{TickInput, recycle_platforms, tick};
