//! Platform spawning and speed selection

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::index::TopIndex;
use super::state::{Platform, World};
use crate::consts::*;

/// How fast the platform collection falls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlatformSpeed {
    /// Fixed speed in pixels/s
    Constant { px_per_sec: f32 },
    /// Crossing the viewport takes `travel_secs` at score 0, 10% faster
    /// for every further 10 points
    Ramp { travel_secs: f32 },
}

impl Default for PlatformSpeed {
    fn default() -> Self {
        PlatformSpeed::Constant {
            px_per_sec: PLATFORM_SPEED,
        }
    }
}

impl PlatformSpeed {
    /// Downward velocity for the current score
    pub fn velocity_for(&self, score: u64) -> f32 {
        match *self {
            PlatformSpeed::Constant { px_per_sec } => px_per_sec,
            PlatformSpeed::Ramp { travel_secs } => {
                let base = (VIEW_HEIGHT + PLATFORM_SIZE.y) / travel_secs.max(f32::EPSILON);
                base * (score as f32 / 10.0 + 1.0)
            }
        }
    }

    pub fn is_ramp(&self) -> bool {
        matches!(self, PlatformSpeed::Ramp { .. })
    }
}

/// Spawn the opening batch of platforms
///
/// Each platform hugs the left or right edge and sits `PLATFORM_MIN_GAP`
/// above the current topmost one, so the stack is always reachable.
pub fn spawn_platforms(world: &mut World, index: &impl TopIndex) {
    for _ in 0..PLATFORM_BATCH {
        let mut rng = world.rng_state.next_rng();
        let x = if rng.random_bool(0.5) {
            0.0
        } else {
            VIEW_WIDTH - PLATFORM_SIZE.x
        };

        let top = index.top_or(&world.platforms.platforms, VIEW_HEIGHT);
        let id = world.next_entity_id();
        let platform = Platform::new(id, Vec2::new(x, top - PLATFORM_MIN_GAP));

        world.platforms.add(platform);
        let vy = world.speed.velocity_for(world.score);
        world.platforms.set_velocity_y(vy);
    }

    log::debug!(
        "Spawned {} platforms, top at {:.0}",
        world.platforms.len(),
        index.top_or(&world.platforms.platforms, VIEW_HEIGHT)
    );
}
