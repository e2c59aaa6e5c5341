//! Session: the running scene plus what outlives it

use super::bootstrap::bootstrap;
use super::events::{BodyId, GameEvent, TimerFired, TimerId, WorldEvent};
use super::spawner::PlatformSpeed;
use super::state::{HazardKind, World};
use super::transition::{enter_game_over, fire_restart_listener};
use crate::highscore::Highscore;
use crate::settings::Settings;

/// One player session: current world, highscore, and pending output events
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    highscore: Highscore,
    seed: u64,
    speed: PlatformSpeed,
    pub(super) events: Vec<GameEvent>,
}

impl Session {
    /// Start a session and bootstrap its first run
    pub fn new(seed: u64, speed: PlatformSpeed) -> Self {
        let mut events = Vec::new();
        let world = bootstrap(seed, speed, &mut events);
        Self {
            world,
            highscore: Highscore::new(),
            seed,
            speed,
            events,
        }
    }

    /// Start a session from settings; `fallback_seed` is used unless a seed is pinned
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Self {
        Self::new(settings.seed.unwrap_or(fallback_seed), settings.platform_speed)
    }

    pub fn highscore(&self) -> &Highscore {
        &self.highscore
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Events produced since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver one event to the scene
    pub fn dispatch(&mut self, event: impl Into<WorldEvent>) {
        match event.into() {
            WorldEvent::Collision(collision) => {
                if collision.involves(BodyId::Player, BodyId::Hazard) && self.world.hazard.is_lethal()
                {
                    enter_game_over(&mut self.world, &mut self.highscore, &mut self.events);
                }
            }
            WorldEvent::Timer(TimerFired { id }) => match id {
                TimerId::HazardSwap => self.swap_hazard(),
            },
            WorldEvent::Input(input) => {
                if fire_restart_listener(&mut self.world, &mut self.events) {
                    log::info!("Restart on key {:?}", input.key);
                    self.restart();
                }
            }
        }
    }

    /// Base platform -> spikes, once per run
    fn swap_hazard(&mut self) {
        if self.world.hazard.kind != HazardKind::Base {
            return;
        }
        self.world.hazard.kind = HazardKind::Spikes;
        self.events.push(GameEvent::HazardArmed);
        log::info!(
            "Spikes armed at {:.1}s (score {})",
            self.world.elapsed_ms / 1000.0,
            self.world.score
        );
    }

    /// Rebuild the scene; everything but the highscore starts over
    fn restart(&mut self) {
        self.world = bootstrap(self.seed, self.speed, &mut self.events);
        self.events.push(GameEvent::Restarted);
    }
}
