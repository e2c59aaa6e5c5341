//! Scene bootstrap: build everything one run needs

use super::events::{GameEvent, MusicTrack, TimerId};
use super::index::LinearScan;
use super::spawner::{PlatformSpeed, spawn_platforms};
use super::state::World;
use crate::consts::HAZARD_DELAY_MS;

/// Build a fresh world for a run
///
/// Pushes the events a scene start produces (score overlay at zero, looping
/// background music) onto `events`.
pub fn bootstrap(seed: u64, speed: PlatformSpeed, events: &mut Vec<GameEvent>) -> World {
    let mut world = World::new(seed, speed);

    world
        .timers
        .schedule(TimerId::HazardSwap, world.elapsed_ms, HAZARD_DELAY_MS);

    spawn_platforms(&mut world, &LinearScan);

    events.push(GameEvent::ScoreChanged(world.score));
    events.push(GameEvent::PlayMusic {
        track: MusicTrack::Background,
        looped: true,
    });

    log::info!(
        "Scene ready: seed {}, {} platforms, speed {:?}",
        seed,
        world.platforms.len(),
        speed
    );
    world
}
