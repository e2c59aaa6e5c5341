//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::events::{GameEvent, InputEvent, TimerFired};
use super::motion::{Cursors, resolve_motion};
use super::physics;
use super::session::Session;
use super::state::World;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor keys held this tick
    pub cursors: Cursors,
    /// Keys that went down since the previous tick
    pub pressed: Vec<String>,
}

/// Advance the session by one fixed timestep
///
/// Order: key presses (restart listener), due timers, input/motion, physics
/// and its collisions, then platform recycling. Physics and recycling are
/// skipped while the game is over; the backdrop keeps spinning.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    let was_over = session.world.is_game_over();
    for key in &input.pressed {
        session.dispatch(InputEvent::new(key.as_str()));
    }
    if was_over && !session.world.is_game_over() {
        // Fresh scene; it starts moving next tick
        return;
    }

    session.world.time_ticks += 1;
    session.world.elapsed_ms += f64::from(dt) * 1000.0;

    let now = session.world.elapsed_ms;
    for id in session.world.timers.take_due(now) {
        session.dispatch(TimerFired { id });
    }

    resolve_motion(&mut session.world, &input.cursors);

    if !session.world.is_game_over() {
        for contact in physics::step(&mut session.world, dt) {
            session.dispatch(contact);
        }
    }

    recycle_platforms(&mut session.world, &mut session.events);
}

/// Move platforms that fell off the bottom back above the top
///
/// Each recycle scores one point. Nothing happens once the game is over.
/// Returns how many platforms were recycled.
pub fn recycle_platforms(world: &mut World, events: &mut Vec<GameEvent>) -> u32 {
    if world.is_game_over() {
        return 0;
    }

    let mut recycled = 0;
    for platform in world.platforms.platforms.iter_mut() {
        if platform.pos.y <= VIEW_HEIGHT {
            continue;
        }
        let mut rng = world.rng_state.next_rng();
        platform.pos.y = -(platform.size.x / 2.0);
        platform.pos.x = rng.random_range(RECYCLE_X_MIN..=RECYCLE_X_MAX) as f32;

        world.score += 1;
        events.push(GameEvent::ScoreChanged(world.score));
        recycled += 1;
        log::debug!(
            "Recycled platform {} to x {:.0}, score {}",
            platform.id,
            platform.pos.x,
            world.score
        );
    }

    if recycled > 0 && world.speed.is_ramp() {
        let vy = world.speed.velocity_for(world.score);
        world.platforms.set_velocity_y(vy);
    }

    recycled
}
