//! Game-over transition and the restart listener it arms

use super::events::{GameEvent, MusicTrack};
use super::state::{GamePhase, World};
use crate::highscore::Highscore;

/// Playing -> GameOver
///
/// Freezes the platforms, tints the player, swaps music, folds the score into
/// the highscore and arms the restart listener. No-op if already over.
pub fn enter_game_over(world: &mut World, highscore: &mut Highscore, events: &mut Vec<GameEvent>) {
    if world.is_game_over() {
        return;
    }

    world.phase = GamePhase::GameOver;
    world.player.tinted = true;
    world.platforms.set_velocity_y(0.0);

    events.push(GameEvent::StopMusic(MusicTrack::Background));
    events.push(GameEvent::PlayMusic {
        track: MusicTrack::GameOver,
        looped: false,
    });

    let new_best = highscore.record(world.score);
    events.push(GameEvent::GameOver {
        score: world.score,
        highscore: highscore.best(),
        new_best,
    });

    world.restart_armed = true;

    log::info!(
        "Game over at {:.1}s: score {}, highscore {}{}",
        world.elapsed_ms / 1000.0,
        world.score,
        highscore.best(),
        if new_best { " (new best)" } else { "" }
    );
}

/// Fire the armed restart listener; returns false if it was not armed
///
/// Disarms the listener and stops the game-over music. The caller rebuilds
/// the scene.
pub fn fire_restart_listener(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    if !world.restart_armed {
        return false;
    }
    world.restart_armed = false;
    events.push(GameEvent::StopMusic(MusicTrack::GameOver));
    true
}
