//! Score text and game-over overlay
//!
//! Pure projection of the session; the front-end rewrites these strings in
//! the DOM when a score or game-over event says they changed. Nothing here is
//! a source of truth.

use crate::sim::{GameEvent, Session};

/// Overlay shown after the player hits the spikes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverOverlay {
    pub title: String,
    pub highscore_text: String,
    pub retry_text: String,
}

/// Everything drawn on top of the scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Top-left score readout
    pub score_text: String,
    /// Score readout turns red on game over
    pub score_tinted: bool,
    pub overlay: Option<GameOverOverlay>,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        let world = &session.world;
        let over = world.is_game_over();

        let overlay = over.then(|| GameOverOverlay {
            title: "GAME OVER".to_string(),
            highscore_text: format!("Highscore: {}", session.highscore().best()),
            retry_text: "Press any key to retry".to_string(),
        });

        Self {
            score_text: format!("score: {}", world.score),
            score_tinted: over,
            overlay,
        }
    }

    /// Whether `event` changes what the HUD shows
    pub fn is_stale_after(event: &GameEvent) -> bool {
        matches!(
            event,
            GameEvent::ScoreChanged(_) | GameEvent::GameOver { .. } | GameEvent::Restarted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SIM_DT, VIEW_HEIGHT};
    use crate::sim::{
        BodyId, CollisionEvent, InputEvent, MusicTrack, PlatformSpeed, TickInput, TimerFired,
        TimerId, tick,
    };

    #[test]
    fn test_playing_hud() {
        let mut session = Session::new(5, PlatformSpeed::default());
        session.world.score = 12;
        let hud = Hud::from_session(&session);
        assert_eq!(hud.score_text, "score: 12");
        assert!(!hud.score_tinted);
        assert!(hud.overlay.is_none());
    }

    #[test]
    fn test_game_over_overlay() {
        let mut session = Session::new(5, PlatformSpeed::default());
        session.world.score = 7;
        session.dispatch(TimerFired {
            id: TimerId::HazardSwap,
        });
        session.dispatch(CollisionEvent {
            a: BodyId::Player,
            b: BodyId::Hazard,
        });

        let hud = Hud::from_session(&session);
        assert!(hud.score_tinted);
        let overlay = hud.overlay.unwrap();
        assert_eq!(overlay.title, "GAME OVER");
        assert_eq!(overlay.highscore_text, "Highscore: 7");
        assert_eq!(overlay.retry_text, "Press any key to retry");
    }

    #[test]
    fn test_refresh_events() {
        assert!(Hud::is_stale_after(&GameEvent::ScoreChanged(4)));
        assert!(Hud::is_stale_after(&GameEvent::Restarted));
        assert!(!Hud::is_stale_after(&GameEvent::HazardArmed));
        assert!(!Hud::is_stale_after(&GameEvent::StopMusic(
            MusicTrack::Background
        )));
    }

    #[test]
    fn test_every_visible_change_is_announced() {
        let mut session = Session::new(9, PlatformSpeed::default());
        let mut shown = Hud::from_session(&session);
        session.drain_events();

        let step = |session: &mut Session, shown: &mut Hud| {
            let stale = session.drain_events().iter().any(Hud::is_stale_after);
            let hud = Hud::from_session(session);
            assert_eq!(stale, hud != *shown, "{:?} vs {:?}", hud, shown);
            if stale {
                *shown = hud;
            }
        };

        // Push a platform off the bottom so the next tick scores it
        session.world.platforms.platforms[0].pos.y = VIEW_HEIGHT + 50.0;
        tick(&mut session, &TickInput::default(), SIM_DT);
        step(&mut session, &mut shown);
        assert_eq!(shown.score_text, "score: 1");

        session.dispatch(TimerFired {
            id: TimerId::HazardSwap,
        });
        step(&mut session, &mut shown);

        session.dispatch(CollisionEvent {
            a: BodyId::Player,
            b: BodyId::Hazard,
        });
        step(&mut session, &mut shown);
        assert!(shown.overlay.is_some());

        tick(&mut session, &TickInput::default(), SIM_DT);
        step(&mut session, &mut shown);

        session.dispatch(InputEvent::new("x"));
        step(&mut session, &mut shown);
        assert!(shown.overlay.is_none());
        assert_eq!(shown.score_text, "score: 0");
    }
}
