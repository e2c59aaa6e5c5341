//! Property tests for the motion, score, highscore and world-bounds rules

use proptest::prelude::*;

use skyhop::consts::{MAX_JUMPS, PLATFORM_SIZE, SIM_DT, VIEW_HEIGHT, VIEW_WIDTH};
use skyhop::sim::{
    BodyId, CollisionEvent, Cursors, InputEvent, PlatformSpeed, Session, TickInput, TimerFired,
    TimerId, tick,
};

fn script() -> impl Strategy<Value = Vec<Cursors>> {
    prop::collection::vec(
        any::<(bool, bool, bool)>().prop_map(|(left, right, up)| Cursors { left, right, up }),
        1..400,
    )
}

fn input(cursors: Cursors) -> TickInput {
    TickInput {
        cursors,
        ..Default::default()
    }
}

fn kill(session: &mut Session) {
    session.dispatch(TimerFired {
        id: TimerId::HazardSwap,
    });
    session.dispatch(CollisionEvent {
        a: BodyId::Player,
        b: BodyId::Hazard,
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_horizontal_input_no_horizontal_velocity(seed in any::<u64>(), script in script()) {
        let mut session = Session::new(seed, PlatformSpeed::default());
        for cursors in script {
            tick(&mut session, &input(cursors), SIM_DT);
            if !cursors.left && !cursors.right {
                prop_assert_eq!(session.world.player.vel.x, 0.0);
            }
        }
    }

    #[test]
    fn prop_jump_counter_bounded_and_reset(seed in any::<u64>(), script in script()) {
        let mut session = Session::new(seed, PlatformSpeed::default());
        for cursors in script {
            let grounded = session.world.player.is_grounded();
            tick(&mut session, &input(cursors), SIM_DT);

            let jumps = session.world.player.jumps;
            prop_assert!(jumps <= MAX_JUMPS);
            if grounded && !cursors.up {
                prop_assert_eq!(jumps, 0);
            }
            if grounded && cursors.up {
                prop_assert_eq!(jumps, 1);
            }
        }
    }

    #[test]
    fn prop_score_monotonic_and_frozen_after_game_over(
        seed in any::<u64>(),
        script in script(),
        die_at in 0usize..400,
    ) {
        let mut session = Session::new(seed, PlatformSpeed::default());
        let mut last = session.world.score;
        for (i, cursors) in script.into_iter().enumerate() {
            if i == die_at {
                kill(&mut session);
            }
            let over = session.world.is_game_over();
            tick(&mut session, &input(cursors), SIM_DT);

            prop_assert!(session.world.score >= last);
            if over {
                prop_assert_eq!(session.world.score, last);
            }
            last = session.world.score;
        }
    }

    #[test]
    fn prop_highscore_is_running_max(scores in prop::collection::vec(0u64..1_000, 1..20)) {
        let mut session = Session::new(7, PlatformSpeed::default());
        let mut best = 0;
        for score in scores {
            session.world.score = score;
            kill(&mut session);
            best = best.max(score);
            prop_assert!(session.world.is_game_over());
            prop_assert_eq!(session.highscore().best(), best);

            session.dispatch(InputEvent::new("r"));
            prop_assert!(!session.world.is_game_over());
            prop_assert_eq!(session.world.score, 0);
        }
    }

    #[test]
    fn prop_same_seed_same_run(seed in any::<u64>(), script in script()) {
        let mut a = Session::new(seed, PlatformSpeed::default());
        let mut b = Session::new(seed, PlatformSpeed::default());
        for cursors in script {
            tick(&mut a, &input(cursors), SIM_DT);
            tick(&mut b, &input(cursors), SIM_DT);
        }
        prop_assert_eq!(&a.world, &b.world);
        prop_assert_eq!(a.events(), b.events());
    }

    #[test]
    fn prop_player_stays_in_world(
        seed in any::<u64>(),
        script in script(),
        offset in -70.0f32..70.0,
        gap in 0.0f32..40.0,
    ) {
        let mut session = Session::new(seed, PlatformSpeed::default());
        // Drop one platform onto the player's head
        let player = &session.world.player;
        let x = player.pos.x + offset;
        let y = player.aabb().top() - gap - PLATFORM_SIZE.y / 2.0;
        session.world.platforms.platforms[0].pos = glam::Vec2::new(x, y);

        for cursors in script {
            tick(&mut session, &input(cursors), SIM_DT);
            let aabb = session.world.player.aabb();
            prop_assert!(aabb.top() >= 0.0 && aabb.bottom() <= VIEW_HEIGHT);
            prop_assert!(aabb.min.x >= 0.0 && aabb.max.x <= VIEW_WIDTH);
        }
    }
}
