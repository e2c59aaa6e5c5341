//! Input/motion resolver: run direction, double jump, backdrop spin

use serde::{Deserialize, Serialize};

use super::state::{Facing, Player, World};
use crate::consts::*;

/// Held state of the cursor keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Double-jump state, derived from the player's jump counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    AirborneFirst,
    AirborneSecond,
}

impl JumpState {
    pub fn of(player: &Player) -> Self {
        match player.jumps {
            0 => JumpState::Grounded,
            1 => JumpState::AirborneFirst,
            _ => JumpState::AirborneSecond,
        }
    }
}

/// Apply one tick of input to the player and spin the backdrop
///
/// Grounded means the last physics step put the player's lower edge on a body.
pub fn resolve_motion(world: &mut World, cursors: &Cursors) {
    let player = &mut world.player;

    // Horizontal: left wins when both are held
    if cursors.left {
        player.vel.x = -RUN_SPEED;
        player.facing = Facing::Left;
    } else if cursors.right {
        player.vel.x = RUN_SPEED;
        player.facing = Facing::Right;
    } else {
        player.vel.x = 0.0;
    }

    // Touching ground always resets the counter
    let grounded = player.is_grounded();
    if grounded {
        player.jumps = 0;
    }

    if cursors.up {
        if grounded && player.jumps < MAX_JUMPS {
            player.vel.y = JUMP_VELOCITY;
            player.jumps = 1;
        } else if !grounded && player.jumps == 1 {
            player.vel.y = JUMP_VELOCITY;
            player.jumps = 2;
        }
    }

    world.background.rotate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::PlatformSpeed;

    fn world() -> World {
        World::new(3, PlatformSpeed::default())
    }

    #[test]
    fn test_no_horizontal_input_stops() {
        let mut w = world();
        w.player.vel.x = 123.0;
        resolve_motion(&mut w, &Cursors::default());
        assert_eq!(w.player.vel.x, 0.0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut w = world();
        let both = Cursors {
            left: true,
            right: true,
            up: false,
        };
        resolve_motion(&mut w, &both);
        assert_eq!(w.player.vel.x, -RUN_SPEED);
        assert_eq!(w.player.facing, Facing::Left);
    }

    #[test]
    fn test_right_faces_right() {
        let mut w = world();
        w.player.facing = Facing::Left;
        let right = Cursors {
            right: true,
            ..Default::default()
        };
        resolve_motion(&mut w, &right);
        assert_eq!(w.player.vel.x, RUN_SPEED);
        assert_eq!(w.player.facing, Facing::Right);
    }

    #[test]
    fn test_jump_chain() {
        let mut w = world();
        let up = Cursors {
            up: true,
            ..Default::default()
        };

        // Grounded -> first jump
        w.player.touching.down = true;
        resolve_motion(&mut w, &up);
        assert_eq!(w.player.jumps, 1);
        assert_eq!(w.player.vel.y, JUMP_VELOCITY);
        assert_eq!(JumpState::of(&w.player), JumpState::AirborneFirst);

        // Airborne -> second jump
        w.player.touching.down = false;
        w.player.vel.y = -100.0;
        resolve_motion(&mut w, &up);
        assert_eq!(w.player.jumps, 2);
        assert_eq!(w.player.vel.y, JUMP_VELOCITY);

        // No third jump
        w.player.vel.y = -50.0;
        resolve_motion(&mut w, &up);
        assert_eq!(w.player.jumps, 2);
        assert_eq!(w.player.vel.y, -50.0);
        assert_eq!(JumpState::of(&w.player), JumpState::AirborneSecond);
    }

    #[test]
    fn test_airborne_from_fall_cannot_jump() {
        // Walking off a ledge leaves jumps at 0; only a ground touch re-arms
        let mut w = world();
        w.player.vel.y = 200.0;
        let up = Cursors {
            up: true,
            ..Default::default()
        };
        resolve_motion(&mut w, &up);
        assert_eq!(w.player.jumps, 0);
        assert_eq!(w.player.vel.y, 200.0);
    }

    #[test]
    fn test_landing_resets() {
        let mut w = world();
        w.player.jumps = 2;
        w.player.touching.down = true;
        resolve_motion(&mut w, &Cursors::default());
        assert_eq!(w.player.jumps, 0);
        assert_eq!(JumpState::of(&w.player), JumpState::Grounded);
    }

    #[test]
    fn test_background_spins_every_tick() {
        let mut w = world();
        for _ in 0..100 {
            resolve_motion(&mut w, &Cursors::default());
        }
        assert!((w.background.angle - 100.0 * BACKGROUND_ROTATION_SPEED).abs() < 1e-4);
    }
}
