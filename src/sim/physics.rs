//! Thin arcade physics step
//!
//! Gravity on the player, constant velocity on platforms, a world-bounds
//! clamp, and separation of the player from immovable bodies. Every contact
//! is reported as a `CollisionEvent`; deciding what a contact means is the
//! session's job.

use glam::Vec2;

use super::collision::{Aabb, overlap_x, overlap_y};
use super::events::{BodyId, CollisionEvent};
use super::state::{Player, World};
use crate::consts::*;

/// Advance every body by `dt` and return the contacts found
///
/// The static floor is resolved before and after the platforms, so a
/// platform pressing down on a grounded player cannot push them through it.
/// The world-bounds clamp runs last.
pub fn step(world: &mut World, dt: f32) -> Vec<CollisionEvent> {
    let player = &mut world.player;
    player.touching.clear();
    player.blocked.clear();

    let prev = player.pos;
    player.vel.y += GRAVITY * dt;
    player.pos += player.vel * dt;

    let platform_vy = world.platforms.velocity_y;
    let platform_dy = platform_vy * dt;
    for platform in &mut world.platforms.platforms {
        platform.pos.y += platform_dy;
    }

    let travel = player.pos - prev;
    let floor = world.hazard.aabb();
    let mut contacts = Vec::new();

    let mut on_hazard = separate(player, travel, &floor, 0.0, 0.0);

    for platform in world.platforms.platforms.iter().filter(|p| p.collider) {
        if separate(player, travel, &platform.aabb(), platform_dy, platform_vy) {
            contacts.push(CollisionEvent {
                a: BodyId::Player,
                b: BodyId::Platform(platform.id),
            });
        }
    }

    // A platform may have pushed the player into the floor
    if player.aabb().intersects(&floor) {
        on_hazard |= separate(player, player.pos - prev, &floor, 0.0, 0.0);
    }
    if on_hazard {
        contacts.insert(
            0,
            CollisionEvent {
                a: BodyId::Player,
                b: BodyId::Hazard,
            },
        );
    }

    clamp_to_world(player);

    contacts
}

/// Keep the player inside the viewport, zeroing velocity on the blocked axis
fn clamp_to_world(player: &mut Player) {
    let half = player.size / 2.0;

    if player.pos.x - half.x < 0.0 {
        player.pos.x = half.x;
        player.vel.x = 0.0;
        player.blocked.left = true;
    } else if player.pos.x + half.x > VIEW_WIDTH {
        player.pos.x = VIEW_WIDTH - half.x;
        player.vel.x = 0.0;
        player.blocked.right = true;
    }

    if player.pos.y - half.y < 0.0 {
        player.pos.y = half.y;
        player.vel.y = 0.0;
        player.blocked.up = true;
    } else if player.pos.y + half.y > VIEW_HEIGHT {
        player.pos.y = VIEW_HEIGHT - half.y;
        player.vel.y = 0.0;
        player.blocked.down = true;
    }
}

/// Push the player out of an immovable body; true on contact
///
/// Vertical first; the horizontal pass only runs when there was no landing
/// or head bump. Zero bounce: the player takes the other body's velocity on
/// the separated axis. A downward push on a player already standing on
/// something is dropped; the contact is still reported.
fn separate(player: &mut Player, travel: Vec2, other: &Aabb, other_dy: f32, other_vy: f32) -> bool {
    let vertical = overlap_y(&player.aabb(), travel.y, other, other_dy);
    if vertical.hit {
        if vertical.normal.y > 0.0 && player.touching.down {
            // Pinned between this body and whatever it stands on
            player.touching.up = true;
            return true;
        }
        player.pos.y += vertical.normal.y * vertical.penetration;
        player.vel.y = other_vy;
        if vertical.normal.y < 0.0 {
            player.touching.down = true;
        } else {
            player.touching.up = true;
        }
        return true;
    }

    let horizontal = overlap_x(&player.aabb(), travel.x, other);
    if horizontal.hit {
        player.pos.x += horizontal.normal.x * horizontal.penetration;
        player.vel.x = 0.0;
        if horizontal.normal.x < 0.0 {
            player.touching.right = true;
        } else {
            player.touching.left = true;
        }
        return true;
    }

    false
}
