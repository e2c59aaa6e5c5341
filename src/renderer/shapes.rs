//! Shape generation for 2D primitives
//!
//! All positions are logical viewport pixels (800×600, y down); the pipeline
//! maps them to NDC.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::vertex::{Vertex, colors, tint};
use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::sim::{Background, Facing, Hazard, HazardKind, Platform, Player, World};

/// Star field is fixed; only its rotation changes
const STAR_SEED: u64 = 0x5EED_57A2;
const STAR_COUNT: usize = 96;
const STAR_SIZE: f32 = 2.0;
/// Spike teeth across the hazard width
const SPIKE_COUNT: usize = 32;

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    rotated_rect(center, size, 0.0, color)
}

/// Filled rectangle rotated about its center (radians, clockwise on screen)
pub fn rotated_rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let rot = Vec2::from_angle(angle);
    let corner = |x: f32, y: f32| center + rot.rotate(Vec2::new(x, y));

    let tl = corner(-half.x, -half.y);
    let tr = corner(half.x, -half.y);
    let br = corner(half.x, half.y);
    let bl = corner(-half.x, half.y);

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(bl.x, bl.y, color),
    ]
}

/// Row of upward teeth filling a box
pub fn spikes(center: Vec2, size: Vec2, teeth: usize, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(teeth * 3);
    let left = center.x - size.x / 2.0;
    let top = center.y - size.y / 2.0;
    let bottom = center.y + size.y / 2.0;
    let w = size.x / teeth as f32;

    for i in 0..teeth {
        let x0 = left + i as f32 * w;
        vertices.push(Vertex::new(x0, bottom, color));
        vertices.push(Vertex::new(x0 + w / 2.0, top, color));
        vertices.push(Vertex::new(x0 + w, bottom, color));
    }

    vertices
}

/// Space backdrop: a dark quad plus a star field, both rotated
pub fn background(bg: &Background) -> Vec<Vertex> {
    let center = Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    let size = Vec2::new(VIEW_WIDTH, VIEW_HEIGHT) * bg.scale;
    let angle = bg.angle.to_radians();

    let mut vertices = rotated_rect(center, size, angle, colors::SPACE);
    vertices.reserve(STAR_COUNT * 6);

    let rot = Vec2::from_angle(angle);
    let mut rng = Pcg32::seed_from_u64(STAR_SEED);
    for _ in 0..STAR_COUNT {
        let local = Vec2::new(
            rng.random_range(-size.x / 2.0..size.x / 2.0),
            rng.random_range(-size.y / 2.0..size.y / 2.0),
        );
        let pos = center + rot.rotate(local);
        vertices.extend(rotated_rect(pos, Vec2::splat(STAR_SIZE), angle, colors::STAR));
    }

    vertices
}

pub fn platform(platform: &Platform) -> Vec<Vertex> {
    let mut vertices = rect(platform.pos, platform.size, colors::PLATFORM);
    let grass = Vec2::new(platform.size.x, platform.size.y / 4.0);
    let grass_center = Vec2::new(platform.pos.x, platform.pos.y - (platform.size.y - grass.y) / 2.0);
    vertices.extend(rect(grass_center, grass, colors::PLATFORM_TOP));
    vertices
}

pub fn hazard(hazard: &Hazard) -> Vec<Vertex> {
    match hazard.kind {
        HazardKind::Base => rect(hazard.pos, hazard.size, colors::BASE_PLATFORM),
        HazardKind::Spikes => spikes(hazard.pos, hazard.size, SPIKE_COUNT, colors::SPIKES),
    }
}

/// Player body with an eye on the facing side; red-tinted after game over
pub fn player(player: &Player) -> Vec<Vertex> {
    let (body, eye) = if player.tinted {
        (
            tint(colors::PLAYER, colors::TINT_RED),
            tint(colors::PLAYER_EYE, colors::TINT_RED),
        )
    } else {
        (colors::PLAYER, colors::PLAYER_EYE)
    };

    let dir = match player.facing {
        Facing::Left => -1.0,
        Facing::Right => 1.0,
    };
    let eye_pos = player.pos + Vec2::new(dir * player.size.x * 0.25, -player.size.y * 0.25);

    let mut vertices = rect(player.pos, player.size, body);
    vertices.extend(rect(eye_pos, Vec2::splat(player.size.x * 0.15), eye));
    vertices
}

/// Whole scene, back to front
pub fn scene_vertices(world: &World) -> Vec<Vertex> {
    let mut vertices = background(&world.background);
    for p in world.platforms.iter() {
        vertices.extend(platform(p));
    }
    vertices.extend(hazard(&world.hazard));
    vertices.extend(player(&world.player));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PlatformSpeed, Session};

    #[test]
    fn test_rect_bounds() {
        let v = rect(Vec2::new(50.0, 20.0), Vec2::new(100.0, 32.0), colors::PLATFORM);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 0.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 100.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 36.0);
    }

    #[test]
    fn test_rotated_rect_keeps_center() {
        let center = Vec2::new(400.0, 300.0);
        let v = rotated_rect(center, Vec2::new(10.0, 4.0), 1.0, colors::STAR);
        let sum = v[..3]
            .iter()
            .chain(&v[5..])
            .fold(Vec2::ZERO, |acc, v| acc + Vec2::from(v.position));
        assert!((sum / 4.0 - center).length() < 1e-3);
    }

    #[test]
    fn test_spikes_span_hazard() {
        let h = Hazard {
            kind: HazardKind::Spikes,
            ..Hazard::base()
        };
        let v = hazard(&h);
        assert_eq!(v.len(), SPIKE_COUNT * 3);
        assert_eq!(v[0].position, [0.0, 603.0]);
        assert_eq!(v.last().unwrap().position, [800.0, 603.0]);
    }

    #[test]
    fn test_background_is_stable() {
        let bg = Background::default();
        assert_eq!(background(&bg), background(&bg));
        assert_eq!(background(&bg).len(), 6 + STAR_COUNT * 6);
    }

    #[test]
    fn test_tinted_player() {
        let mut session = Session::new(1, PlatformSpeed::default());
        session.world.player.tinted = true;
        let v = player(&session.world.player);
        assert!(v.iter().all(|v| v.color[1] == 0.0 && v.color[2] == 0.0));
    }

    #[test]
    fn test_facing_moves_eye() {
        let session = Session::new(1, PlatformSpeed::default());
        let mut p = session.world.player.clone();
        let right_eye = player(&p)[6].position[0];
        p.facing = Facing::Left;
        let left_eye = player(&p)[6].position[0];
        assert!(left_eye < right_eye);
    }

    #[test]
    fn test_scene_counts() {
        let session = Session::new(1, PlatformSpeed::default());
        let v = scene_vertices(&session.world);
        let expected = (6 + STAR_COUNT * 6) + 8 * 12 + 6 + 12;
        assert_eq!(v.len(), expected);
    }
}
