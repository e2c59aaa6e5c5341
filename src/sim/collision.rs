//! Collision detection for axis-aligned boxes
//!
//! Arcade-style separation: the moving body is checked one axis at a time,
//! vertical first (gravity dominates), using the distance each body travelled
//! this step to tell a landing from a side hit.

use glam::Vec2;

use crate::consts::OVERLAP_BIAS;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Direction to push the moving body out of the other one
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    fn hit(normal: Vec2, penetration: f32) -> Self {
        Self {
            hit: true,
            normal,
            penetration,
        }
    }
}

/// Vertical overlap between a moving `body` and `other`
///
/// `body_dy` / `other_dy` are the distances each box moved this step. An
/// overlap deeper than that travel (plus a small bias) came from the side
/// and is left for the horizontal pass.
pub fn overlap_y(body: &Aabb, body_dy: f32, other: &Aabb, other_dy: f32) -> CollisionResult {
    if !body.intersects(other) {
        return CollisionResult::miss();
    }

    let max_overlap = body_dy.abs() + other_dy.abs() + OVERLAP_BIAS;
    let relative = body_dy - other_dy;

    let (normal, penetration) = if relative > 0.0 {
        // Falling onto the other box's top edge
        (Vec2::NEG_Y, body.max.y - other.min.y)
    } else if relative < 0.0 {
        // Rising into the other box's bottom edge
        (Vec2::Y, other.max.y - body.min.y)
    } else {
        return CollisionResult::miss();
    };

    if penetration > max_overlap {
        return CollisionResult::miss();
    }
    CollisionResult::hit(normal, penetration)
}

/// Horizontal overlap between a moving `body` and a static `other`
pub fn overlap_x(body: &Aabb, body_dx: f32, other: &Aabb) -> CollisionResult {
    if !body.intersects(other) {
        return CollisionResult::miss();
    }

    let max_overlap = body_dx.abs() + OVERLAP_BIAS;

    let (normal, penetration) = if body_dx > 0.0 {
        (Vec2::NEG_X, body.max.x - other.min.x)
    } else if body_dx < 0.0 {
        (Vec2::X, other.max.x - body.min.x)
    } else {
        return CollisionResult::miss();
    };

    if penetration > max_overlap {
        return CollisionResult::miss();
    }
    CollisionResult::hit(normal, penetration)
}
