//! Ordered-position queries over the platform collection
//!
//! The spawner only needs "where is the highest platform right now". With a
//! batch of eight a linear scan is plenty; larger collections can plug in a
//! sorted structure behind the same trait.

use super::state::Platform;

/// Answers topmost-platform queries (smallest y, since y grows downward)
pub trait TopIndex {
    /// Smallest y among `platforms`, or `None` when empty
    fn topmost(&self, platforms: &[Platform]) -> Option<f32>;

    /// Topmost y, never lower on screen than `floor`
    fn top_or(&self, platforms: &[Platform], floor: f32) -> f32 {
        self.topmost(platforms).map_or(floor, |top| top.min(floor))
    }
}

/// O(n) scan over every live platform
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl TopIndex for LinearScan {
    fn topmost(&self, platforms: &[Platform]) -> Option<f32> {
        platforms.iter().map(|p| p.pos.y).reduce(f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn platform(id: u32, y: f32) -> Platform {
        Platform::new(id, Vec2::new(0.0, y))
    }

    #[test]
    fn test_empty_uses_floor() {
        assert_eq!(LinearScan.topmost(&[]), None);
        assert_eq!(LinearScan.top_or(&[], 600.0), 600.0);
    }

    #[test]
    fn test_finds_smallest_y() {
        let platforms = [platform(1, 400.0), platform(2, -200.0), platform(3, 100.0)];
        assert_eq!(LinearScan.topmost(&platforms), Some(-200.0));
    }

    #[test]
    fn test_floor_caps_low_platforms() {
        // A platform that slid below the floor must not push new ones down
        let platforms = [platform(1, 650.0)];
        assert_eq!(LinearScan.top_or(&platforms, 600.0), 600.0);
    }
}
