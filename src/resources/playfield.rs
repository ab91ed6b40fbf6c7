//! Playfield bounds resource.
//!
//! The visible simulation area. Enemies spawn just above it, bullets and
//! enemies that drift past the pruning margin are destroyed, and the player
//! hull is clamped inside it.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// How far outside the playfield an entity may drift before pruning.
/// Enemies spawn above the top edge, so the margin must cover spawn offsets.
pub const PRUNE_MARGIN: f32 = 128.0;

#[derive(Resource, Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when a point lies outside the playfield plus the pruning margin.
    pub fn is_outside_margin(&self, pos: Vec2) -> bool {
        pos.x < -PRUNE_MARGIN
            || pos.y < -PRUNE_MARGIN
            || pos.x > self.width + PRUNE_MARGIN
            || pos.y > self.height + PRUNE_MARGIN
    }

    /// Clamp a point to the playfield interior.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_is_not_pruned() {
        let field = Playfield::new(1280.0, 720.0);
        assert!(!field.is_outside_margin(Vec2::new(640.0, 360.0)));
        // Just above the top edge, inside the spawn margin.
        assert!(!field.is_outside_margin(Vec2::new(640.0, -100.0)));
    }

    #[test]
    fn test_outside_margin_is_pruned() {
        let field = Playfield::new(1280.0, 720.0);
        assert!(field.is_outside_margin(Vec2::new(640.0, -200.0)));
        assert!(field.is_outside_margin(Vec2::new(640.0, 900.0)));
        assert!(field.is_outside_margin(Vec2::new(-200.0, 360.0)));
    }

    #[test]
    fn test_clamp() {
        let field = Playfield::new(100.0, 100.0);
        assert_eq!(field.clamp(Vec2::new(-5.0, 50.0)), Vec2::new(0.0, 50.0));
        assert_eq!(field.clamp(Vec2::new(150.0, 150.0)), Vec2::new(100.0, 100.0));
    }
}
