//! Facing direction for the render handoff.
//!
//! The renderer receives a unit direction per entity. The movement system
//! refreshes it from velocity each step; an entity at rest keeps its last
//! facing.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    pub dir: Vec2,
}

impl Facing {
    /// Facing straight up the playfield (the player's default).
    pub fn up() -> Self {
        Self {
            dir: Vec2::new(0.0, -1.0),
        }
    }

    /// Facing straight down the playfield (the enemies' default).
    pub fn down() -> Self {
        Self {
            dir: Vec2::new(0.0, 1.0),
        }
    }

    /// Update facing from a velocity; zero velocity leaves it unchanged.
    pub fn update_from_velocity(&mut self, velocity: Vec2) {
        if velocity != Vec2::ZERO {
            self.dir = velocity.normalize();
        }
    }
}
