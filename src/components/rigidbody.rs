//! Kinematic body component.
//!
//! Stores the velocity consumed by the movement system each fixed step.
//! Velocity is set by the player controller, by spawn requests, or directly
//! by game logic; the movement system never mutates it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    /// Create a RigidBody with an initial velocity.
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self { velocity }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Get the current velocity.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
