//! Marker for the input-driven player hull.

use bevy_ecs::prelude::Component;

/// Entities with this component have their velocity driven by the shared
/// [`InputState`](crate::resources::input::InputState) each fixed step.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShipControlled {
    /// Movement speed in world units per second.
    pub speed: f32,
}

impl ShipControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
