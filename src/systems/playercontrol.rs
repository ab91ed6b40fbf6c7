//! Input-to-velocity controller for the player hull.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional velocity to entities with a
//! [`ShipControlled`](crate::components::shipcontrolled::ShipControlled)
//! component. Diagonal movement is normalized to maintain constant speed.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::rigidbody::RigidBody;
use crate::components::shipcontrolled::ShipControlled;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity from intents.
pub fn player_control(
    mut query: Query<(&ShipControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (ship, mut rigidbody) in query.iter_mut() {
        if !input_state.any_direction() {
            rigidbody.set_velocity(Vec2::ZERO);
            continue;
        }

        let mut direction = Vec2::ZERO;
        if input_state.move_up {
            direction.y -= 1.0;
        }
        if input_state.move_down {
            direction.y += 1.0;
        }
        if input_state.move_left {
            direction.x -= 1.0;
        }
        if input_state.move_right {
            direction.x += 1.0;
        }

        // Opposing intents cancel out to a standstill.
        rigidbody.set_velocity(if direction == Vec2::ZERO {
            Vec2::ZERO
        } else {
            direction.normalize() * ship.speed
        });
    }
}
