//! Movement integration system.
//!
//! Integrates `position += velocity * delta` for every kinematic entity,
//! refreshes facing from velocity, and keeps the player hull inside the
//! playfield. Runs once per fixed step after input and spawning.

use bevy_ecs::prelude::*;

use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::shipcontrolled::ShipControlled;
use crate::resources::playfield::Playfield;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(
        &mut MapPosition,
        &RigidBody,
        Option<&mut Facing>,
        Option<&ShipControlled>,
    )>,
    time: Res<WorldTime>,
    playfield: Res<Playfield>,
) {
    for (mut position, rigidbody, facing, ship) in query.iter_mut() {
        position.pos += rigidbody.velocity * time.delta;

        // The player never leaves the playfield; everything else may drift
        // out and is handled by bounds pruning.
        if ship.is_some() {
            position.pos = playfield.clamp(position.pos);
        }

        if let Some(mut facing) = facing {
            facing.update_from_velocity(rigidbody.velocity);
        }
    }
}
