//! Playfield bounds pruning.
//!
//! Bullets and enemies that drift past the pruning margin are removed; the
//! player is clamped by the movement system and never pruned. Runs after
//! damage resolution so a despawn here cannot invalidate an id an event
//! from this tick still references.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::kind::Kind;
use crate::components::mapposition::MapPosition;
use crate::resources::playfield::Playfield;

pub fn bounds_pruning(
    query: Query<(Entity, &Kind, &MapPosition)>,
    playfield: Res<Playfield>,
    mut commands: Commands,
) {
    for (entity, kind, position) in query.iter() {
        if *kind == Kind::Player {
            continue;
        }
        if playfield.is_outside_margin(position.pos) {
            debug!("Pruning offscreen {} {:?}", kind.label(), entity);
            commands.entity(entity).try_despawn();
        }
    }
}
