//! Collision event types.
//!
//! The collision detector emits one [`CollisionEvent`] per overlapping pair
//! allowed by the kind-pair rules. Events are ephemeral: produced and
//! consumed by observers within the tick, never persisted. The default
//! damage policy lives in
//! [`collision_observer`](crate::systems::collision::collision_observer);
//! embedders wanting different rules (damage amounts, friendly fire)
//! register their own observer instead.

use bevy_ecs::prelude::*;

use crate::components::kind::Kind;

/// Which rule produced a collision event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionClass {
    BulletVsEnemy,
    BulletVsPlayer,
    PlayerVsEnemy,
}

/// Event fired when two entities with compatible kinds and colliders overlap.
///
/// `a` and `b` are ordered canonically for the class: the bullet first for
/// bullet classes, the player first for [`CollisionClass::PlayerVsEnemy`].
/// The same pair therefore produces an identical event regardless of
/// traversal order.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub class: CollisionClass,
}

/// Classify a kind pair under the collision rules.
///
/// Only Bullet-vs-Enemy, Bullet-vs-Player, and Enemy-vs-Player pairs are
/// ever tested; same-kind pairs and anything else return `None`. The second
/// return value is true when the pair must be swapped to reach canonical
/// order.
pub fn classify(kind_a: Kind, kind_b: Kind) -> Option<(CollisionClass, bool)> {
    match (kind_a, kind_b) {
        (Kind::Bullet, Kind::Enemy) => Some((CollisionClass::BulletVsEnemy, false)),
        (Kind::Enemy, Kind::Bullet) => Some((CollisionClass::BulletVsEnemy, true)),
        (Kind::Bullet, Kind::Player) => Some((CollisionClass::BulletVsPlayer, false)),
        (Kind::Player, Kind::Bullet) => Some((CollisionClass::BulletVsPlayer, true)),
        (Kind::Player, Kind::Enemy) => Some((CollisionClass::PlayerVsEnemy, false)),
        (Kind::Enemy, Kind::Player) => Some((CollisionClass::PlayerVsEnemy, true)),
        _ => None,
    }
}
