//! Side a bullet belongs to.
//!
//! The collision detector reports every bullet overlap allowed by the
//! kind-pair rules; the damage policy uses [`Faction`] to reject friendly
//! fire (a player bullet passing over the player, an enemy bullet crossing
//! an enemy).

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    PlayerSide,
    EnemySide,
}
