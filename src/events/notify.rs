//! Fire-and-forget notifications for external collaborators.
//!
//! Audio, UI, and debug collaborators receive these from the game loop over
//! the [`NotifyBridge`](crate::resources::notify::NotifyBridge). The core
//! never waits on or observes the consumer: a dropped or slow collaborator
//! cannot stall a tick.

use bevy_ecs::prelude::Entity;

/// One-way event notification emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// A wave fired and this many enemies were created.
    WaveSpawned { count: u32 },
    /// An enemy was destroyed by a bullet or collision.
    EnemyDestroyed { entity: Entity },
    /// The player took a hit and has this many hit points left.
    PlayerHit { remaining: u32 },
    /// The player is out of hit points.
    PlayerDied,
    /// Pattern exhausted and no enemies remain.
    StageComplete,
    /// Request the collaborator thread to exit.
    Shutdown,
}
