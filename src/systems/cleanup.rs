//! End-of-step cleanup.
//!
//! Physically removes entities that were marked dead during this step.
//! Running last keeps ids stable for the whole tick: any system or
//! observer holding an id from this tick either finds the entity (possibly
//! dead) or gets a recoverable "not found", never a recycled id.
//!
//! Also watches for stage completion: once the spawn pattern is exhausted
//! and no enemies remain, the `stage_complete` flag is raised and
//! collaborators are notified exactly once.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::health::Health;
use crate::components::kind::Kind;
use crate::events::notify::Notification;
use crate::resources::notify::NotifyBridge;
use crate::resources::scheduler::SpawnScheduler;
use crate::resources::worldsignals::WorldSignals;

/// Despawn dead entities and detect stage completion.
pub fn cleanup_dead(
    query: Query<(Entity, &Kind, &Health)>,
    scheduler: Res<SpawnScheduler>,
    mut signals: ResMut<WorldSignals>,
    bridge: Option<Res<NotifyBridge>>,
    mut commands: Commands,
) {
    let mut removed = 0;
    let mut enemies_alive = 0;

    for (entity, kind, health) in query.iter() {
        if health.alive() {
            if *kind == Kind::Enemy {
                enemies_alive += 1;
            }
            continue;
        }
        // A despawned entity must not linger in the signal map as a stale id.
        if signals.get_entity("player") == Some(&entity) {
            signals.remove_entity("player");
        }
        commands.entity(entity).try_despawn();
        removed += 1;
    }

    if removed > 0 {
        debug!("Cleaned up {} dead entities", removed);
    }

    if scheduler.is_terminal() && enemies_alive == 0 && !signals.has_flag("stage_complete") {
        signals.set_flag("stage_complete");
        if let Some(bridge) = bridge {
            bridge.send(Notification::StageComplete);
        }
    }
}
