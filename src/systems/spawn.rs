//! Spawn realization system.
//!
//! Advances the [`SpawnScheduler`](crate::resources::scheduler::SpawnScheduler)
//! by the step delta and realizes every emitted request into a full enemy
//! entity. Only this system creates enemies; the scheduler itself never
//! touches the world.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::health::Health;
use crate::components::kind::Kind;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::notify::Notification;
use crate::resources::gameconfig::GameConfig;
use crate::resources::notify::NotifyBridge;
use crate::resources::scheduler::SpawnScheduler;
use crate::resources::worldtime::WorldTime;

/// Drain due pattern entries and spawn the corresponding enemies.
pub fn spawn_enemies(
    mut scheduler: ResMut<SpawnScheduler>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    bridge: Option<Res<NotifyBridge>>,
    mut commands: Commands,
) {
    let requests = scheduler.advance(time.delta);
    if requests.is_empty() {
        return;
    }

    for request in &requests {
        commands.spawn((
            Kind::Enemy,
            MapPosition { pos: request.pos },
            RigidBody::with_velocity(request.velocity),
            BoxCollider::centered(config.enemy_size, config.enemy_size),
            Health::new(config.enemy_health),
            Facing::down(),
        ));
    }

    debug!("Spawned {} enemies from pattern", requests.len());
    if let Some(bridge) = bridge {
        bridge.send(Notification::WaveSpawned {
            count: requests.len() as u32,
        });
    }
}
