//! Player weapon system.
//!
//! Charges the shoot timer each fixed step and, while the fire intent is
//! held and the cooldown has elapsed, spawns a player bullet traveling up
//! the playfield. Holding fire yields exactly the configured shots per
//! second, independent of frame rate.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::faction::Faction;
use crate::components::health::Health;
use crate::components::kind::Kind;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::weapon::Weapon;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Charge weapons and realize fire intents into bullet entities.
pub fn weapon_fire(
    mut query: Query<(&mut Weapon, &MapPosition, &Health)>,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    for (mut weapon, position, health) in query.iter_mut() {
        weapon.charge(time.delta);

        if !input_state.fire || !health.alive() {
            continue;
        }
        if !weapon.try_fire() {
            continue;
        }

        let velocity = Vec2::new(0.0, -config.bullet_speed);
        commands.spawn((
            Kind::Bullet,
            Faction::PlayerSide,
            MapPosition {
                pos: position.pos + Vec2::new(0.0, -config.player_size * 0.5),
            },
            RigidBody::with_velocity(velocity),
            BoxCollider::centered(config.bullet_size, config.bullet_size),
            Health::new(1),
            Facing::up(),
        ));
        debug!("Bullet fired at {:?}", position.pos);
    }
}
