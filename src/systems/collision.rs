//! Collision detection and the default damage policy.
//!
//! [`collision_detector`] runs the pairwise broad/narrow phase over the
//! live entities each fixed step and triggers one
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) per
//! overlapping pair allowed by the kind rules. The event *set* is fully
//! determined by the entity snapshot: classification canonicalizes the
//! pair order, so traversal order cannot change what is reported.
//!
//! [`collision_observer`] is the default damage policy consuming those
//! events within the same tick: one point of damage per event, friendly
//! fire rejected via [`Faction`], deaths marked on
//! [`Health`](crate::components::health::Health) and despawned later by the
//! cleanup phase. Replace the observer to change the rules; the detector
//! stays policy-free.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::faction::Faction;
use crate::components::health::Health;
use crate::components::kind::Kind;
use crate::components::mapposition::MapPosition;
use crate::events::collision::{CollisionClass, CollisionEvent, classify};
use crate::events::notify::Notification;
use crate::resources::notify::NotifyBridge;
use crate::resources::worldsignals::WorldSignals;

/// Score awarded per destroyed enemy.
const ENEMY_SCORE: i32 = 100;

/// Detect overlapping pairs and trigger collision events.
///
/// Broad phase: the kind-pair rule table in
/// [`classify`](crate::events::collision::classify); same-kind pairs are
/// never tested. Narrow phase: AABB overlap. O(n²) over a screen's worth of
/// entities; dead entities are skipped. Every overlap is reported, so a
/// bullet crossing three enemies yields three events, and the damage policy
/// decides what sticks.
pub fn collision_detector(
    query: Query<(Entity, &Kind, &MapPosition, &BoxCollider, &Health)>,
    mut commands: Commands,
) {
    let mut events: Vec<CollisionEvent> = Vec::new();

    for [
        (entity_a, kind_a, position_a, collider_a, health_a),
        (entity_b, kind_b, position_b, collider_b, health_b),
    ] in query.iter_combinations()
    {
        if !health_a.alive() || !health_b.alive() {
            continue;
        }
        let Some((class, swap)) = classify(*kind_a, *kind_b) else {
            continue;
        };
        if !collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            continue;
        }
        let (a, b) = if swap {
            (entity_b, entity_a)
        } else {
            (entity_a, entity_b)
        };
        events.push(CollisionEvent { a, b, class });
    }

    for event in events {
        commands.trigger(event);
    }
}

/// Default damage policy: one damage per event, no friendly fire.
///
/// - BulletVsEnemy: bullet is spent, enemy takes 1 damage; a kill scores
///   and notifies collaborators.
/// - BulletVsPlayer: bullet is spent, player takes 1 damage; death raises
///   the `player_dead` flag.
/// - PlayerVsEnemy: ramming, both take 1 damage.
///
/// Stale ids (entity already removed) resolve to "not found" and the event
/// is skipped; an entity marked dead earlier in this tick absorbs no
/// further damage.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut healths: Query<&mut Health>,
    factions: Query<&Faction>,
    mut signals: ResMut<WorldSignals>,
    bridge: Option<Res<NotifyBridge>>,
) {
    let event = trigger.event();
    debug!("Collision: {:?}", event);

    let notify = |notification: Notification| {
        if let Some(bridge) = &bridge {
            bridge.send(notification);
        }
    };

    match event.class {
        CollisionClass::BulletVsEnemy => {
            // A bullet from the enemy side passing over an enemy is friendly fire.
            if matches!(factions.get(event.a), Ok(&Faction::EnemySide)) {
                return;
            }
            // Stale or already-dead participants make the event a no-op.
            let (Ok(bullet), Ok(enemy)) = (healths.get(event.a), healths.get(event.b)) else {
                return;
            };
            if !bullet.alive() || !enemy.alive() {
                return;
            }
            if let Ok(mut bullet) = healths.get_mut(event.a) {
                bullet.kill();
            }
            if let Ok(mut enemy) = healths.get_mut(event.b)
                && enemy.damage(1)
            {
                signals.add_integer("score", ENEMY_SCORE);
                signals.add_integer("enemies_destroyed", 1);
                notify(Notification::EnemyDestroyed { entity: event.b });
            }
        }
        CollisionClass::BulletVsPlayer => {
            if matches!(factions.get(event.a), Ok(&Faction::PlayerSide)) {
                return;
            }
            let (Ok(bullet), Ok(player)) = (healths.get(event.a), healths.get(event.b)) else {
                return;
            };
            if !bullet.alive() || !player.alive() {
                return;
            }
            if let Ok(mut bullet) = healths.get_mut(event.a) {
                bullet.kill();
            }
            if let Ok(mut player) = healths.get_mut(event.b) {
                if player.damage(1) {
                    signals.set_flag("player_dead");
                    notify(Notification::PlayerDied);
                } else {
                    notify(Notification::PlayerHit {
                        remaining: player.hp(),
                    });
                }
            }
        }
        CollisionClass::PlayerVsEnemy => {
            let (Ok(player), Ok(enemy)) = (healths.get(event.a), healths.get(event.b)) else {
                return;
            };
            if !player.alive() || !enemy.alive() {
                return;
            }
            if let Ok(mut enemy) = healths.get_mut(event.b)
                && enemy.damage(1)
            {
                signals.add_integer("score", ENEMY_SCORE);
                signals.add_integer("enemies_destroyed", 1);
                notify(Notification::EnemyDestroyed { entity: event.b });
            }
            if let Ok(mut player) = healths.get_mut(event.a) {
                if player.damage(1) {
                    signals.set_flag("player_dead");
                    notify(Notification::PlayerDied);
                } else {
                    notify(Notification::PlayerHit {
                        remaining: player.hp(),
                    });
                }
            }
        }
    }
}
