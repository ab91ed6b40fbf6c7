//! High-level game setup and loop driving.
//!
//! [`setup_world`] builds the ECS world with all resources and observers,
//! [`build_schedule`] wires the per-step system order, and [`run_frame`]
//! converts real frame time into fixed simulation steps. The embedder (the
//! demo binary or a test) owns the outer loop and feeds intents through
//! [`InputState`](crate::resources::input::InputState).
//!
//! Per-step system order:
//! input controller, weapon, spawn, movement, collision detection (damage
//! observers fire on the triggered events), bounds pruning, cleanup. Dead
//! entities are despawned only in cleanup, so ids stay resolvable for the
//! whole step.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::faction::Faction;
use crate::components::health::Health;
use crate::components::kind::Kind;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::shipcontrolled::ShipControlled;
use crate::components::weapon::Weapon;
use crate::events::gamestate::{GameStateChangedEvent, is_quitting, observe_gamestate_change_event};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::playfield::Playfield;
use crate::resources::scheduler::SpawnScheduler;
use crate::resources::stepclock::StepClock;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::bounds::bounds_pruning;
use crate::systems::cleanup::cleanup_dead;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::movement::movement;
use crate::systems::playercontrol::player_control;
use crate::systems::spawn::spawn_enemies;
use crate::systems::time::update_world_time;
use crate::systems::weapon::weapon_fire;

/// Build the simulation world from a configuration and a spawn pattern.
///
/// Inserts every core resource, registers the state and damage observers,
/// spawns the player, and transitions the game state to `Playing`.
pub fn setup_world(config: GameConfig, scheduler: SpawnScheduler) -> World {
    let mut world = World::new();

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(StepClock::new(config.fixed_dt(), config.max_steps));
    world.insert_resource(Playfield::new(
        config.playfield_width,
        config.playfield_height,
    ));
    world.insert_resource(scheduler);
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(collision_observer));
    // Observers must be registered before anything can trigger events.
    world.flush();

    enter_play(&mut world);

    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Playing);
    }
    world.trigger(GameStateChangedEvent {});

    world
}

/// Spawn the player hull at the bottom center and initialize signals.
fn enter_play(world: &mut World) {
    let config = world.resource::<GameConfig>().clone();
    let playfield = *world.resource::<Playfield>();

    let player = world
        .spawn((
            Kind::Player,
            Faction::PlayerSide,
            ShipControlled::new(config.player_speed),
            Weapon::new(config.fire_cooldown()),
            MapPosition::new(
                playfield.width * 0.5,
                playfield.height - config.player_size,
            ),
            RigidBody::new(),
            BoxCollider::centered(config.player_size, config.player_size),
            Health::new(config.player_health),
            Facing::up(),
        ))
        .id();

    let mut signals = world.resource_mut::<WorldSignals>();
    signals.set_integer("score", 0);
    signals.set_integer("enemies_destroyed", 0);
    signals.set_entity("player", player);

    info!("Player {:?} spawned at bottom center", player);
}

/// Wire the per-step system schedule.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.add_systems(
        (
            player_control,
            weapon_fire,
            spawn_enemies,
            movement,
            collision_detector,
            bounds_pruning,
            cleanup_dead,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    schedule
}

/// Advance the simulation by one frame of real time.
///
/// Feeds `frame_time` into the fixed-step accumulator and runs the schedule
/// once per granted step. Returns the number of steps executed; zero means
/// the frame was too short to cross a step boundary and no state changed.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, frame_time: f32) -> u32 {
    let (steps, fixed_dt) = {
        let mut clock = world.resource_mut::<StepClock>();
        let fixed_dt = clock.fixed_dt;
        (clock.consume(frame_time), fixed_dt)
    };

    for _ in 0..steps {
        update_world_time(world, fixed_dt);
        schedule.run(world);
        world.clear_trackers();
    }

    steps
}

/// Frame-boundary quit check.
///
/// Quit requests raised mid-frame (input intent, the `quit_game` flag, a
/// state transition) take effect here, never between steps of a frame.
pub fn should_quit(world: &mut World) -> bool {
    if world.resource::<InputState>().quit {
        return true;
    }
    if world.resource::<WorldSignals>().has_flag("quit_game") {
        return true;
    }
    is_quitting(world.resource::<GameState>())
}

/// One entity's worth of render handoff data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntity {
    pub id: Entity,
    pub kind: Kind,
    pub position: Vec2,
    pub facing: Vec2,
}

/// Snapshot the live entities for an external renderer.
///
/// Read-only: taking a snapshot twice in a row yields identical results.
/// Entities marked dead but not yet cleaned up are excluded, and the output
/// is ordered by entity id so equal worlds produce equal snapshots.
pub fn render_snapshot(world: &mut World) -> Vec<RenderEntity> {
    let mut query = world.query::<(Entity, &Kind, &MapPosition, &Health, Option<&Facing>)>();
    let mut snapshot: Vec<RenderEntity> = query
        .iter(world)
        .filter(|(_, _, _, health, _)| health.alive())
        .map(|(id, kind, position, _, facing)| RenderEntity {
            id,
            kind: *kind,
            position: position.pos,
            facing: facing.map_or(Vec2::new(0.0, -1.0), |f| f.dir),
        })
        .collect();
    snapshot.sort_by_key(|entry| entry.id);
    snapshot
}
