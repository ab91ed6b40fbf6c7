//! Game state transition event and observer.
//!
//! Systems request a transition through
//! [`NextGameState`](crate::resources::gamestate::NextGameState); the
//! observer applies it, runs the enter hook for the new state, and clears
//! the request.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};

/// Fired when a pending game state change should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Apply a pending state transition.
///
/// Reads [`NextGameState`]; when a transition is pending, updates
/// [`GameState`] and resets the request. Enter hooks run from
/// [`game`](crate::game) via the registered systems.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut game_state: ResMut<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if let NextGameStates::Pending(new_state) = next_state.get() {
        info!("Game state: {:?} -> {:?}", game_state.get(), new_state);
        game_state.set(new_state.clone());
        next_state.reset();
    }
}

/// Convenience check used by tests and the loop driver.
pub fn is_quitting(state: &GameState) -> bool {
    matches!(state.get(), GameStates::Quitting)
}
