//! Per-tick player intent resource.
//!
//! The simulation core never touches a keyboard. An external input
//! collaborator (windowing layer, replay driver, test, or the demo script)
//! writes the discrete intents for the upcoming step into [`InputState`];
//! the player-control and weapon systems consume them at the start of the
//! step.

use bevy_ecs::prelude::*;

/// Discrete player intents for one fixed simulation step.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Request to stop the loop; checked at the frame boundary only.
    pub quit: bool,
}

impl InputState {
    /// Clear all intents. The collaborator repopulates before each step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_direction(&self) -> bool {
        self.move_up || self.move_down || self.move_left || self.move_right
    }
}
