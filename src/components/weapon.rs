//! Fire-rate limited weapon state.
//!
//! The shoot timer charges toward the cooldown and is spent when a shot is
//! released, so holding fire yields a steady stream at exactly the configured
//! rate instead of one bullet per frame.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Weapon {
    /// Seconds between shots.
    pub cooldown: f32,
    /// Time charged toward the next shot, clamped to `cooldown`.
    pub timer: f32,
}

impl Weapon {
    /// Create a weapon ready to fire immediately.
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            timer: cooldown,
        }
    }

    /// Charge the shoot timer by `dt` seconds.
    pub fn charge(&mut self, dt: f32) {
        self.timer = (self.timer + dt).min(self.cooldown);
    }

    /// Try to release a shot. Returns true and spends the charge when ready.
    pub fn try_fire(&mut self) -> bool {
        if self.timer >= self.cooldown {
            self.timer = (self.timer - self.cooldown).max(0.0);
            true
        } else {
            false
        }
    }
}
