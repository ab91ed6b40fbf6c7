//! Hit-point component and deferred-death bookkeeping.
//!
//! Damage resolution marks entities dead by driving `hp` to zero; the actual
//! despawn happens later in the step's cleanup phase. This keeps entity ids
//! valid for any collision events from the same tick that still reference
//! them: a lookup of a dead-but-not-yet-removed entity succeeds, a lookup of
//! a removed entity resolves to "not found", and an id is never recycled
//! while an event from the current tick could still name it.

use bevy_ecs::prelude::Component;

/// Integer hit points, never below zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    hp: u32,
}

impl Health {
    /// Create a Health pool with the given starting hit points.
    pub fn new(hp: u32) -> Self {
        Self { hp }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// An entity is alive while it has hit points left.
    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, saturating at zero. Returns true if this hit killed.
    pub fn damage(&mut self, amount: u32) -> bool {
        let was_alive = self.alive();
        self.hp = self.hp.saturating_sub(amount);
        was_alive && !self.alive()
    }

    /// Drop straight to zero hit points.
    pub fn kill(&mut self) {
        self.hp = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_alive() {
        let h = Health::new(3);
        assert!(h.alive());
        assert_eq!(h.hp(), 3);
    }

    #[test]
    fn test_damage_reduces_hp() {
        let mut h = Health::new(3);
        assert!(!h.damage(1));
        assert_eq!(h.hp(), 2);
        assert!(h.alive());
    }

    #[test]
    fn test_damage_reports_kill_exactly_once() {
        let mut h = Health::new(2);
        assert!(!h.damage(1));
        assert!(h.damage(1));
        // Already dead: further damage is not a new kill.
        assert!(!h.damage(1));
    }

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut h = Health::new(1);
        h.damage(100);
        assert_eq!(h.hp(), 0);
        assert!(!h.alive());
    }

    #[test]
    fn test_kill() {
        let mut h = Health::new(10);
        h.kill();
        assert!(!h.alive());
    }
}
