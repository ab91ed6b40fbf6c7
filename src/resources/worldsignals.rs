//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication: score and destroy counters, global flags
//! like `quit_game` or `player_dead`, and entities of interest such as the
//! player hull. Scorekeeping here is the hook for an external score/metrics
//! collaborator; the simulation itself only increments counters.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
    /// Map of entities of interest for the current game state.
    pub entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add to an integer signal, creating it at zero if absent.
    pub fn add_integer(&mut self, key: impl Into<String>, delta: i32) {
        *self.integers.entry(key.into()).or_insert(0) += delta;
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Get an entity by key.
    pub fn get_entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
    /// Set an entity by key.
    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }
    /// Remove an entity by key. Returns the removed entity if it existed.
    pub fn remove_entity(&mut self, key: &str) -> Option<Entity> {
        self.entities.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        let mut signals = WorldSignals::default();
        signals.set_integer("score", 100);
        assert_eq!(signals.get_integer("score"), Some(100));
        signals.add_integer("score", 50);
        assert_eq!(signals.get_integer("score"), Some(150));
        assert_eq!(signals.get_integer("missing"), None);
    }

    #[test]
    fn test_add_integer_creates_at_zero() {
        let mut signals = WorldSignals::default();
        signals.add_integer("enemies_destroyed", 1);
        assert_eq!(signals.get_integer("enemies_destroyed"), Some(1));
    }

    #[test]
    fn test_flags() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit_game"));
        signals.set_flag("quit_game");
        assert!(signals.has_flag("quit_game"));
        signals.clear_flag("quit_game");
        assert!(!signals.has_flag("quit_game"));
    }
}
