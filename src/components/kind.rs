//! Entity kind tag driving the collision rules.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Closed set of simulated entity kinds.
///
/// The collision detector only tests pairs allowed by the kind rules;
/// same-kind pairs are never candidates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Player,
    Enemy,
    Bullet,
}

impl Kind {
    /// Lowercase label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Player => "player",
            Kind::Enemy => "enemy",
            Kind::Bullet => "bullet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Kind::Player.label(), "player");
        assert_eq!(Kind::Enemy.label(), "enemy");
        assert_eq!(Kind::Bullet.label(), "bullet");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Bullet).unwrap(), "\"bullet\"");
        let kind: Kind = serde_json::from_str("\"enemy\"").unwrap();
        assert_eq!(kind, Kind::Enemy);
    }
}
