//! Wave pattern loading and spawn scheduling.
//!
//! A pattern is an immutable, time-ordered list of spawn entries. The file
//! format declares *waves* (a trigger time, an enemy class, a count, and a
//! formation); loading expands each wave into concrete per-enemy entries and
//! validates that trigger times never decrease. The loop never receives an
//! invalid pattern: every load error surfaces before the first tick.
//!
//! At runtime the [`SpawnScheduler`] owns a read cursor and accumulated
//! elapsed time. `advance(dt)` drains every entry whose trigger time has
//! been crossed, in order, exactly once. Once the cursor passes the last
//! entry the scheduler is terminal and `advance` becomes a no-op.
//!
//! # Pattern File Format
//!
//! ```json
//! {
//!   "waves": [
//!     { "time": 0.0, "enemy": "straight", "count": 5,
//!       "formation": { "line": {} }, "velocity": [0.0, 120.0] },
//!     { "time": 4.0, "count": 1, "formation": { "single": { "x": 640.0 } } }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Vertical distance above the playfield top where enemies materialize.
const SPAWN_Y_OFFSET: f32 = -100.0;
/// Default downward drift for enemies whose wave omits a velocity.
const DEFAULT_ENEMY_VELOCITY: [f32; 2] = [0.0, 120.0];

/// Closed set of enemy classes a wave can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyClass {
    /// Flies in a straight line along its initial velocity.
    #[default]
    Straight,
}

/// Formation describing where a wave's enemies are placed.
///
/// Positions are pure functions of the wave declaration and the playfield
/// width; expansion happens once at load time, never per frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formation {
    /// Evenly spaced horizontal line above the playfield.
    Line {
        #[serde(default)]
        spacing: Option<f32>,
    },
    /// Chevron with the tip extended toward the playfield.
    V {
        #[serde(default = "default_x_spacing")]
        x_spacing: f32,
        #[serde(default = "default_y_spacing")]
        y_spacing: f32,
        #[serde(default = "default_tip_depth")]
        tip_depth: f32,
    },
    /// Rows and columns centered on the playfield.
    Grid {
        #[serde(default)]
        cols: Option<u32>,
        #[serde(default = "default_row_spacing")]
        row_spacing: f32,
        #[serde(default = "default_col_spacing")]
        col_spacing: f32,
    },
    /// All enemies at one position (defaults to playfield center).
    Single {
        #[serde(default)]
        x: Option<f32>,
    },
}

fn default_x_spacing() -> f32 {
    120.0
}
fn default_y_spacing() -> f32 {
    40.0
}
fn default_tip_depth() -> f32 {
    120.0
}
fn default_row_spacing() -> f32 {
    80.0
}
fn default_col_spacing() -> f32 {
    100.0
}

impl Default for Formation {
    fn default() -> Self {
        Formation::Single { x: None }
    }
}

impl Formation {
    /// Expand into `count` spawn positions for the given playfield width.
    pub fn positions(&self, count: u32, width: f32) -> Vec<Vec2> {
        let count = count.max(1);
        match *self {
            Formation::Line { spacing } => {
                let spacing = spacing.unwrap_or(width / (count + 1) as f32);
                (0..count)
                    .map(|i| Vec2::new(spacing * (i + 1) as f32, SPAWN_Y_OFFSET))
                    .collect()
            }
            Formation::V {
                x_spacing,
                y_spacing,
                tip_depth,
            } => {
                let center_x = width * 0.5;
                (0..count)
                    .map(|i| {
                        let rel = i as f32 - (count - 1) as f32 * 0.5;
                        Vec2::new(
                            center_x + rel * x_spacing,
                            SPAWN_Y_OFFSET + tip_depth - rel.abs() * y_spacing,
                        )
                    })
                    .collect()
            }
            Formation::Grid {
                cols,
                row_spacing,
                col_spacing,
            } => {
                let cols = cols
                    .unwrap_or_else(|| (count as f32).sqrt().ceil() as u32)
                    .max(1);
                let grid_width = (cols - 1) as f32 * col_spacing;
                let start_x = (width - grid_width) * 0.5;
                (0..count)
                    .map(|i| {
                        let row = i / cols;
                        let col = i % cols;
                        Vec2::new(
                            start_x + col as f32 * col_spacing,
                            SPAWN_Y_OFFSET + row as f32 * row_spacing,
                        )
                    })
                    .collect()
            }
            Formation::Single { x } => {
                let x = x.unwrap_or(width * 0.5);
                vec![Vec2::new(x, SPAWN_Y_OFFSET); count as usize]
            }
        }
    }
}

/// One wave declaration as it appears in the pattern file.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveDecl {
    /// Trigger time in seconds from pattern start.
    pub time: f32,
    #[serde(default)]
    pub enemy: EnemyClass,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub formation: Formation,
    #[serde(default = "default_velocity")]
    pub velocity: [f32; 2],
}

fn default_count() -> u32 {
    1
}
fn default_velocity() -> [f32; 2] {
    DEFAULT_ENEMY_VELOCITY
}

#[derive(Debug, Clone, Deserialize)]
struct PatternFile {
    waves: Vec<WaveDecl>,
}

/// One concrete spawn entry: trigger time, enemy class, position, velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEntry {
    pub time: f32,
    pub enemy: EnemyClass,
    pub pos: Vec2,
    pub velocity: Vec2,
}

/// Entity-creation request emitted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub enemy: EnemyClass,
    pub pos: Vec2,
    pub velocity: Vec2,
}

/// Time-cursor over an immutable spawn pattern.
#[derive(Resource, Debug, Clone)]
pub struct SpawnScheduler {
    entries: Vec<PatternEntry>,
    cursor: usize,
    elapsed: f32,
}

impl SpawnScheduler {
    /// Build a scheduler from concrete entries.
    ///
    /// Rejects non-monotonic trigger times; an invalid pattern never
    /// reaches the loop.
    pub fn from_entries(entries: Vec<PatternEntry>) -> Result<Self, String> {
        for pair in entries.windows(2) {
            if pair[1].time < pair[0].time {
                return Err(format!(
                    "Pattern trigger times must be non-decreasing: {} follows {}",
                    pair[1].time, pair[0].time
                ));
            }
        }
        if let Some(first) = entries.first()
            && first.time < 0.0
        {
            return Err(format!("Pattern trigger time is negative: {}", first.time));
        }
        Ok(Self {
            entries,
            cursor: 0,
            elapsed: 0.0,
        })
    }

    /// Parse a pattern from JSON text and expand wave formations.
    pub fn from_json(text: &str, playfield_width: f32) -> Result<Self, String> {
        let file: PatternFile = serde_json::from_str(text)
            .map_err(|e| format!("Failed to parse pattern JSON: {}", e))?;

        let mut entries = Vec::new();
        for wave in &file.waves {
            let velocity = Vec2::from(wave.velocity);
            for pos in wave.formation.positions(wave.count, playfield_width) {
                entries.push(PatternEntry {
                    time: wave.time,
                    enemy: wave.enemy,
                    pos,
                    velocity,
                });
            }
        }

        let scheduler = Self::from_entries(entries)?;
        info!(
            "Loaded pattern: {} waves, {} spawn entries",
            file.waves.len(),
            scheduler.entries.len()
        );
        Ok(scheduler)
    }

    /// Load a pattern from a JSON file on disk.
    pub fn load_from_file(path: &Path, playfield_width: f32) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read pattern file {}: {}", path.display(), e))?;
        Self::from_json(&text, playfield_width)
    }

    /// Accumulate elapsed time and emit every entry whose trigger time has
    /// been crossed, in order. Each entry is emitted exactly once. Terminal
    /// schedulers return an empty list.
    pub fn advance(&mut self, dt: f32) -> Vec<SpawnRequest> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.elapsed += dt.max(0.0);

        let mut requests = Vec::new();
        while self.cursor < self.entries.len() && self.entries[self.cursor].time <= self.elapsed {
            let entry = self.entries[self.cursor];
            requests.push(SpawnRequest {
                enemy: entry.enemy,
                pos: entry.pos,
                velocity: entry.velocity,
            });
            self.cursor += 1;
        }
        requests
    }

    /// True once every entry has been emitted.
    pub fn is_terminal(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }
}
