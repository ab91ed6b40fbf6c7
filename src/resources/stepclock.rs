//! Fixed-timestep accumulator.
//!
//! Real frame time is fed into the accumulator; the loop then executes an
//! integer number of fixed-size simulation steps. A hard bound on catch-up
//! steps per frame prevents the stall spiral: when the bound is hit the
//! remaining accumulated time is discarded and simulation time silently
//! falls behind wall-clock time. That is a defined degradation, not an
//! error.

use bevy_ecs::prelude::Resource;
use log::debug;

pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;
pub const DEFAULT_MAX_STEPS: u32 = 5;

#[derive(Resource, Debug, Clone, Copy)]
pub struct StepClock {
    /// Duration of one simulation step in seconds.
    pub fixed_dt: f32,
    /// Hard bound on steps executed for a single frame.
    pub max_steps: u32,
    accumulator: f32,
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DT, DEFAULT_MAX_STEPS)
    }
}

impl StepClock {
    pub fn new(fixed_dt: f32, max_steps: u32) -> Self {
        Self {
            fixed_dt,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Feed one frame of real elapsed time and return how many fixed steps
    /// to run. Leftover time past the step bound is discarded.
    pub fn consume(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_steps {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        if self.accumulator >= self.fixed_dt {
            debug!(
                "Step cap reached ({} steps); discarding {:.4}s of accumulated time",
                steps, self.accumulator
            );
            self.accumulator = 0.0;
        }

        steps
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}
