use crate::api::config::SimConfig;
use crate::core::motion::check_dt;

/// Fixed timestep accumulator.
/// Turns variable frame time into a whole number of simulation ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Most ticks a single frame may produce; backlog beyond that is dropped.
    max_steps: u32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, Self::DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        assert!(dt > 0.0, "fixed timestep must be positive, got {dt}");
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::with_max_steps(config.fixed_dt, config.max_steps_per_frame)
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// A zero frame time adds nothing; a negative one panics.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        check_dt(frame_dt);
        let budget = self.dt * self.max_steps as f32;
        self.accumulator = (self.accumulator + frame_dt).min(budget);
        let steps = ((self.accumulator / self.dt) as u32).min(self.max_steps);
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 64.0);
        assert_eq!(ts.accumulate(1.0 / 64.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);

        let mut ts = FixedTimestep::with_max_steps(1.0 / 64.0, 3);
        assert_eq!(ts.accumulate(0.5), 3);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn zero_frame_time_runs_nothing() {
        let mut ts = FixedTimestep::from_config(&SimConfig::default());
        assert_eq!(ts.accumulate(0.0), 0);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    #[should_panic]
    fn negative_frame_time_panics() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(-1.0);
    }
}
