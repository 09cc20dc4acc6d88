/// Turns variable host frame times into a whole number of fixed ticks.
///
/// All game timing (spawn delays, fades, banners) counts ticks, so the
/// leftover fraction simply waits for the next frame.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    carry: f32,
    max_steps: u32,
    ticks: u64,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            carry: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
            ticks: 0,
        }
    }

    /// Cap on ticks run for one frame. Time past the cap is discarded.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add one frame's elapsed time and return how many ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let budget = self.dt * self.max_steps as f32;
        self.carry = (self.carry + frame_dt.max(0.0)).min(budget);
        // Tolerate float drift so an exact 1/60 frame yields one tick.
        let steps = ((self.carry + self.dt * 1e-4) / self.dt) as u32;
        self.carry = (self.carry - steps as f32 * self.dt).max(0.0);
        self.ticks += steps as u64;
        steps
    }

    /// Drop any carried fraction, e.g. after the host was paused.
    pub fn reset(&mut self) {
        self.carry = 0.0;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn exact_frames_tick_once_each() {
        let mut ts = FixedTimestep::new(DT);
        for _ in 0..600 {
            assert_eq!(ts.accumulate(DT), 1);
        }
        assert_eq!(ts.ticks(), 600);
    }

    #[test]
    fn short_frames_carry_over() {
        let mut ts = FixedTimestep::new(DT);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut ts = FixedTimestep::new(DT);
        assert_eq!(ts.accumulate(1.0), FixedTimestep::DEFAULT_MAX_STEPS);
        let mut ts = FixedTimestep::new(DT).with_max_steps(3);
        assert_eq!(ts.accumulate(1.0), 3);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn reset_and_negative_frames() {
        let mut ts = FixedTimestep::new(DT);
        ts.accumulate(0.012);
        ts.reset();
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.ticks(), 0);
    }
}
