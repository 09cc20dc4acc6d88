//! Timed star / cross burst played after a cast resolves.

use brew_engine::Rng;
use glam::DVec2;

use crate::config::CastConfig;

/// One particle of the resolution burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub position: DVec2,
    pub spawn_delay_ticks: u32,
    pub spawned: bool,
    pub alpha: u8,
    /// Per-tick y velocity. Negative is upward; zero for failure markers.
    pub vertical_velocity: f64,
}

/// Drives the burst for a fixed number of ticks. Output is purely visual.
#[derive(Debug, Clone)]
pub struct ResolutionAnimator {
    success: bool,
    anchor: DVec2,
    effects: Vec<Effect>,
    remaining_ticks: u32,
    fade_per_tick: u8,
}

impl ResolutionAnimator {
    /// Generate every effect up front from the cast result.
    pub fn new(success: bool, anchor: DVec2, config: &CastConfig, rng: &mut Rng) -> Self {
        let count = if success { config.success_effects } else { config.failure_effects };
        let effects = (0..count)
            .map(|_| {
                let dx = rng.range_i32(-config.spread_x, config.spread_x);
                let dy = rng.range_i32(-config.spread_y, config.spread_y);
                let spawn_delay_ticks = rng.range_i32(0, config.max_spawn_delay as i32) as u32;
                let vertical_velocity = if success {
                    -rng.range_f64(config.rise_speed_min, config.rise_speed_max)
                } else {
                    0.0
                };
                Effect {
                    position: anchor + DVec2::new(dx as f64, dy as f64),
                    spawn_delay_ticks,
                    spawned: false,
                    alpha: u8::MAX,
                    vertical_velocity,
                }
            })
            .collect();

        Self {
            success,
            anchor,
            effects,
            remaining_ticks: config.resolution_ticks,
            fade_per_tick: config.fade_per_tick,
        }
    }

    /// Advance one tick. No-op once finished.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }
        for effect in &mut self.effects {
            if effect.spawn_delay_ticks > 0 {
                effect.spawn_delay_ticks -= 1;
                continue;
            }
            effect.spawned = true;
            if self.success {
                effect.position.y += effect.vertical_velocity;
                effect.alpha = effect.alpha.saturating_sub(self.fade_per_tick);
            }
        }
        self.remaining_ticks -= 1;
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ticks == 0
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Effects drawn this tick: spawned, and not yet faded out.
    pub fn visible(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter().filter(|e| e.spawned && e.alpha > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: DVec2 = DVec2::new(640.0, 360.0);

    fn animator(success: bool, seed: u64) -> ResolutionAnimator {
        ResolutionAnimator::new(success, ANCHOR, &CastConfig::default(), &mut Rng::new(seed))
    }

    #[test]
    fn effect_counts() {
        assert_eq!(animator(true, 1).effects().len(), 25);
        assert_eq!(animator(false, 1).effects().len(), 15);
    }

    #[test]
    fn runs_exactly_120_ticks() {
        for success in [true, false] {
            let mut a = animator(success, 5);
            let mut ticks = 0;
            while !a.is_finished() {
                a.tick();
                ticks += 1;
            }
            assert_eq!(ticks, 120);
            let snapshot = a.effects().to_vec();
            a.tick();
            assert_eq!(a.effects(), &snapshot[..]);
        }
    }

    #[test]
    fn generated_effects_stay_in_bounds() {
        for seed in 1..50 {
            let a = animator(true, seed);
            for e in a.effects() {
                let d = e.position - ANCHOR;
                assert!(d.x.abs() <= 80.0 && d.y.abs() <= 60.0);
                assert_eq!(d.x.fract(), 0.0);
                assert!(e.spawn_delay_ticks <= 30);
                assert!((-1.5..=-0.5).contains(&e.vertical_velocity));
                assert_eq!(e.alpha, 255);
                assert!(!e.spawned);
            }
            let f = animator(false, seed);
            assert!(f.effects().iter().all(|e| e.vertical_velocity == 0.0));
        }
    }

    #[test]
    fn success_effects_rise_and_fade_monotonically() {
        let mut a = animator(true, 11);
        let mut prev: Vec<Effect> = a.effects().to_vec();
        while !a.is_finished() {
            a.tick();
            for (before, after) in prev.iter().zip(a.effects()) {
                assert!(after.alpha <= before.alpha);
                assert!(after.position.y <= before.position.y);
            }
            prev = a.effects().to_vec();
        }
        // 255 / 3 = 85 ticks of fade, and no delay exceeds 30.
        assert_eq!(a.visible().count(), 0);
        assert!(a.effects().iter().all(|e| e.alpha == 0));
    }

    #[test]
    fn delayed_effects_are_hidden_until_spawned() {
        let mut a = animator(true, 3);
        let delayed = a.effects().iter().filter(|e| e.spawn_delay_ticks > 0).count();
        a.tick();
        assert_eq!(a.visible().count(), a.effects().len() - delayed);
    }

    #[test]
    fn failure_markers_stay_put() {
        let mut a = animator(false, 8);
        let start: Vec<DVec2> = a.effects().iter().map(|e| e.position).collect();
        for _ in 0..120 {
            a.tick();
        }
        assert_eq!(a.visible().count(), 15);
        for (e, p) in a.effects().iter().zip(start) {
            assert_eq!(e.position, p);
            assert_eq!(e.alpha, 255);
        }
    }

    #[test]
    fn same_seed_same_burst() {
        assert_eq!(animator(true, 42).effects(), animator(true, 42).effects());
    }
}
