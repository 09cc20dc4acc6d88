//! Tunable constants for casting, effects and the book loop.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CastConfig {
    /// Hit radius of every spell node, in pixels.
    pub node_radius: f64,
    /// Gap between a node's edge and its emphasis ring.
    pub ring_padding: f64,
    /// Pixels per spellbook grid unit.
    pub grid_unit: f64,

    pub success_effects: usize,
    pub failure_effects: usize,
    /// Horizontal effect offset from the anchor, inclusive on both sides.
    pub spread_x: i32,
    pub spread_y: i32,
    pub max_spawn_delay: u32,
    pub rise_speed_min: f64,
    pub rise_speed_max: f64,
    /// Alpha lost per tick by a rising star.
    pub fade_per_tick: u8,
    /// Length of the resolution animation in ticks.
    pub resolution_ticks: u32,

    pub casts_per_order: u32,
    pub result_banner_ticks: u32,
    pub rng_seed: u64,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            node_radius: 20.0,
            ring_padding: 6.0,
            grid_unit: 20.0,
            success_effects: 25,
            failure_effects: 15,
            spread_x: 80,
            spread_y: 60,
            max_spawn_delay: 30,
            rise_speed_min: 0.5,
            rise_speed_max: 1.5,
            fade_per_tick: 3,
            resolution_ticks: 120,
            casts_per_order: 3,
            result_banner_ticks: 90,
            rng_seed: 0x7EA_C0FFEE,
        }
    }
}

impl CastConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CastConfig::from_json(r#"{ "casts_per_order": 5, "rng_seed": 9 }"#).unwrap();
        assert_eq!(config.casts_per_order, 5);
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.resolution_ticks, 120);
        assert_eq!(config.success_effects, 25);
        assert_eq!(config.failure_effects, 15);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(CastConfig::from_json(r#"{ "node_radius": "big" }"#).is_err());
    }
}
