//! Score-driven difficulty: scroll speed and spawn-interval bounds.

use crate::config::Config;

/// Inclusive window, in milliseconds, from which the next spawn delay is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnInterval {
    pub low_ms: u64,
    pub high_ms: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyModel {
    base_speed: f32,
    ramp_rate: f32,
    speed_cap: Option<f32>,
    base_interval_ms: u64,
    min_interval_ms: u64,
    interval_ramp_ms: u64,
    interval_spread_ms: u64,
}

impl DifficultyModel {
    pub fn new(config: &Config) -> Self {
        Self {
            base_speed: config.base_speed,
            ramp_rate: config.ramp_rate,
            speed_cap: config.speed_cap,
            base_interval_ms: config.spawn.base_interval_ms,
            min_interval_ms: config.spawn.min_interval_ms,
            interval_ramp_ms: config.spawn.interval_ramp_ms,
            interval_spread_ms: config.spawn.interval_spread_ms,
        }
    }

    /// Linear in score; only bounded when a cap is configured.
    pub fn speed(&self, score: u64) -> f32 {
        let raw = self.base_speed + score as f32 * self.ramp_rate;
        match self.speed_cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }

    pub fn spawn_interval(&self, score: u64) -> SpawnInterval {
        let shrink = score.saturating_mul(self.interval_ramp_ms);
        let low_ms = self.base_interval_ms.saturating_sub(shrink).max(self.min_interval_ms);
        SpawnInterval { low_ms, high_ms: low_ms.saturating_add(self.interval_spread_ms) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_ramps_linearly_without_a_cap() {
        let model = DifficultyModel::new(&Config::advanced());
        assert_eq!(model.speed(0), 10.0);
        assert!((model.speed(1000) - 11.0).abs() < 1e-4);
        assert!((model.speed(100_000) - 110.0).abs() < 1e-2);
    }

    #[test]
    fn configured_cap_bounds_speed() {
        let config = Config { speed_cap: Some(10.5), ..Config::advanced() };
        let model = DifficultyModel::new(&config);
        assert_eq!(model.speed(0), 10.0);
        assert_eq!(model.speed(10_000), 10.5);
    }

    #[test]
    fn spawn_interval_shrinks_to_its_floor() {
        let model = DifficultyModel::new(&Config::advanced());
        assert_eq!(model.spawn_interval(0), SpawnInterval { low_ms: 2000, high_ms: 2500 });
        assert_eq!(model.spawn_interval(50), SpawnInterval { low_ms: 1500, high_ms: 2000 });
        assert_eq!(model.spawn_interval(120), SpawnInterval { low_ms: 800, high_ms: 1300 });
        assert_eq!(model.spawn_interval(u64::MAX), SpawnInterval { low_ms: 800, high_ms: 1300 });
    }

    #[test]
    fn basic_preset_has_flat_difficulty() {
        let model = DifficultyModel::new(&Config::basic());
        assert_eq!(model.speed(0), model.speed(500));
        assert_eq!(model.spawn_interval(0), SpawnInterval { low_ms: 1000, high_ms: 2000 });
        assert_eq!(model.spawn_interval(500), SpawnInterval { low_ms: 1000, high_ms: 2000 });
    }
}
