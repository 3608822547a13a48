//! Procedural obstacle generation on a score-shortened, randomized schedule.
//! This module owns the spawn clock and all random draws for a run.
//! It does not own the live obstacle collection.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{Config, SizeMix, SpawnConfig};
use crate::difficulty::SpawnInterval;
use crate::obstacles::ObstacleSpec;
use crate::rng::{chance, range_inclusive};
use crate::types::SizeClass;

#[derive(Clone, Debug)]
pub struct ObstacleSpawner {
    spawn: SpawnConfig,
    field_width: f32,
    next_spawn_ms: u64,
    rng: ChaCha8Rng,
}

impl ObstacleSpawner {
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            spawn: config.spawn.clone(),
            field_width: config.field_width,
            next_spawn_ms: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn next_spawn_ms(&self) -> u64 {
        self.next_spawn_ms
    }

    #[cfg(test)]
    pub(crate) fn postpone_until(&mut self, ms: u64) {
        self.next_spawn_ms = ms;
    }

    /// Emit an obstacle once `now_ms` is past the scheduled time, then schedule the next one
    /// from `interval`. `obstacles_live` only gates the tight-gap roll.
    pub fn maybe_spawn(
        &mut self,
        now_ms: u64,
        interval: SpawnInterval,
        obstacles_live: bool,
    ) -> Option<ObstacleSpec> {
        if now_ms <= self.next_spawn_ms {
            return None;
        }

        let gap = if obstacles_live && chance(&mut self.rng, self.spawn.tight_gap_chance) {
            self.spawn.tight_lead_gap
        } else {
            self.spawn.lead_gap
        };
        let (class, height) = self.draw_size();
        let delay = range_inclusive(&mut self.rng, interval.low_ms, interval.high_ms);
        self.next_spawn_ms = now_ms + delay;

        Some(ObstacleSpec {
            class,
            x: self.field_width + gap,
            width: self.spawn.obstacle_width,
            height: height as f32,
        })
    }

    fn draw_size(&mut self) -> (SizeClass, u32) {
        match self.spawn.size_mix {
            SizeMix::Banded { .. } => {
                let class = self.draw_class();
                let (low, high) = class.height_band();
                let height = range_inclusive(&mut self.rng, u64::from(low), u64::from(high));
                (class, height as u32)
            }
            SizeMix::Uniform { min_height, max_height } => {
                let height =
                    range_inclusive(&mut self.rng, u64::from(min_height), u64::from(max_height))
                        as u32;
                (SizeClass::for_height(height), height)
            }
        }
    }

    fn draw_class(&mut self) -> SizeClass {
        let mix = self.spawn.size_mix;
        let total: u64 = SizeClass::ALL.iter().map(|class| u64::from(mix.weight(*class))).sum();
        let mut roll = range_inclusive(&mut self.rng, 0, total.saturating_sub(1));
        for class in SizeClass::ALL {
            let weight = u64::from(mix.weight(class));
            if roll < weight {
                return class;
            }
            roll -= weight;
        }
        SizeClass::Large
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: SpawnInterval = SpawnInterval { low_ms: 2000, high_ms: 2500 };

    #[test]
    fn spawns_only_after_the_scheduled_time() {
        let mut spawner = ObstacleSpawner::new(&Config::advanced(), 1);
        assert!(spawner.maybe_spawn(0, WIDE, false).is_none(), "schedule is strict");

        let spec = spawner.maybe_spawn(16, WIDE, false).expect("first spawn is due");
        assert_eq!(spec.x, 1100.0);
        assert_eq!(spec.width, 20.0);

        let next = spawner.next_spawn_ms();
        assert!((16 + 2000..=16 + 2500).contains(&next));
        assert!(spawner.maybe_spawn(next, WIDE, true).is_none());
        assert!(spawner.maybe_spawn(next + 1, WIDE, true).is_some());
    }

    #[test]
    fn heights_fall_inside_their_class_band() {
        let mut spawner = ObstacleSpawner::new(&Config::advanced(), 77);
        let mut now = 1;
        let mut counts = [0_u32; 3];
        for _ in 0..3000 {
            let spec = spawner.maybe_spawn(now, WIDE, false).expect("spawn is due");
            let (low, high) = spec.class.height_band();
            assert!(spec.height >= low as f32 && spec.height <= high as f32);
            counts[spec.class as usize] += 1;
            now = spawner.next_spawn_ms() + 1;
        }
        // Weights 2:2:1 so large should be the rarest class by a clear margin.
        assert!(counts[2] < counts[0] && counts[2] < counts[1], "counts: {counts:?}");
        assert!(counts[2] > 300, "large obstacles should still appear: {counts:?}");
    }

    #[test]
    fn tight_gap_needs_a_live_obstacle() {
        let mut config = Config::advanced();
        config.spawn.tight_gap_chance = 1.0;
        let mut spawner = ObstacleSpawner::new(&config, 3);

        let lone = spawner.maybe_spawn(1, WIDE, false).expect("due");
        assert_eq!(lone.x, 1100.0);

        let now = spawner.next_spawn_ms() + 1;
        let crowded = spawner.maybe_spawn(now, WIDE, true).expect("due");
        assert_eq!(crowded.x, 1000.0);
    }

    #[test]
    fn uniform_mix_spawns_at_the_field_edge() {
        let mut spawner = ObstacleSpawner::new(&Config::basic(), 5);
        let interval = SpawnInterval { low_ms: 1000, high_ms: 2000 };
        let mut now = 1;
        for _ in 0..500 {
            let spec = spawner.maybe_spawn(now, interval, true).expect("due");
            assert_eq!(spec.x, 800.0);
            assert!((30.0..=60.0).contains(&spec.height));
            assert_eq!(spec.class, SizeClass::for_height(spec.height as u32));
            now = spawner.next_spawn_ms() + 1;
        }
    }

    #[test]
    fn same_seed_draws_the_same_obstacles() {
        let draw = |seed| {
            let mut spawner = ObstacleSpawner::new(&Config::advanced(), seed);
            let mut now = 1;
            let mut specs = Vec::new();
            for _ in 0..20 {
                specs.push(spawner.maybe_spawn(now, WIDE, true).expect("due"));
                now = spawner.next_spawn_ms() + 1;
            }
            specs
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42), draw(43));
    }
}
