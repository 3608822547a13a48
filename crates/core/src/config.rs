//! Immutable simulation configuration, presets, and fail-fast validation.
//! Every component reads its constants from here at construction time.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ConfigError;
use crate::policy::PolicyKind;
use crate::types::SizeClass;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVariant {
    Basic,
    #[default]
    Advanced,
}

impl GameVariant {
    pub fn default_policy(self) -> PolicyKind {
        match self {
            GameVariant::Basic => PolicyKind::Basic,
            GameVariant::Advanced => PolicyKind::Threshold,
        }
    }
}

/// How obstacle heights are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizeMix {
    /// Pick a size class by weight, then a height inside that class's band.
    Banded { small: u32, medium: u32, large: u32 },
    /// Pick a height uniformly; the class follows from the band it falls into.
    Uniform { min_height: u32, max_height: u32 },
}

impl SizeMix {
    pub fn weight(&self, class: SizeClass) -> u32 {
        match (self, class) {
            (SizeMix::Banded { small, .. }, SizeClass::Small) => *small,
            (SizeMix::Banded { medium, .. }, SizeClass::Medium) => *medium,
            (SizeMix::Banded { large, .. }, SizeClass::Large) => *large,
            (SizeMix::Uniform { .. }, _) => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Distance past the right edge at which obstacles normally appear.
    pub lead_gap: f32,
    /// Shorter gap used for tight sequences.
    pub tight_lead_gap: f32,
    /// Chance of the tight gap, rolled only while another obstacle is live.
    pub tight_gap_chance: f64,
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    /// Interval reduction per point of score.
    pub interval_ramp_ms: u64,
    pub interval_spread_ms: u64,
    pub obstacle_width: f32,
    pub size_mix: SizeMix,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            lead_gap: 300.0,
            tight_lead_gap: 200.0,
            tight_gap_chance: 0.2,
            base_interval_ms: 2000,
            min_interval_ms: 800,
            interval_ramp_ms: 10,
            interval_spread_ms: 500,
            obstacle_width: 20.0,
            size_mix: SizeMix::Banded { small: 2, medium: 2, large: 1 },
        }
    }
}

impl SpawnConfig {
    pub fn basic() -> Self {
        Self {
            lead_gap: 0.0,
            tight_lead_gap: 0.0,
            tight_gap_chance: 0.0,
            base_interval_ms: 1000,
            min_interval_ms: 1000,
            interval_ramp_ms: 0,
            interval_spread_ms: 1000,
            obstacle_width: 20.0,
            size_mix: SizeMix::Uniform { min_height: 30, max_height: 60 },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: GameVariant,
    pub field_width: f32,
    pub field_height: f32,
    /// Y coordinate of the ground line.
    pub ground_height: f32,
    pub gravity: f32,
    pub base_speed: f32,
    /// Speed gained per point of score.
    pub ramp_rate: f32,
    /// Optional ceiling on scroll speed. Uncapped when absent.
    pub speed_cap: Option<f32>,
    pub jump_impulse: f32,
    pub small_jump_impulse: f32,
    pub runner_x: f32,
    pub runner_width: f32,
    pub runner_height: f32,
    /// Divisor normalizing speed in observations.
    pub speed_scale: f32,
    /// Divisor normalizing vertical velocity in observations.
    pub velocity_scale: f32,
    pub tick_rate_hz: u32,
    pub spawn: SpawnConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::advanced()
    }
}

impl Config {
    pub fn advanced() -> Self {
        Self {
            variant: GameVariant::Advanced,
            field_width: 800.0,
            field_height: 400.0,
            ground_height: 350.0,
            gravity: 1.0,
            base_speed: 10.0,
            ramp_rate: 0.001,
            speed_cap: None,
            jump_impulse: 18.0,
            small_jump_impulse: 15.0,
            runner_x: 50.0,
            runner_width: 44.0,
            runner_height: 48.0,
            speed_scale: 20.0,
            velocity_scale: 20.0,
            tick_rate_hz: 60,
            spawn: SpawnConfig::default(),
        }
    }

    pub fn basic() -> Self {
        Self {
            variant: GameVariant::Basic,
            ramp_rate: 0.0,
            spawn: SpawnConfig::basic(),
            ..Self::advanced()
        }
    }

    pub fn for_variant(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Basic => Self::basic(),
            GameVariant::Advanced => Self::advanced(),
        }
    }

    /// Y coordinate of the runner's top edge while standing on the ground.
    pub fn runner_rest_y(&self) -> f32 {
        self.ground_height - self.runner_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("gravity", self.gravity)?;
        positive("base_speed", self.base_speed)?;
        non_negative("ramp_rate", self.ramp_rate)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("small_jump_impulse", self.small_jump_impulse)?;
        non_negative("runner_x", self.runner_x)?;
        positive("runner_width", self.runner_width)?;
        positive("runner_height", self.runner_height)?;
        positive("speed_scale", self.speed_scale)?;
        positive("velocity_scale", self.velocity_scale)?;
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::NotPositive { field: "tick_rate_hz", value: 0.0 });
        }

        let ground_fits = self.ground_height >= self.runner_height
            && self.ground_height <= self.field_height;
        if !ground_fits {
            return Err(ConfigError::GroundOutOfField {
                ground_height: f64::from(self.ground_height),
                runner_height: f64::from(self.runner_height),
                field_height: f64::from(self.field_height),
            });
        }

        if let Some(cap) = self.speed_cap
            && (cap.is_nan() || cap < self.base_speed)
        {
            return Err(ConfigError::CapBelowBaseSpeed {
                cap: f64::from(cap),
                base_speed: f64::from(self.base_speed),
            });
        }

        self.validate_spawn()
    }

    fn validate_spawn(&self) -> Result<(), ConfigError> {
        let spawn = &self.spawn;
        non_negative("spawn.lead_gap", spawn.lead_gap)?;
        non_negative("spawn.tight_lead_gap", spawn.tight_lead_gap)?;
        positive("spawn.obstacle_width", spawn.obstacle_width)?;
        if !(0.0..=1.0).contains(&spawn.tight_gap_chance) {
            return Err(ConfigError::NotProbability {
                field: "spawn.tight_gap_chance",
                value: spawn.tight_gap_chance,
            });
        }
        if spawn.min_interval_ms == 0 {
            return Err(ConfigError::NotPositive { field: "spawn.min_interval_ms", value: 0.0 });
        }
        if spawn.min_interval_ms > spawn.base_interval_ms {
            return Err(ConfigError::InvertedRange {
                field: "spawn interval",
                low: spawn.min_interval_ms as f64,
                high: spawn.base_interval_ms as f64,
            });
        }

        match spawn.size_mix {
            SizeMix::Banded { small, medium, large } => {
                if small == 0 && medium == 0 && large == 0 {
                    return Err(ConfigError::EmptySizeMix);
                }
            }
            SizeMix::Uniform { min_height, max_height } => {
                if min_height == 0 {
                    return Err(ConfigError::NotPositive {
                        field: "spawn.size_mix.min_height",
                        value: 0.0,
                    });
                }
                if min_height > max_height {
                    return Err(ConfigError::InvertedRange {
                        field: "spawn.size_mix height",
                        low: f64::from(min_height),
                        high: f64::from(max_height),
                    });
                }
            }
        }
        Ok(())
    }

    /// SHA-256 of the canonical JSON encoding, as lowercase hex.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        let encoded =
            serde_json::to_vec(self).map_err(|err| ConfigError::Encoding(err.to_string()))?;
        let digest = Sha256::digest(&encoded);
        Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value: f64::from(value) })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value: f64::from(value) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        Config::advanced().validate().expect("advanced preset should be valid");
        Config::basic().validate().expect("basic preset should be valid");
    }

    #[test]
    fn negative_ramp_rate_fails_fast() {
        let config = Config { ramp_rate: -0.5, ..Config::advanced() };
        let err = config.validate().expect_err("negative ramp must be rejected");
        assert!(matches!(err, ConfigError::Negative { field: "ramp_rate", .. }));
    }

    #[test]
    fn nan_gravity_is_rejected() {
        let config = Config { gravity: f32::NAN, ..Config::advanced() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "gravity", .. })
        ));
    }

    #[test]
    fn speed_cap_below_base_speed_is_rejected() {
        let config = Config { speed_cap: Some(5.0), ..Config::advanced() };
        assert!(matches!(config.validate(), Err(ConfigError::CapBelowBaseSpeed { .. })));

        let config = Config { speed_cap: Some(25.0), ..Config::advanced() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ground_must_hold_the_runner() {
        let config = Config { ground_height: 450.0, ..Config::advanced() };
        assert!(matches!(config.validate(), Err(ConfigError::GroundOutOfField { .. })));

        let config = Config { ground_height: 30.0, ..Config::advanced() };
        assert!(matches!(config.validate(), Err(ConfigError::GroundOutOfField { .. })));
    }

    #[test]
    fn spawn_ranges_are_checked() {
        let mut config = Config::advanced();
        config.spawn.min_interval_ms = 3000;
        assert!(matches!(config.validate(), Err(ConfigError::InvertedRange { .. })));

        let mut config = Config::advanced();
        config.spawn.tight_gap_chance = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::NotProbability { .. })));

        let mut config = Config::advanced();
        config.spawn.size_mix = SizeMix::Banded { small: 0, medium: 0, large: 0 };
        assert_eq!(config.validate(), Err(ConfigError::EmptySizeMix));
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "base_speed": 12.0, "spawn": { "lead_gap": 250.0 } }"#)
                .expect("partial config should parse");
        assert_eq!(config.base_speed, 12.0);
        assert_eq!(config.spawn.lead_gap, 250.0);
        assert_eq!(config.spawn.min_interval_ms, 800);
        assert_eq!(config.field_width, 800.0);
    }

    #[test]
    fn fingerprint_tracks_config_changes() {
        let base = Config::advanced().fingerprint().expect("fingerprint");
        assert_eq!(base.len(), 64);
        assert_eq!(base, Config::advanced().fingerprint().expect("fingerprint"));
        assert_ne!(base, Config::basic().fingerprint().expect("fingerprint"));
    }

    #[test]
    fn variants_select_their_policies() {
        assert_eq!(GameVariant::Basic.default_policy(), PolicyKind::Basic);
        assert_eq!(GameVariant::Advanced.default_policy(), PolicyKind::Threshold);
    }
}
