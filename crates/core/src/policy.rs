//! Fixed jump policies mapping an observation to an action.
//! This module exists so controllers can be swapped without touching the simulation.
//! It does not own any run state: every policy is a pure function of its observation.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::observation::Observation;
use crate::types::Action;

pub trait Policy {
    fn kind(&self) -> PolicyKind;
    fn decide(&self, observation: &Observation) -> Action;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Basic,
    #[default]
    Threshold,
    SpeedScaled,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] =
        [PolicyKind::Basic, PolicyKind::Threshold, PolicyKind::SpeedScaled];

    pub fn build(self, config: &Config) -> Box<dyn Policy> {
        match self {
            PolicyKind::Basic => Box::new(BasicPolicy::default()),
            PolicyKind::Threshold => Box::new(ThresholdPolicy::default()),
            PolicyKind::SpeedScaled => Box::new(SpeedScaledPolicy::new(config)),
        }
    }

    pub fn next(self) -> PolicyKind {
        match self {
            PolicyKind::Basic => PolicyKind::Threshold,
            PolicyKind::Threshold => PolicyKind::SpeedScaled,
            PolicyKind::SpeedScaled => PolicyKind::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Basic => "basic",
            PolicyKind::Threshold => "threshold",
            PolicyKind::SpeedScaled => "speed-scaled",
        }
    }
}

/// Plain jump whenever the nearest obstacle is inside a fixed distance.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicPolicy {
    pub distance_threshold: f32,
}

impl Default for BasicPolicy {
    fn default() -> Self {
        Self { distance_threshold: 0.3 }
    }
}

impl Policy for BasicPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Basic
    }

    fn decide(&self, observation: &Observation) -> Action {
        if observation.airborne() || !observation.has_obstacle_ahead() {
            return Action::None;
        }
        if observation.nearest_distance() < self.distance_threshold {
            Action::FullJump
        } else {
            Action::None
        }
    }
}

/// Height-aware trigger distance that widens with speed, with a full-jump override when a
/// second obstacle follows closely.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdPolicy {
    pub distance_threshold: f32,
    /// Normalized height separating low obstacles from tall ones.
    pub height_threshold: f32,
    pub low_obstacle_bonus: f32,
    pub tall_obstacle_bonus: f32,
    /// Normalized speed above which the trigger distance grows.
    pub speed_midpoint: f32,
    pub speed_gain: f32,
    /// A second obstacle closer than this forces a full jump.
    pub follow_up_distance: f32,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            distance_threshold: 0.3,
            height_threshold: 0.15,
            low_obstacle_bonus: 0.03,
            tall_obstacle_bonus: 0.05,
            speed_midpoint: 0.5,
            speed_gain: 0.05,
            follow_up_distance: 0.4,
        }
    }
}

impl ThresholdPolicy {
    pub fn jump_threshold(&self, obstacle_height: f32, speed: f32) -> f32 {
        let mut threshold = self.distance_threshold;
        // Heights exactly on the boundary get neither bonus.
        if obstacle_height < self.height_threshold {
            threshold += self.low_obstacle_bonus;
        } else if obstacle_height > self.height_threshold {
            threshold += self.tall_obstacle_bonus;
        }
        let speed_factor = speed - self.speed_midpoint;
        if speed_factor > 0.0 {
            threshold += speed_factor * self.speed_gain;
        }
        threshold
    }
}

impl Policy for ThresholdPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Threshold
    }

    fn decide(&self, observation: &Observation) -> Action {
        if observation.airborne() || !observation.has_obstacle_ahead() {
            return Action::None;
        }

        let height = observation.nearest_height();
        let threshold = self.jump_threshold(height, observation.speed());
        if observation.nearest_distance() >= threshold {
            return Action::None;
        }

        let close_follow_up = observation
            .second_distance()
            .is_some_and(|distance| distance > 0.0 && distance < self.follow_up_distance);
        if close_follow_up || height >= self.height_threshold {
            Action::FullJump
        } else {
            Action::SmallJump
        }
    }
}

/// Pixel-space reach that scales with scroll speed; small jumps for obstacles under a fixed
/// height.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedScaledPolicy {
    pub base_reach: f32,
    pub reference_speed: f32,
    pub low_height: f32,
    field_width: f32,
    field_height: f32,
    speed_scale: f32,
}

impl SpeedScaledPolicy {
    pub fn new(config: &Config) -> Self {
        Self {
            base_reach: 200.0,
            reference_speed: 10.0,
            low_height: 35.0,
            field_width: config.field_width,
            field_height: config.field_height,
            speed_scale: config.speed_scale,
        }
    }

    pub fn reach(&self, normalized_speed: f32) -> f32 {
        self.base_reach * (normalized_speed * self.speed_scale / self.reference_speed)
    }
}

impl Policy for SpeedScaledPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SpeedScaled
    }

    fn decide(&self, observation: &Observation) -> Action {
        if observation.airborne() || !observation.has_obstacle_ahead() {
            return Action::None;
        }
        let distance = observation.nearest_distance() * self.field_width;
        if distance >= self.reach(observation.speed()) {
            return Action::None;
        }
        if observation.nearest_height() * self.field_height < self.low_height {
            Action::SmallJump
        } else {
            Action::FullJump
        }
    }
}
