//! Fixed-length normalized view of the run, the only input policies ever see.
//!
//! Advanced layout (10 values):
//! `[d1, w1, h1, d2, h2, d3, h3, speed, airborne, velocity]`
//!
//! Basic layout (5 values):
//! `[d1, w1, h1, speed, airborne]`
//!
//! Distances are measured from the runner's x to each obstacle's left edge and divided by the
//! field width; heights are divided by the field height. Empty slots read as distance 1.0 and
//! height 0.0.

use serde::{Deserialize, Serialize};

use crate::config::{Config, GameVariant};
use crate::obstacles::ObstacleSet;
use crate::runner::RunnerBody;

pub const BASIC_LEN: usize = 5;
pub const ADVANCED_LEN: usize = 10;
/// Upcoming obstacles described by the advanced layout.
pub const TRACKED_OBSTACLES: usize = 3;

pub const EMPTY_DISTANCE: f32 = 1.0;
pub const EMPTY_HEIGHT: f32 = 0.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Observation {
    Basic([f32; BASIC_LEN]),
    Advanced([f32; ADVANCED_LEN]),
}

impl Observation {
    pub fn values(&self) -> &[f32] {
        match self {
            Observation::Basic(values) => values,
            Observation::Advanced(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    pub fn nearest_distance(&self) -> f32 {
        self.values()[0]
    }

    pub fn nearest_width(&self) -> f32 {
        self.values()[1]
    }

    pub fn nearest_height(&self) -> f32 {
        self.values()[2]
    }

    /// Real obstacles always have height, so an empty height slot means nothing is ahead.
    pub fn has_obstacle_ahead(&self) -> bool {
        self.nearest_height() > EMPTY_HEIGHT
    }

    /// Only the advanced layout tracks more than one obstacle.
    pub fn second_distance(&self) -> Option<f32> {
        match self {
            Observation::Basic(_) => None,
            Observation::Advanced(values) => Some(values[3]),
        }
    }

    pub fn second_height(&self) -> Option<f32> {
        match self {
            Observation::Basic(_) => None,
            Observation::Advanced(values) => Some(values[4]),
        }
    }

    pub fn third_distance(&self) -> Option<f32> {
        match self {
            Observation::Basic(_) => None,
            Observation::Advanced(values) => Some(values[5]),
        }
    }

    pub fn third_height(&self) -> Option<f32> {
        match self {
            Observation::Basic(_) => None,
            Observation::Advanced(values) => Some(values[6]),
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            Observation::Basic(values) => values[3],
            Observation::Advanced(values) => values[7],
        }
    }

    pub fn airborne(&self) -> bool {
        match self {
            Observation::Basic(values) => values[4] > 0.5,
            Observation::Advanced(values) => values[8] > 0.5,
        }
    }

    pub fn vertical_velocity(&self) -> Option<f32> {
        match self {
            Observation::Basic(_) => None,
            Observation::Advanced(values) => Some(values[9]),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObservationBuilder {
    variant: GameVariant,
    field_width: f32,
    field_height: f32,
    speed_scale: f32,
    velocity_scale: f32,
}

impl ObservationBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            variant: config.variant,
            field_width: config.field_width,
            field_height: config.field_height,
            speed_scale: config.speed_scale,
            velocity_scale: config.velocity_scale,
        }
    }

    pub fn build(&self, runner: &RunnerBody, obstacles: &ObstacleSet, speed: f32) -> Observation {
        let ahead = obstacles.ahead_of(runner.x, TRACKED_OBSTACLES);
        let distance = |index: usize| {
            ahead
                .get(index)
                .map_or(EMPTY_DISTANCE, |obstacle| (obstacle.x - runner.x) / self.field_width)
        };
        let height = |index: usize| {
            ahead.get(index).map_or(EMPTY_HEIGHT, |obstacle| obstacle.height / self.field_height)
        };
        let width =
            ahead.first().map_or(0.0, |obstacle| obstacle.width / self.field_width);
        let speed = speed / self.speed_scale;
        let airborne = if runner.airborne { 1.0 } else { 0.0 };

        match self.variant {
            GameVariant::Basic => {
                Observation::Basic([distance(0), width, height(0), speed, airborne])
            }
            GameVariant::Advanced => Observation::Advanced([
                distance(0),
                width,
                height(0),
                distance(1),
                height(1),
                distance(2),
                height(2),
                speed,
                airborne,
                runner.velocity_y / self.velocity_scale,
            ]),
        }
    }
}
