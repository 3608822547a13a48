//! Physics body of the runner: one explicit Euler step per tick under constant gravity.

use crate::config::Config;
use crate::types::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct RunnerBody {
    pub x: f32,
    pub y: f32,
    pub velocity_y: f32,
    pub width: f32,
    pub height: f32,
    pub airborne: bool,
    rest_y: f32,
    gravity: f32,
}

impl RunnerBody {
    pub fn new(config: &Config) -> Self {
        let rest_y = config.runner_rest_y();
        Self {
            x: config.runner_x,
            y: rest_y,
            velocity_y: 0.0,
            width: config.runner_width,
            height: config.runner_height,
            airborne: false,
            rest_y,
            gravity: config.gravity,
        }
    }

    /// Start a jump arc. Returns `false` without touching velocity when already airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity_y = -impulse;
        self.airborne = true;
        true
    }

    pub fn tick(&mut self) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;

        if self.y >= self.rest_y {
            self.y = self.rest_y;
            self.velocity_y = 0.0;
            self.airborne = false;
        }
    }

    /// Top edge while standing; `y` never exceeds it.
    pub fn rest_y(&self) -> f32 {
        self.rest_y
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}
