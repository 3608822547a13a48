use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::observation::Observation;

new_key_type! {
    pub struct ObstacleId;
}

/// A jump request handed to the simulation for the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Jump,
    SmallJump,
}

/// What a policy wants to do after looking at an observation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    SmallJump,
    FullJump,
}

impl Action {
    pub fn command(self) -> Option<Command> {
        match self {
            Action::None => None,
            Action::SmallJump => Some(Command::SmallJump),
            Action::FullJump => Some(Command::Jump),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Inclusive height band sampled for obstacles of this class.
    pub fn height_band(self) -> (u32, u32) {
        match self {
            SizeClass::Small => (20, 30),
            SizeClass::Medium => (31, 50),
            SizeClass::Large => (51, 70),
        }
    }

    /// Class whose band contains `height`; heights outside every band clamp to the nearest end.
    pub fn for_height(height: u32) -> SizeClass {
        match height {
            0..=30 => SizeClass::Small,
            31..=50 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

/// Axis-aligned rectangle in field coordinates, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    pub tick: u64,
    pub score: u64,
    pub speed: f32,
    pub terminal: bool,
    pub observation: Observation,
    /// Obstacle hit on this exact tick, if any.
    pub collided_with: Option<ObstacleId>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LogEvent {
    RunStarted { seed: u64 },
    ObstacleSpawned { id: ObstacleId, class: SizeClass, height: f32, x: f32 },
    ObstacleCleared { id: ObstacleId, score: u64 },
    Jumped { tick: u64, command: Command },
    Collided { id: ObstacleId, tick: u64 },
}
