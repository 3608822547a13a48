pub mod collision;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod history;
pub mod journal;
pub mod observation;
pub mod obstacles;
pub mod policy;
pub mod replay;
pub mod runner;
pub mod spawner;
pub mod types;

mod rng;

pub use config::{Config, GameVariant, SizeMix, SpawnConfig};
pub use error::{ConfigError, ReplayError};
pub use game::{Game, RunState};
pub use history::ScoreHistory;
pub use journal::{InputJournal, InputRecord};
pub use observation::{Observation, ObservationBuilder};
pub use obstacles::{Obstacle, ObstacleSet};
pub use policy::{BasicPolicy, Policy, PolicyKind, SpeedScaledPolicy, ThresholdPolicy};
pub use replay::{ReplayResult, replay_to_end};
pub use runner::RunnerBody;
pub use types::*;
