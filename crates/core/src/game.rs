//! Run lifecycle and the fixed-order per-tick simulation step.
//! This module owns the run state, the input journal, and the per-run event log.
//! It does not own policy decisions; controllers hand in commands.

use std::hash::Hasher;

use log::{debug, info};
use xxhash_rust::xxh3::Xxh3;

use crate::collision::first_collision;
use crate::config::Config;
use crate::difficulty::DifficultyModel;
use crate::error::ConfigError;
use crate::journal::InputJournal;
use crate::observation::{Observation, ObservationBuilder};
use crate::obstacles::ObstacleSet;
use crate::policy::Policy;
use crate::runner::RunnerBody;
use crate::spawner::ObstacleSpawner;
use crate::types::*;

#[cfg(test)]
mod test_support;

/// Everything that belongs to one run. Replaced wholesale on reset.
#[derive(Clone, Debug)]
pub struct RunState {
    pub runner: RunnerBody,
    pub obstacles: ObstacleSet,
    pub spawner: ObstacleSpawner,
    pub score: u64,
    /// Set once on the colliding tick and never cleared.
    pub terminal: bool,
    pub speed: f32,
    pub tick: u64,
}

impl RunState {
    fn new(config: &Config, seed: u64) -> Self {
        Self {
            runner: RunnerBody::new(config),
            obstacles: ObstacleSet::new(config.ground_height),
            spawner: ObstacleSpawner::new(config, seed),
            score: 0,
            terminal: false,
            speed: config.base_speed,
            tick: 0,
        }
    }
}

pub struct Game {
    config: Config,
    fingerprint: String,
    seed: u64,
    difficulty: DifficultyModel,
    observer: ObservationBuilder,
    state: RunState,
    journal: InputJournal,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let fingerprint = config.fingerprint()?;
        info!("starting {:?} run with seed {seed}", config.variant);

        Ok(Self {
            difficulty: DifficultyModel::new(&config),
            observer: ObservationBuilder::new(&config),
            state: RunState::new(&config, seed),
            journal: InputJournal::new(seed, fingerprint.clone()),
            log: vec![LogEvent::RunStarted { seed }],
            fingerprint,
            seed,
            config,
        })
    }

    /// Advance one tick. A command is applied before physics; a terminal run ignores input
    /// and stays terminal.
    pub fn tick(&mut self, command: Option<Command>) -> TickResult {
        if self.state.terminal {
            return self.result(None);
        }

        self.state.tick += 1;
        let tick = self.state.tick;

        if let Some(command) = command {
            self.journal.append(tick, command);
            if self.state.runner.jump(self.impulse(command)) {
                self.log.push(LogEvent::Jumped { tick, command });
            }
        }

        let score = self.state.score;
        self.state.speed = self.difficulty.speed(score);
        self.state.runner.tick();

        let now_ms = self.clock_ms();
        let interval = self.difficulty.spawn_interval(score);
        let obstacles_live = !self.state.obstacles.is_empty();
        if let Some(spec) = self.state.spawner.maybe_spawn(now_ms, interval, obstacles_live) {
            let id = self.state.obstacles.insert(spec);
            debug!(
                "tick {tick}: spawned {:?} obstacle h={} at x={}",
                spec.class, spec.height, spec.x
            );
            self.log.push(LogEvent::ObstacleSpawned {
                id,
                class: spec.class,
                height: spec.height,
                x: spec.x,
            });
        }

        for id in self.state.obstacles.advance(self.state.speed) {
            self.state.score += 1;
            debug!("tick {tick}: cleared obstacle, score {}", self.state.score);
            self.log.push(LogEvent::ObstacleCleared { id, score: self.state.score });
        }

        let collided_with = first_collision(&self.state.runner.bounds(), &self.state.obstacles);
        if let Some(id) = collided_with {
            self.state.terminal = true;
            info!("run over at tick {tick} with score {}", self.state.score);
            self.log.push(LogEvent::Collided { id, tick });
        }

        self.result(collided_with)
    }

    /// Let `policy` look at the current observation and apply its choice on this tick.
    pub fn tick_with_policy(&mut self, policy: &dyn Policy) -> TickResult {
        let action = policy.decide(&self.observe());
        self.tick(action.command())
    }

    /// Start a fresh run with the same seed, reproducing the previous run's obstacles.
    pub fn reset(&mut self) -> &RunState {
        self.reset_with_seed(self.seed)
    }

    pub fn reset_with_seed(&mut self, seed: u64) -> &RunState {
        self.seed = seed;
        self.state = RunState::new(&self.config, seed);
        self.journal = InputJournal::new(seed, self.fingerprint.clone());
        self.log = vec![LogEvent::RunStarted { seed }];
        info!("reset run with seed {seed}");
        &self.state
    }

    pub fn observe(&self) -> Observation {
        self.observer.build(&self.state.runner, &self.state.obstacles, self.state.speed)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn current_tick(&self) -> u64 {
        self.state.tick
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    /// Simulated milliseconds since the run started.
    pub fn clock_ms(&self) -> u64 {
        self.state.tick * 1000 / u64::from(self.config.tick_rate_hz)
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.state.tick);
        hasher.write_u64(self.state.score);
        hasher.write_u8(u8::from(self.state.terminal));
        hasher.write_u64(self.state.spawner.next_spawn_ms());

        let runner = &self.state.runner;
        hasher.write_u32(runner.y.to_bits());
        hasher.write_u32(runner.velocity_y.to_bits());
        hasher.write_u8(u8::from(runner.airborne));

        for obstacle in self.state.obstacles.sorted() {
            hasher.write_u32(obstacle.x.to_bits());
            hasher.write_u32(obstacle.height.to_bits());
            hasher.write_u8(obstacle.class as u8);
        }

        hasher.finish()
    }

    fn impulse(&self, command: Command) -> f32 {
        match command {
            Command::Jump => self.config.jump_impulse,
            Command::SmallJump => self.config.small_jump_impulse,
        }
    }

    fn result(&self, collided_with: Option<ObstacleId>) -> TickResult {
        TickResult {
            tick: self.state.tick,
            score: self.state.score,
            speed: self.state.speed,
            terminal: self.state.terminal,
            observation: self.observe(),
            collided_with,
        }
    }
}
