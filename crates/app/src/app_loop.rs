//! Frame-level control flow: manual and autonomous input, restarts, policy cycling.
//! Kept free of window calls so it can be driven with synthetic key lists.

use dino_core::{Command, Config, Game, Policy, PolicyKind, ScoreHistory, TickResult};
use log::info;
use macroquad::prelude::KeyCode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    Manual,
    #[default]
    Autonomous,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Manual => ControlMode::Autonomous,
            ControlMode::Autonomous => ControlMode::Manual,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlMode::Manual => "Manual",
            ControlMode::Autonomous => "AI",
        }
    }
}

/// What happened during one call to [`AppState::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub ticked: bool,
    /// The run hit an obstacle on this tick.
    pub run_ended: bool,
    /// A finished run was recorded and a new one started.
    pub restarted: bool,
}

pub struct AppState {
    pub mode: ControlMode,
    pub policy_kind: PolicyKind,
    pub history: ScoreHistory,
    pub last_result: Option<TickResult>,
    policy: Box<dyn Policy>,
}

impl AppState {
    pub fn new(config: &Config, history: ScoreHistory) -> Self {
        let policy_kind = config.variant.default_policy();
        Self {
            mode: ControlMode::default(),
            policy_kind,
            history,
            last_result: None,
            policy: policy_kind.build(config),
        }
    }

    /// Process the keys pressed since the last tick and advance the game once.
    pub fn tick(
        &mut self,
        game: &mut Game,
        keys_pressed: &[KeyCode],
        next_seed: impl FnOnce() -> u64,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        if keys_pressed.contains(&KeyCode::M) {
            self.mode = self.mode.toggled();
            info!("control mode changed to {}", self.mode.label());
        }
        if keys_pressed.contains(&KeyCode::P) {
            self.policy_kind = self.policy_kind.next();
            self.policy = self.policy_kind.build(game.config());
            info!("autopilot policy changed to {}", self.policy_kind.label());
        }

        if game.is_terminal() {
            if keys_pressed.contains(&KeyCode::Space) {
                self.history.record(game.score());
                game.reset_with_seed(next_seed());
                self.last_result = None;
                outcome.restarted = true;
            }
            return outcome;
        }

        let command = match self.mode {
            ControlMode::Manual => manual_command(keys_pressed),
            ControlMode::Autonomous => self.policy.decide(&game.observe()).command(),
        };

        let result = game.tick(command);
        outcome.ticked = true;
        outcome.run_ended = result.terminal;
        self.last_result = Some(result);
        outcome
    }
}

fn manual_command(keys_pressed: &[KeyCode]) -> Option<Command> {
    if keys_pressed.contains(&KeyCode::Space) || keys_pressed.contains(&KeyCode::Up) {
        Some(Command::Jump)
    } else if keys_pressed.contains(&KeyCode::Down) {
        Some(Command::SmallJump)
    } else {
        None
    }
}
