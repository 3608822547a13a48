//! Text formatting for the HUD and the game-over overlay.

use app::app_loop::{AppState, ControlMode};
use app::{format_seed, format_snapshot_hash, format_speed};
use dino_core::{Game, GameVariant, ScoreHistory};

pub fn status_text(app_state: &AppState) -> String {
    match app_state.mode {
        ControlMode::Manual => "Manual (Space=jump, Down=small jump, M=AI)".to_string(),
        ControlMode::Autonomous => {
            format!("AI: {} (P=next policy, M=manual)", app_state.policy_kind.label())
        }
    }
}

pub fn hud_lines(game: &Game, app_state: &AppState) -> Vec<String> {
    let variant = match game.config().variant {
        GameVariant::Basic => "basic",
        GameVariant::Advanced => "advanced",
    };
    vec![
        format!("Score: {}", game.score()),
        format!("High Score: {}", app_state.history.high_score().max(game.score())),
        format!("Speed: {}", format_speed(game.state().speed)),
        format!("Mode: {} ({variant})", app_state.mode.label()),
        format!("Seed: {}", format_seed(game.seed())),
    ]
}

pub fn recent_scores_line(history: &ScoreHistory) -> String {
    if history.runs_recorded() == 0 {
        return "Recent: none".to_string();
    }
    let scores: Vec<String> = history.recent().map(|score| score.to_string()).collect();
    match history.mean() {
        Some(mean) => format!("Recent: {} (avg {mean:.1})", scores.join(" ")),
        None => format!("Recent: {}", scores.join(" ")),
    }
}

pub fn game_over_lines(game: &Game, app_state: &AppState) -> Vec<String> {
    vec![
        "Game Over".to_string(),
        format!("Score: {} at tick {}", game.score(), game.current_tick()),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
        recent_scores_line(&app_state.history),
        "Press Space to restart".to_string(),
    ]
}
