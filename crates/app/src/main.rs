mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

use app::app_loop::AppState;
use app::logging;
use app::score_file::{ScoreFile, load_history_or_default};
use app::seed::{generate_runtime_seed, resolve_launch_from_args};
use dino_core::{Config, Game};
use frame_input::capture_frame_input;
use log::{error, info, warn};
use macroquad::prelude::{KeyCode, get_frame_time, next_frame};
use macroquad::window::Conf;
use std::env;

// Upper bound on catch-up ticks after a stalled frame.
const MAX_TICKS_PER_FRAME: u32 = 5;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let launch = match resolve_launch_from_args(&args, generate_runtime_seed()) {
        Ok(launch) => launch,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };
    logging::init(launch.verbose);

    let config = Config::for_variant(launch.variant);
    let tick_seconds = 1.0 / f64::from(config.tick_rate_hz);
    let mut game = match Game::new(config, launch.seed.value()) {
        Ok(game) => game,
        Err(err) => {
            error!("invalid game configuration: {err}");
            return;
        }
    };

    let score_path = ScoreFile::get_default_path();
    let history = load_history_or_default(score_path.as_deref());
    info!(
        "loaded score history: {} runs, high score {}",
        history.runs_recorded(),
        history.high_score()
    );
    let mut app_state = AppState::new(game.config(), history);

    let mut pending_keys: Vec<KeyCode> = Vec::new();
    let mut accumulator = 0.0_f64;

    loop {
        let input = capture_frame_input();
        if input.quit_requested {
            break;
        }
        pending_keys.extend(input.keys_pressed);
        accumulator += f64::from(get_frame_time());

        let mut ticks_this_frame = 0;
        while accumulator >= tick_seconds && ticks_this_frame < MAX_TICKS_PER_FRAME {
            let outcome = app_state.tick(&mut game, &pending_keys, generate_runtime_seed);
            pending_keys.clear();
            accumulator -= tick_seconds;
            ticks_this_frame += 1;

            if outcome.restarted
                && let Some(path) = score_path.as_deref()
                && let Err(err) = ScoreFile::new(app_state.history.clone()).write_atomic(path)
            {
                warn!("failed to save score history to {}: {err}", path.display());
            }
        }
        if ticks_this_frame == MAX_TICKS_PER_FRAME {
            accumulator = 0.0;
        }

        ui_render::draw_frame(&game, &app_state);
        next_frame().await
    }
}
