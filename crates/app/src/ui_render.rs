//! Rendering for the playfield and HUD.

use crate::ui_text::{game_over_lines, hud_lines, status_text};
use app::app_loop::AppState;
use dino_core::{Game, SizeClass};
use macroquad::prelude::*;

const GROUND_COLOR: Color = Color { r: 0.35, g: 0.35, b: 0.35, a: 1.0 };
const OVERLAY_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.8 };
const HUD_X: f32 = 10.0;
const HUD_Y: f32 = 24.0;
const HUD_FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: f32 = 20.0;

pub fn draw_frame(game: &Game, app_state: &AppState) {
    clear_background(WHITE);
    draw_ground(game);
    draw_obstacles(game);
    draw_runner(game);
    draw_hud(game, app_state);
    if game.is_terminal() {
        draw_game_over(game, app_state);
    }
}

fn draw_ground(game: &Game) {
    let config = game.config();
    let ground = config.ground_height;
    draw_line(0.0, ground, config.field_width, ground, 2.0, GROUND_COLOR);
}

fn draw_runner(game: &Game) {
    let runner = &game.state().runner;
    draw_rectangle(runner.x, runner.y, runner.width, runner.height, BLACK);
}

fn draw_obstacles(game: &Game) {
    for obstacle in game.state().obstacles.iter() {
        draw_rectangle(
            obstacle.x,
            obstacle.y,
            obstacle.width,
            obstacle.height,
            class_color(obstacle.class),
        );
    }
}

fn class_color(class: SizeClass) -> Color {
    match class {
        SizeClass::Small => GREEN,
        SizeClass::Medium => BLUE,
        SizeClass::Large => RED,
    }
}

fn draw_hud(game: &Game, app_state: &AppState) {
    let mut text_y = HUD_Y;
    for line in hud_lines(game, app_state) {
        draw_text(&line, HUD_X, text_y, HUD_FONT_SIZE, BLACK);
        text_y += LINE_HEIGHT;
    }

    let status = status_text(app_state);
    let width = measure_text(&status, None, HUD_FONT_SIZE as u16, 1.0).width;
    draw_text(&status, game.config().field_width - width - HUD_X, HUD_Y, HUD_FONT_SIZE, DARKGRAY);
}

fn draw_game_over(game: &Game, app_state: &AppState) {
    let config = game.config();
    let lines = game_over_lines(game, app_state);
    let block_height = lines.len() as f32 * LINE_HEIGHT;
    let top = (config.field_height - block_height) / 2.0;

    draw_rectangle(
        0.0,
        top - LINE_HEIGHT,
        config.field_width,
        block_height + LINE_HEIGHT,
        OVERLAY_COLOR,
    );
    for (index, line) in lines.iter().enumerate() {
        let size = if index == 0 { 36.0 } else { HUD_FONT_SIZE };
        let width = measure_text(line, None, size as u16, 1.0).width;
        let x = (config.field_width - width) / 2.0;
        draw_text(line, x, top + index as f32 * LINE_HEIGHT, size, BLACK);
    }
}
