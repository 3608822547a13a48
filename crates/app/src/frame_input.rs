//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 5] =
    [KeyCode::Space, KeyCode::Up, KeyCode::Down, KeyCode::M, KeyCode::P];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub quit_requested: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    FrameInput { keys_pressed, quit_requested: is_key_pressed(KeyCode::Escape) }
}
