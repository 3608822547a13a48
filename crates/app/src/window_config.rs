//! Window configuration for the desktop app.

use app::APP_NAME;
use dino_core::Config;
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    let field = Config::default();
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: field.field_width as i32,
        window_height: field.field_height as i32,
        // Keep the playfield pixel-exact; the sim has no notion of resizing.
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}
