pub mod app_loop;
pub mod logging;
pub mod score_file;
pub mod seed;

pub const APP_NAME: &str = "Dino Runner";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Scroll speed with one decimal place, as shown in the HUD.
pub fn format_speed(speed: f32) -> String {
    format!("{speed:.1}")
}
