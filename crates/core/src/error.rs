//! Error taxonomy for configuration and journal replay.
//! Normal play never produces an error: airborne jumps are no-ops and a terminal
//! run is recovered by resetting it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a probability in [0, 1], got {value}")]
    NotProbability { field: &'static str, value: f64 },
    #[error("{field} range is inverted: {low} > {high}")]
    InvertedRange { field: &'static str, low: f64, high: f64 },
    #[error(
        "ground height {ground_height} must hold a runner of height {runner_height} inside a field of height {field_height}"
    )]
    GroundOutOfField { ground_height: f64, runner_height: f64, field_height: f64 },
    #[error("speed cap {cap} is below base speed {base_speed}")]
    CapBelowBaseSpeed { cap: f64, base_speed: f64 },
    #[error("size mix weights must not all be zero")]
    EmptySizeMix,
    #[error("config could not be encoded: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedFormat(u16),
    #[error("journal was recorded against config {recorded}, replay config is {current}")]
    ConfigMismatch { recorded: String, current: String },
    #[error("journal input at tick {tick} does not follow tick {previous}")]
    OutOfOrder { tick: u64, previous: u64 },
    #[error("{remaining} journal inputs were left after the run ended at tick {final_tick}")]
    UnconsumedInputs { remaining: usize, final_tick: u64 },
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
