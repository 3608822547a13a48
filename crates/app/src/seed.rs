//! Launch arguments for the desktop app: seed selection and game variant.

use dino_core::GameVariant;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub variant: GameVariant,
    pub verbose: bool,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Parses `--seed N`, `--seed=N`, `--basic` and `--verbose`. Unknown arguments are ignored.
pub fn resolve_launch_from_args(
    args: &[String],
    generated_seed: u64,
) -> Result<LaunchOptions, String> {
    let mut selected_seed = None;
    let mut variant = GameVariant::Advanced;
    let mut verbose = false;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
        } else if argument == "--basic" {
            variant = GameVariant::Basic;
        } else if argument == "--verbose" || argument == "-v" {
            verbose = true;
        }
        index += 1;
    }

    let seed = match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(LaunchOptions { seed, variant, verbose })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn defaults_to_generated_seed_and_advanced_variant() {
        let args = as_args(&["dino"]);
        let launch = resolve_launch_from_args(&args, 9_876_543).expect("no flags should parse");
        assert_eq!(launch.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(launch.variant, GameVariant::Advanced);
        assert!(!launch.verbose);
    }

    #[test]
    fn parses_seed_in_both_forms() {
        let split = resolve_launch_from_args(&as_args(&["dino", "--seed", "4242"]), 1)
            .expect("valid --seed should parse");
        assert_eq!(split.seed, SeedChoice::Cli(4_242));

        let inline = resolve_launch_from_args(&as_args(&["dino", "--seed=2026"]), 1)
            .expect("valid --seed should parse");
        assert_eq!(inline.seed, SeedChoice::Cli(2_026));
    }

    #[test]
    fn basic_and_verbose_flags_are_picked_up() {
        let args = as_args(&["dino", "--basic", "-v", "--seed", "7"]);
        let launch = resolve_launch_from_args(&args, 1).expect("flags should parse");
        assert_eq!(launch.variant, GameVariant::Basic);
        assert!(launch.verbose);
        assert_eq!(launch.seed.value(), 7);
    }

    #[test]
    fn rejects_missing_and_non_numeric_seeds() {
        let err = resolve_launch_from_args(&as_args(&["dino", "--seed"]), 1)
            .expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");

        let err = resolve_launch_from_args(&as_args(&["dino", "--seed=abc"]), 1)
            .expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn rejects_duplicate_seed() {
        let args = as_args(&["dino", "--seed=1", "--seed", "2"]);
        let err = resolve_launch_from_args(&args, 1).expect_err("duplicate seed should error");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
