use anyhow::Result;
use clap::{Parser, ValueEnum};
use dino_core::{Game, GameVariant, PolicyKind, ScoreHistory};
use dino_tools::{load_config, logging, write_journal};
use log::info;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Basic,
    Threshold,
    SpeedScaled,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Basic => PolicyKind::Basic,
            PolicyArg::Threshold => PolicyKind::Threshold,
            PolicyArg::SpeedScaled => PolicyKind::SpeedScaled,
        }
    }
}

/// Run the autopilot headless for a batch of seeds and summarize the scores.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 1)]
    seed: u64,
    #[arg(short, long, default_value_t = 10)]
    runs: u64,
    /// Tick budget per run
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
    /// Policy to drive the runner; defaults to the variant's own
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    basic: bool,
    /// Write the journal of the best run here
    #[arg(long)]
    best_journal: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let variant = if args.basic { GameVariant::Basic } else { GameVariant::Advanced };
    let config = load_config(args.config.as_deref(), variant)?;
    let kind = args.policy.map_or(config.variant.default_policy(), PolicyKind::from);
    let policy = kind.build(&config);

    let mut game = Game::new(config, args.seed)?;
    let mut history = ScoreHistory::new();
    let mut best = None;

    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        game.reset_with_seed(seed);
        while !game.is_terminal() && game.current_tick() < args.max_ticks {
            game.tick_with_policy(policy.as_ref());
        }

        let score = game.score();
        info!("seed {seed}: score {score} after {} ticks", game.current_tick());
        println!("{seed}\t{score}\t{}", game.current_tick());
        history.record(score);
        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            best = Some((score, game.journal().clone()));
        }
    }

    println!("Policy: {}", kind.label());
    println!("Runs: {}", history.runs_recorded());
    println!("High Score: {}", history.high_score());
    if let Some(mean) = history.mean() {
        println!("Recent Mean: {mean:.2}");
    }

    if let (Some(path), Some((score, journal))) = (args.best_journal, best) {
        write_journal(&path, &journal)?;
        println!("Best run (score {score}, seed {}) written to {}", journal.seed, path.display());
    }

    Ok(())
}
