use anyhow::{Context, Result};
use clap::Parser;
use dino_core::{GameVariant, ReplayResult, replay_to_end};
use dino_tools::{load_config, logging, read_journal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// TOML config the journal was recorded under; defaults to the preset
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Use the basic preset when no config file is given
    #[arg(long)]
    basic: bool,
    /// Stop after this many ticks if the run has not ended
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let variant = if args.basic { GameVariant::Basic } else { GameVariant::Advanced };
    let config = load_config(args.config.as_deref(), variant)?;
    let journal = read_journal(&args.journal)?;

    let result: ReplayResult =
        replay_to_end(&config, &journal, args.max_ticks).context("Replay failed")?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Final Tick: {}", result.final_tick);
    println!("Final Score: {}", result.final_score);
    println!("Ended By Collision: {}", result.terminal);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
