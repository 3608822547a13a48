use anyhow::{Result, ensure};
use clap::Parser;
use dino_core::{Command, Config, Game, GameVariant, LogEvent, Observation};
use dino_tools::logging;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 100_000)]
    ticks: u64,
    #[arg(long)]
    basic: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    println!("Starting Fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let variant = if args.basic { GameVariant::Basic } else { GameVariant::Advanced };
    let mut game = Game::new(Config::for_variant(variant), args.seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let commands = [None, None, None, None, Some(Command::Jump), Some(Command::SmallJump)];

    let mut runs = 0u64;
    let mut best_score = 0u64;
    for _ in 0..args.ticks {
        if game.is_terminal() {
            runs += 1;
            best_score = best_score.max(game.score());
            game.reset_with_seed(rng.next_u64());
            continue;
        }

        let before_score = game.score();
        let before_log = game.log().len();
        let result = game.tick(choose(&mut rng, &commands));

        let state = game.state();
        let runner = &state.runner;
        ensure!(runner.y <= runner.rest_y(), "Invariant failed: runner below the ground");
        ensure!(
            runner.airborne || runner.velocity_y == 0.0,
            "Invariant failed: grounded runner still moving"
        );
        ensure!(result.score >= before_score, "Invariant failed: score decreased");
        let cleared = game.log()[before_log..]
            .iter()
            .filter(|event| matches!(event, LogEvent::ObstacleCleared { .. }))
            .count() as u64;
        ensure!(
            result.score - before_score == cleared,
            "Invariant failed: score changed without a cleared obstacle"
        );
        for obstacle in state.obstacles.iter() {
            ensure!(obstacle.right() >= 0.0, "Invariant failed: exited obstacle kept alive");
        }
        let expected_len = match game.config().variant {
            GameVariant::Basic => 5,
            GameVariant::Advanced => 10,
        };
        ensure!(result.observation.len() == expected_len, "Invariant failed: observation length");
        if let Observation::Advanced(values) = &result.observation {
            ensure!(values.iter().all(|value| value.is_finite()), "Invariant failed: NaN feature");
        }
    }

    println!("Fuzzing completed successfully: {runs} finished runs, best score {best_score}.");
    Ok(())
}
