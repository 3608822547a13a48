use crate::config::Config;
use crate::error::ReplayError;
use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_score: u64,
    pub final_tick: u64,
    pub terminal: bool,
    pub final_snapshot_hash: u64,
}

/// Rebuild a run from its journal, stopping at the collision or after `max_ticks`.
pub fn replay_to_end(
    config: &Config,
    journal: &InputJournal,
    max_ticks: u64,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat(journal.format_version));
    }
    let current = config.fingerprint()?;
    if journal.config_fingerprint != current {
        return Err(ReplayError::ConfigMismatch {
            recorded: journal.config_fingerprint.clone(),
            current,
        });
    }
    let mut previous = 0;
    for record in &journal.inputs {
        if record.tick <= previous {
            return Err(ReplayError::OutOfOrder { tick: record.tick, previous });
        }
        previous = record.tick;
    }

    let mut game = Game::new(config.clone(), journal.seed)?;
    let mut inputs = journal.inputs.iter().peekable();

    while !game.is_terminal() && game.current_tick() < max_ticks {
        let next_tick = game.current_tick() + 1;
        let command =
            inputs.next_if(|record| record.tick == next_tick).map(|record| record.command);
        game.tick(command);
    }

    let remaining = inputs.count();
    if remaining > 0 {
        return Err(ReplayError::UnconsumedInputs { remaining, final_tick: game.current_tick() });
    }

    Ok(ReplayResult {
        final_score: game.score(),
        final_tick: game.current_tick(),
        terminal: game.is_terminal(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
