use serde::{Deserialize, Serialize};

use crate::types::Command;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every command fed to a run, enough to rebuild it from its seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub config_fingerprint: String,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Tick on which the command was applied, starting from 1.
    pub tick: u64,
    pub command: Command,
}

impl InputJournal {
    pub fn new(seed: u64, config_fingerprint: String) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            config_fingerprint,
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, tick: u64, command: Command) {
        self.inputs.push(InputRecord { tick, command });
    }
}
