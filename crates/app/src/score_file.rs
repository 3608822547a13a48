//! On-disk score history for the desktop app.

use dino_core::ScoreHistory;
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SCORE_FILE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreFile {
    pub format_version: u32,
    pub history: ScoreHistory,
    pub updated_at_unix_ms: u64,
}

impl ScoreFile {
    pub fn new(history: ScoreHistory) -> Self {
        let updated_at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_millis() as u64);
        Self { format_version: SCORE_FILE_FORMAT_VERSION, history, updated_at_unix_ms }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "DinoRunner").map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("score_history.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if file.format_version != SCORE_FILE_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported score file version {}", file.format_version),
            ));
        }
        Ok(file)
    }
}

/// Loads the history at `path`, falling back to an empty one when missing or unreadable.
pub fn load_history_or_default(path: Option<&Path>) -> ScoreHistory {
    let Some(path) = path else {
        return ScoreHistory::new();
    };
    match ScoreFile::load(path) {
        Ok(file) => file.history.normalized(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => ScoreHistory::new(),
        Err(err) => {
            warn!("ignoring score history at {}: {err}", path.display());
            ScoreHistory::new()
        }
    }
}
