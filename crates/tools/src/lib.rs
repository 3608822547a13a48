//! Shared plumbing for the command-line tools: logger setup and file loading.

use anyhow::{Context, Result};
use dino_core::{Config, GameVariant, InputJournal};
use std::fs;
use std::path::Path;

pub mod logging;

/// Resolve the run configuration from an optional TOML file or a named preset.
///
/// Keys missing from the file fall back to the advanced preset's values.
pub fn load_config(path: Option<&Path>, variant: GameVariant) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            parse_config(&text)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => Config::for_variant(variant),
    };
    config.validate().context("Config rejected")?;
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

pub fn read_journal(path: &Path) -> Result<InputJournal> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    serde_json::from_str(&data).context("Failed to deserialize journal JSON")
}

pub fn write_journal(path: &Path, journal: &InputJournal) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write journal file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dino_core::{Command, SizeMix};
    use tempfile::tempdir;

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = parse_config("base_speed = 12.0\nramp_rate = 0.002\n").unwrap();
        assert_eq!(config.base_speed, 12.0);
        assert_eq!(config.ramp_rate, 0.002);
        assert_eq!(config.field_width, Config::default().field_width);
        assert_eq!(config.spawn, Config::default().spawn);
    }

    #[test]
    fn toml_can_select_a_uniform_size_mix() {
        let text = r#"
variant = "basic"

[spawn.size_mix]
kind = "uniform"
min_height = 25
max_height = 45
"#;
        let config = parse_config(text).unwrap();
        assert_eq!(config.spawn.size_mix, SizeMix::Uniform { min_height: 25, max_height: 45 });
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "gravity = -1.0\n").unwrap();
        let err = load_config(Some(&path), GameVariant::Advanced).unwrap_err();
        assert!(format!("{err:#}").contains("gravity"), "unexpected error: {err:#}");
    }

    #[test]
    fn presets_are_used_without_a_file() {
        let config = load_config(None, GameVariant::Basic).unwrap();
        assert_eq!(config, Config::basic());
    }

    #[test]
    fn journal_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        let mut journal = InputJournal::new(9, "abc".to_string());
        journal.append(3, Command::Jump);
        journal.append(40, Command::SmallJump);

        write_journal(&path, &journal).unwrap();
        assert_eq!(read_journal(&path).unwrap(), journal);
    }
}
