use std::fs;

use dino_core::{Config, Game, InputJournal, PolicyKind, ReplayError, replay_to_end};
use tempfile::tempdir;

fn record(config: &Config, seed: u64, kind: PolicyKind, max_ticks: u64) -> Game {
    let policy = kind.build(config);
    let mut game = Game::new(config.clone(), seed).expect("valid config");
    while game.current_tick() < max_ticks && !game.is_terminal() {
        game.tick_with_policy(policy.as_ref());
    }
    game
}

#[test]
fn journal_survives_a_json_file_roundtrip() {
    let config = Config::advanced();
    let game = record(&config, 31, PolicyKind::SpeedScaled, 6000);
    assert!(!game.journal().inputs.is_empty(), "autopilot should have jumped");

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run.json");
    let json = serde_json::to_string_pretty(game.journal()).expect("journal serializes");
    fs::write(&path, json).expect("write journal");

    let loaded: InputJournal =
        serde_json::from_str(&fs::read_to_string(&path).expect("read journal"))
            .expect("journal parses");
    assert_eq!(&loaded, game.journal());

    let result = replay_to_end(&config, &loaded, 6000).expect("replay succeeds");
    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
    assert_eq!(result.final_score, game.score());
}

#[test]
fn basic_variant_journal_replays_under_basic_config_only() {
    let config = Config::basic();
    let game = record(&config, 5, PolicyKind::Basic, 1500);

    let replayed = replay_to_end(&config, game.journal(), 1500).expect("replay succeeds");
    assert_eq!(replayed.final_tick, 1500);
    assert!(!replayed.terminal);
    assert_eq!(replayed.final_snapshot_hash, game.snapshot_hash());

    let err = replay_to_end(&Config::advanced(), game.journal(), 1500).expect_err("mismatch");
    assert!(matches!(err, ReplayError::ConfigMismatch { .. }));
}
