//! Shared fixtures for the `game` test suite.
//! Builds runs with hand-placed obstacles and spawning switched off.

use super::*;
use crate::obstacles::ObstacleSpec;

pub(super) fn quiet_game(config: Config) -> Game {
    let mut game = Game::new(config, 12_345).expect("fixture config should be valid");
    game.state.spawner.postpone_until(u64::MAX);
    game
}

pub(super) fn place(game: &mut Game, x: f32, height: f32) -> ObstacleId {
    let width = game.config.spawn.obstacle_width;
    game.state.obstacles.insert(ObstacleSpec {
        class: SizeClass::for_height(height as u32),
        x,
        width,
        height,
    })
}

/// Game with a single low obstacle 300 px ahead of the runner at base speed.
pub(super) fn single_low_obstacle_fixture() -> (Game, ObstacleId) {
    let mut game = quiet_game(Config::advanced());
    let id = place(&mut game, 350.0, 25.0);
    (game, id)
}
