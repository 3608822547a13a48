//! Axis-aligned overlap tests between the runner and live obstacles.
//! Overlap is strict on both axes: boxes that only share an edge do not collide.

use crate::obstacles::ObstacleSet;
use crate::types::{ObstacleId, Rect};

pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// First obstacle overlapping `runner`, nearest first.
pub fn first_collision(runner: &Rect, obstacles: &ObstacleSet) -> Option<ObstacleId> {
    obstacles
        .sorted()
        .into_iter()
        .find(|obstacle| collides(runner, &obstacle.bounds()))
        .map(|obstacle| obstacle.id)
}
