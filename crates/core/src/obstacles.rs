//! Live obstacle collection: leftward scrolling, pruning, and look-ahead queries.
//! This module owns obstacle storage and exit detection.
//! It does not own spawning decisions or scoring policy beyond reporting exits.

use std::cmp::Ordering;

use slotmap::SlotMap;

use crate::types::{ObstacleId, Rect, SizeClass};

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub class: SizeClass,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// Shape of an obstacle about to enter the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleSpec {
    pub class: SizeClass,
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug)]
pub struct ObstacleSet {
    obstacles: SlotMap<ObstacleId, Obstacle>,
    ground_height: f32,
    left_edge: f32,
}

impl ObstacleSet {
    pub fn new(ground_height: f32) -> Self {
        Self { obstacles: SlotMap::with_key(), ground_height, left_edge: 0.0 }
    }

    /// Place an obstacle standing on the ground line.
    pub fn insert(&mut self, spec: ObstacleSpec) -> ObstacleId {
        let ground_height = self.ground_height;
        self.obstacles.insert_with_key(|id| Obstacle {
            id,
            class: spec.class,
            x: spec.x,
            y: ground_height - spec.height,
            width: spec.width,
            height: spec.height,
        })
    }

    /// Scroll every obstacle left by `speed` and drop those whose right edge passed the
    /// left boundary. Returns the dropped ids; each appears exactly once.
    pub fn advance(&mut self, speed: f32) -> Vec<ObstacleId> {
        let left_edge = self.left_edge;
        let mut exited = Vec::new();
        self.obstacles.retain(|id, obstacle| {
            obstacle.x -= speed;
            let live = obstacle.right() >= left_edge;
            if !live {
                exited.push(id);
            }
            live
        });
        exited
    }

    /// Obstacles whose left edge is strictly right of `x`, nearest first, at most `limit`.
    pub fn ahead_of(&self, x: f32, limit: usize) -> Vec<&Obstacle> {
        let mut ahead: Vec<&Obstacle> =
            self.obstacles.values().filter(|obstacle| obstacle.x > x).collect();
        ahead.sort_by(|left, right| by_position(left, right));
        ahead.truncate(limit);
        ahead
    }

    /// All live obstacles ordered by position.
    pub fn sorted(&self) -> Vec<&Obstacle> {
        let mut all: Vec<&Obstacle> = self.obstacles.values().collect();
        all.sort_by(|left, right| by_position(left, right));
        all
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.values()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

fn by_position(left: &Obstacle, right: &Obstacle) -> Ordering {
    left.x.total_cmp(&right.x).then_with(|| left.height.total_cmp(&right.height))
}
