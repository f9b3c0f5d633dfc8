//! Pipe pairs: spawning, scrolling and pruning.
//!
//! Pipes are stored as individual segments in spawn order. Each spawn
//! appends a top segment followed by its bottom segment, so the last
//! element always belongs to the newest pair.

use crate::core::config::SessionConfig;
use crate::game::geometry::Rect;
use rand::Rng;
use tracing::{debug, trace};

/// Which half of a pipe pair a segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
}

/// One pipe segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub segment: Segment,
    /// Spawn counter shared by both segments of a pair.
    pub pair_id: u64,
}

/// All live pipe segments, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    pairs_spawned: u64,
}

impl ObstacleField {
    /// A field holding exactly one pair at the right boundary.
    pub fn initialize<R: Rng>(config: &SessionConfig, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.spawn_pair(config, rng);
        field
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.obstacles.iter().map(|o| &o.rect)
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn pairs_spawned(&self) -> u64 {
        self.pairs_spawned
    }

    /// Append a new pair at x = field_width with a random gap position.
    ///
    /// The top height is a whole number drawn uniformly from
    /// `[min_margin, field_height - pipe_gap - min_margin]`; the bottom
    /// height fills the rest so `top + gap + bottom == field_height`.
    pub fn spawn_pair<R: Rng>(&mut self, config: &SessionConfig, rng: &mut R) {
        let (lo, hi) = config.top_height_range();
        let (lo, hi) = (lo.ceil() as i64, hi.floor() as i64);
        let top_height = if hi > lo {
            rng.gen_range(lo..=hi) as f64
        } else {
            lo as f64
        };
        let bottom_height = config.field_height - config.pipe_gap - top_height;

        let x = config.field_width;
        let pair_id = self.pairs_spawned;
        self.pairs_spawned += 1;

        self.obstacles.push(Obstacle {
            rect: Rect::new(x, 0.0, config.pipe_width, top_height),
            segment: Segment::Top,
            pair_id,
        });
        self.obstacles.push(Obstacle {
            rect: Rect::new(
                x,
                config.field_height - bottom_height,
                config.pipe_width,
                bottom_height,
            ),
            segment: Segment::Bottom,
            pair_id,
        });

        debug!(pair_id, top_height, bottom_height, "spawned pipe pair");
    }

    /// Move every segment left by the scroll speed.
    pub fn scroll(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.x -= speed;
        }
    }

    /// Spawn one pair if the newest segment has travelled `pipe_interval`
    /// from the right boundary. Returns whether a pair was spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, config: &SessionConfig, rng: &mut R) -> bool {
        let due = match self.obstacles.last() {
            Some(newest) => newest.rect.x < config.field_width - config.pipe_interval,
            None => true,
        };
        if due {
            self.spawn_pair(config, rng);
        }
        due
    }

    /// Drop segments with `x < -pipe_width`, keeping the order of the rest.
    /// Returns how many segments were removed.
    pub fn prune(&mut self, pipe_width: f64) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.rect.x >= -pipe_width);
        let removed = before - self.obstacles.len();
        if removed > 0 {
            trace!(removed, remaining = self.obstacles.len(), "pruned pipes");
        }
        removed
    }

    /// The first pair whose right edge is still ahead of `x`, as
    /// (top segment, bottom segment).
    pub fn next_pair_ahead_of(&self, x: f64) -> Option<(&Rect, &Rect)> {
        self.obstacles
            .chunks(2)
            .filter_map(|pair| match pair {
                [top, bottom] if top.pair_id == bottom.pair_id => Some((&top.rect, &bottom.rect)),
                _ => None,
            })
            .find(|(top, _)| top.right() > x)
    }
}
