//! Obstacle ring
//!
//! A fixed number of obstacle pairs scroll left. A pair that leaves the
//! screen is moved behind the most recently recycled pair with a fresh gap
//! offset, so the slots are never reallocated or reordered in memory. Two
//! cursors track order instead: `next_slot` (first pair the player has not
//! yet passed) and `last_recycled` (back of the horizontal sequence).

use crate::error::{GameError, Result};
use crate::{Config, GameRng};
use log::debug;

/// Which way an obstacle image faces.
///
/// `FacingUp` sits below the canvas center and its top edge is the gap
/// floor; `FacingDown` sits above and its bottom edge is the gap ceiling.
/// The `FacingUp` half drives recycling for its pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfKind {
    FacingUp,
    FacingDown,
}

/// One image of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHalf {
    pub kind: HalfKind,
    pub x: f32,
    pub y: f32,
    pub y_offset: i32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl ObstacleHalf {
    fn new(kind: HalfKind, x: f32, y_offset: i32, config: &Config) -> Self {
        let mut half = Self {
            kind,
            x,
            y: 0.0,
            y_offset,
            width: config.obstacle_width,
            height: config.obstacle_height,
            speed: config.obstacle_speed,
        };
        half.set_y_offset(y_offset, config);
        half
    }

    fn set_y_offset(&mut self, y_offset: i32, config: &Config) {
        self.y_offset = y_offset;
        self.y = match self.kind {
            HalfKind::FacingUp => config.canvas_mid_height() + config.obstacle_gap + y_offset as f32,
            HalfKind::FacingDown => -config.obstacle_gap + y_offset as f32,
        };
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge has moved fully past the left edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.x <= -self.width
    }
}

/// Two halves sharing one horizontal position and one gap offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    slot: usize,
    pub lower: ObstacleHalf,
    pub upper: ObstacleHalf,
}

impl ObstaclePair {
    /// Build the pair for `slot` at its spawn position.
    ///
    /// Fails if `slot` is not an identity inside the configured ring.
    pub fn new(slot: usize, y_offset: i32, config: &Config) -> Result<Self> {
        if slot >= config.ring_size {
            return Err(GameError::InvalidSlot {
                slot,
                ring_size: config.ring_size,
            });
        }
        let x = config.canvas_width + slot as f32 * config.obstacle_offset;
        Ok(Self {
            slot,
            lower: ObstacleHalf::new(HalfKind::FacingUp, x, y_offset, config),
            upper: ObstacleHalf::new(HalfKind::FacingDown, x, y_offset, config),
        })
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The half whose position decides recycling and scoring
    pub fn driving(&self) -> &ObstacleHalf {
        &self.lower
    }

    pub fn x(&self) -> f32 {
        self.driving().x
    }

    pub fn y_offset(&self) -> i32 {
        self.driving().y_offset
    }

    pub fn halves(&self) -> [&ObstacleHalf; 2] {
        [&self.lower, &self.upper]
    }

    /// Bottom edge of the upper half
    pub fn gap_ceiling(&self) -> f32 {
        self.upper.bottom()
    }

    /// Top edge of the lower half
    pub fn gap_floor(&self) -> f32 {
        self.lower.y
    }

    fn advance(&mut self) {
        let x = self.lower.x - self.lower.speed;
        self.set_x(x);
    }

    fn set_x(&mut self, x: f32) {
        self.lower.x = x;
        self.upper.x = x;
    }

    fn set_y_offset(&mut self, y_offset: i32, config: &Config) {
        self.lower.set_y_offset(y_offset, config);
        self.upper.set_y_offset(y_offset, config);
    }
}

/// What one ring update did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingTick {
    pub recycled: u32,
    pub passed: u32,
}

/// Fixed-size ring of obstacle pairs
#[derive(Debug, Clone)]
pub struct ObstacleRing {
    pairs: Vec<ObstaclePair>,
    next_slot: usize,
    last_recycled: usize,
}

impl ObstacleRing {
    /// Spawn `config.ring_size` pairs. Fails on a config the ring cannot draw offsets from.
    pub fn new(config: &Config, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let pairs = (0..config.ring_size)
            .map(|slot| {
                let y_offset = rng.range_inclusive(config.min_y_offset, config.max_y_offset);
                ObstaclePair::new(slot, y_offset, config)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            pairs,
            next_slot: 0,
            last_recycled: config.ring_size - 1,
        })
    }

    /// Return every pair to its spawn position with fresh offsets, in place.
    ///
    /// Leaves the ring untouched if `config` does not validate.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) -> Result<()> {
        config.validate()?;
        for (slot, pair) in self.pairs.iter_mut().enumerate() {
            let y_offset = rng.range_inclusive(config.min_y_offset, config.max_y_offset);
            pair.set_x(config.canvas_width + slot as f32 * config.obstacle_offset);
            pair.set_y_offset(y_offset, config);
        }
        self.next_slot = 0;
        self.last_recycled = self.pairs.len() - 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn pair(&self, slot: usize) -> Option<&ObstaclePair> {
        self.pairs.get(slot)
    }

    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    pub fn last_recycled(&self) -> usize {
        self.last_recycled
    }

    /// First pair the player has not yet passed
    pub fn next_pair(&self) -> &ObstaclePair {
        &self.pairs[self.next_slot]
    }

    /// One logic tick: scroll every pair, then recycle and score in slot order.
    ///
    /// `player_right` is the player's right edge; a pass is counted when the
    /// tracked pair's right edge moves strictly left of it.
    pub fn advance(&mut self, player_right: f32, config: &Config, rng: &mut GameRng) -> RingTick {
        let mut tick = RingTick::default();
        let n = self.pairs.len();

        for pair in &mut self.pairs {
            pair.advance();
        }

        for slot in 0..n {
            if self.pairs[slot].driving().is_off_screen() {
                self.recycle(slot, config, rng);
                tick.recycled += 1;
            }

            if slot == self.next_slot && self.pairs[slot].driving().right() < player_right {
                self.next_slot = (self.next_slot + 1) % n;
                tick.passed += 1;
            }
        }

        tick
    }

    fn recycle(&mut self, slot: usize, config: &Config, rng: &mut GameRng) {
        let x = self.pairs[self.last_recycled].x() + config.obstacle_offset;
        let y_offset = rng.range_inclusive(config.min_y_offset, config.max_y_offset);

        let pair = &mut self.pairs[slot];
        pair.set_x(x);
        pair.set_y_offset(y_offset, config);
        self.last_recycled = (self.last_recycled + 1) % self.pairs.len();

        debug!("recycled obstacle slot {} to x={} y_offset={}", slot, x, y_offset);
    }

    #[cfg(test)]
    pub(crate) fn pair_mut(&mut self, slot: usize) -> &mut ObstaclePair {
        &mut self.pairs[slot]
    }
}
