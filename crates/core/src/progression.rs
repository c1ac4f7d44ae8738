//! Progression module - score, level and speed
//!
//! Every score change runs the same catch-up routine: while the score has
//! reached the next threshold, the level goes up, the threshold moves by
//! `LEVEL_SCORE_STEP` and the tick delay shrinks by `SPEED_STEP_MS` (never
//! below `MIN_SPEED_MS`). A single large score jump can therefore cross
//! several levels at once.
//!
//! The manual level-up command skips the score entirely. Whether it also moves
//! the threshold is controlled by [`ManualLevelUp`].

use crate::types::{
    Direction, FIRST_LEVEL_SCORE, LEVEL_SCORE_STEP, MIN_SPEED_MS, SPEED_STEP_MS,
    VERTICAL_PENALTY_MS,
};

/// Threshold handling for the manual level-up command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualLevelUp {
    /// Leave the score threshold untouched (classic behavior). The next
    /// automatic level-up still happens at the old threshold.
    #[default]
    KeepThreshold,
    /// Move the threshold forward as if the level had been earned.
    AdvanceThreshold,
}

impl ManualLevelUp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Some(ManualLevelUp::KeepThreshold),
            "advance" => Some(ManualLevelUp::AdvanceThreshold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManualLevelUp::KeepThreshold => "keep",
            ManualLevelUp::AdvanceThreshold => "advance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    level: u32,
    next_level_score: u32,
    speed_ms: u32,
    manual: ManualLevelUp,
}

impl Progression {
    pub fn new(base_speed_ms: u32, manual: ManualLevelUp) -> Self {
        Self {
            score: 0,
            level: 1,
            next_level_score: FIRST_LEVEL_SCORE,
            speed_ms: base_speed_ms,
            manual,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn next_level_score(&self) -> u32 {
        self.next_level_score
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Add points and resolve every threshold crossed
    ///
    /// Returns the number of levels gained.
    pub fn add_points(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);

        let mut gained = 0;
        while self.score >= self.next_level_score {
            self.next_level_score = self.next_level_score.saturating_add(LEVEL_SCORE_STEP);
            self.bump_level();
            gained += 1;
        }
        gained
    }

    /// Manual level-up: one level and one speed step
    pub fn manual_level_up(&mut self) {
        self.bump_level();
        if self.manual == ManualLevelUp::AdvanceThreshold {
            self.next_level_score = self.next_level_score.saturating_add(LEVEL_SCORE_STEP);
        }
    }

    /// Delay before the next tick for a snake heading `direction`
    pub fn tick_delay_ms(&self, direction: Direction) -> u32 {
        if direction.is_vertical() {
            self.speed_ms + VERTICAL_PENALTY_MS
        } else {
            self.speed_ms
        }
    }

    fn bump_level(&mut self) {
        self.level = self.level.saturating_add(1);
        if self.speed_ms > MIN_SPEED_MS {
            self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(crate::types::BASE_SPEED_MS, ManualLevelUp::default())
    }
}
