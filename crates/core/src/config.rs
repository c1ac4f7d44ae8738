//! Game configuration
//!
//! Defaults reproduce the classic 25x20 game. Values can be overridden from the
//! environment:
//!
//! - `SNAKE_WIDTH` / `SNAKE_HEIGHT`: playfield size including the border
//! - `SNAKE_SEED`: RNG seed (random per run when unset)
//! - `SNAKE_BASE_SPEED_MS`: tick delay at level 1
//! - `SNAKE_SPAWN_ATTEMPTS`: random draws before the spawner scans
//! - `SNAKE_MANUAL_LEVEL_UP`: `keep` or `advance` (see [`ManualLevelUp`])
//!
//! Unparsable values fall back to the default.

use anyhow::{bail, Result};

use crate::field::Field;
use crate::progression::ManualLevelUp;
use crate::types::{
    BASE_SPEED_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION, SPAWN_ATTEMPTS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub seed: Option<u32>,
    pub base_speed_ms: u32,
    pub spawn_attempts: u32,
    pub manual_level_up: ManualLevelUp,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            base_speed_ms: BASE_SPEED_MS,
            spawn_attempts: SPAWN_ATTEMPTS,
            manual_level_up: ManualLevelUp::KeepThreshold,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            width: parsed("SNAKE_WIDTH").unwrap_or(defaults.width),
            height: parsed("SNAKE_HEIGHT").unwrap_or(defaults.height),
            seed: parsed("SNAKE_SEED"),
            base_speed_ms: parsed("SNAKE_BASE_SPEED_MS").unwrap_or(defaults.base_speed_ms),
            spawn_attempts: parsed("SNAKE_SPAWN_ATTEMPTS").unwrap_or(defaults.spawn_attempts),
            manual_level_up: env::var("SNAKE_MANUAL_LEVEL_UP")
                .ok()
                .and_then(|s| ManualLevelUp::from_str(&s))
                .unwrap_or(defaults.manual_level_up),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn field(&self) -> Field {
        Field::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if v < MIN_DIMENSION {
                bail!("{} must be at least {} (got {})", name, MIN_DIMENSION, v);
            }
            if v > MAX_DIMENSION {
                bail!("{} must be at most {} (got {})", name, MAX_DIMENSION, v);
            }
        }
        if self.base_speed_ms == 0 {
            bail!("base speed must be positive");
        }
        Ok(())
    }
}
