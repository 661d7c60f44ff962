use serde::{Deserialize, Serialize};

use super::Validate;
use crate::score::ScorePolicy;
use crate::types::{
    DEFAULT_GRID_SIZE, DEFAULT_MOVE_LIMIT, DEFAULT_SHUFFLE_MAX_STEPS, DEFAULT_SHUFFLE_MIN_STEPS,
    MAX_GRID_SIZE, MIN_GRID_SIZE,
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    pub grid_size: usize,
    pub move_limit: u32,
    pub shuffle_min_steps: u32,
    pub shuffle_max_steps: u32,
    pub score_policy: ScorePolicy,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "Grid size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            ));
        }
        if self.move_limit == 0 {
            return Err(format!(
                "Move limit must be at least 1, got {}",
                self.move_limit
            ));
        }
        if self.shuffle_min_steps == 0 {
            return Err(format!(
                "Shuffle steps must be at least 1, got {}",
                self.shuffle_min_steps
            ));
        }
        if self.shuffle_min_steps > self.shuffle_max_steps {
            return Err(format!(
                "Shuffle step range is inverted: min {} exceeds max {}",
                self.shuffle_min_steps, self.shuffle_max_steps
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            move_limit: DEFAULT_MOVE_LIMIT,
            shuffle_min_steps: DEFAULT_SHUFFLE_MIN_STEPS,
            shuffle_max_steps: DEFAULT_SHUFFLE_MAX_STEPS,
            score_policy: ScorePolicy::classic(),
        }
    }
}
