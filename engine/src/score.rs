use serde::{Deserialize, Serialize};

/// Scoring knobs for a session. The score never drops below zero; the
/// win bonus decays with elapsed time down to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePolicy {
    pub per_move_delta: i32,
    pub win_bonus_base: u32,
    pub win_bonus_decay_per_second: u32,
    pub lose_penalty: u32,
}

impl ScorePolicy {
    /// +10 per accepted move, decaying win bonus, flat lose penalty.
    pub fn classic() -> Self {
        Self {
            per_move_delta: 10,
            win_bonus_base: 1500,
            win_bonus_decay_per_second: 5,
            lose_penalty: 200,
        }
    }

    /// Every move costs points instead of earning them.
    pub fn penalizing() -> Self {
        Self {
            per_move_delta: -10,
            ..Self::classic()
        }
    }

    /// Score moves only at win or loss.
    pub fn terminal_only() -> Self {
        Self {
            per_move_delta: 0,
            ..Self::classic()
        }
    }

    pub fn apply_move_delta(&self, score: u32) -> u32 {
        let next = i64::from(score) + i64::from(self.per_move_delta);
        next.clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn win_bonus(&self, elapsed_seconds: u32) -> u32 {
        let decay = u64::from(self.win_bonus_decay_per_second) * u64::from(elapsed_seconds);
        u64::from(self.win_bonus_base).saturating_sub(decay) as u32
    }

    pub fn apply_lose_penalty(&self, score: u32) -> u32 {
        score.saturating_sub(self.lose_penalty)
    }
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::classic()
    }
}
