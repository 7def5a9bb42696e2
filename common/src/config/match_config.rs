use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::tictactoe::Difficulty;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.yaml";

pub const MAX_TOTAL_ROUNDS: u32 = 99;
pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    pub total_rounds: u32,
    /// Pause before the computer's reply is shown. Presentation only.
    pub computer_move_delay_ms: u64,
    /// Seeds the medium bot. Unset means a fresh seed per match.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            total_rounds: 5,
            computer_move_delay_ms: 500,
            seed: None,
        }
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.total_rounds == 0 || self.total_rounds > MAX_TOTAL_ROUNDS {
            return Err(format!(
                "total_rounds must be between 1 and {}, got {}",
                MAX_TOTAL_ROUNDS, self.total_rounds
            ));
        }
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}, got {}",
                MAX_COMPUTER_MOVE_DELAY_MS, self.computer_move_delay_ms
            ));
        }
        Ok(())
    }
}
