//! Game parameters
//!
//! Parameters are entered on the command line (both binaries flatten
//! [`GameConfig`] into their clap parser) or, for the text game, at the
//! setup prompt.

use crate::board::{obstacles, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

pub const DEFAULT_OBSTACLES: usize = 20;
pub const DEFAULT_INITIAL_SCORE: u32 = 100;

/// Parameters for one session
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct GameConfig {
    /// Board size (N for an NxN board)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub board_size: u8,

    /// Number of obstacles placed at random
    #[arg(long, default_value_t = DEFAULT_OBSTACLES)]
    pub obstacles: usize,

    /// Starting score
    #[arg(long, default_value_t = DEFAULT_INITIAL_SCORE)]
    pub initial_score: u32,

    /// Seed for reproducible obstacle layouts
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            obstacles: DEFAULT_OBSTACLES,
            initial_score: DEFAULT_INITIAL_SCORE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check ranges before a board is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.initial_score == 0 {
            return Err(ConfigError::ZeroInitialScore);
        }
        let capacity = obstacles::capacity(self.board_size);
        if self.obstacles > capacity {
            return Err(ConfigError::TooManyObstacles {
                requested: self.obstacles,
                capacity,
            });
        }
        Ok(())
    }
}
