//! Session configuration.

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors raised while validating a [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported board size {size} (expected {min}..={max})")]
    UnsupportedBoardSize { size: usize, min: usize, max: usize },
}

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Check that the configured size is one the engine can play on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nineteen() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 19);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_sizes() {
        assert_eq!(
            GameConfig::with_board_size(1).validate(),
            Err(ConfigError::UnsupportedBoardSize {
                size: 1,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE
            })
        );
        assert!(GameConfig::with_board_size(26).validate().is_err());
        assert!(GameConfig::with_board_size(25).validate().is_ok());
        assert!(GameConfig::with_board_size(2).validate().is_ok());
    }
}
