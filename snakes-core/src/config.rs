//! Configuration for creating a new game session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{BoardError, CLASSIC_SHORTCUTS, CLASSIC_SIZE};

/// Player roster size of the classic game.
pub const CLASSIC_PLAYERS: usize = 6;

/// Errors from game configuration, raised at game start and never at roll time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("A game needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),
}

/// Configuration for a game session.
///
/// The default is the classic instance: a 50-square track, 6 players, and
/// the classic shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Track length.
    pub board_size: u16,

    /// Number of participants.
    pub player_count: usize,

    /// Shortcut table as (source, destination) pairs.
    pub shortcuts: Vec<(u16, u16)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: CLASSIC_SIZE,
            player_count: CLASSIC_PLAYERS,
            shortcuts: CLASSIC_SHORTCUTS.to_vec(),
        }
    }
}

impl GameConfig {
    /// Set the track length.
    pub fn with_board_size(mut self, size: u16) -> Self {
        self.board_size = size;
        self
    }

    /// Set the number of players.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Replace the shortcut table.
    pub fn with_shortcuts(mut self, shortcuts: impl IntoIterator<Item = (u16, u16)>) -> Self {
        self.shortcuts = shortcuts.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 50);
        assert_eq!(config.player_count, 6);
        assert_eq!(config.shortcuts.len(), 8);
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::default()
            .with_board_size(100)
            .with_player_count(4)
            .with_shortcuts([(3, 20), (90, 50)]);

        assert_eq!(config.board_size, 100);
        assert_eq!(config.player_count, 4);
        assert_eq!(config.shortcuts, vec![(3, 20), (90, 50)]);
    }
}
