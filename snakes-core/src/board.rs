//! The board: a linear track of numbered squares plus a fixed shortcut table.
//!
//! A shortcut teleports a player who lands exactly on its source square to a
//! different destination square. Ladders climb, snakes descend. The table is
//! validated once at construction and never changes for the life of a game.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Track length of the classic board.
pub const CLASSIC_SIZE: u16 = 50;

/// Shortcut table of the classic board.
pub const CLASSIC_SHORTCUTS: [(u16, u16); 8] = [
    (4, 16),
    (9, 31),
    (14, 7),
    (22, 35),
    (28, 42),
    (36, 44),
    (38, 20),
    (49, 33),
];

/// Columns in the boustrophedon grid layout used by renderers.
pub const GRID_COLUMNS: u16 = 10;

lazy_static::lazy_static! {
    static ref CLASSIC_TABLE: BTreeMap<u16, u16> =
        CLASSIC_SHORTCUTS.iter().copied().collect();
}

/// Error type for board construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("A board needs at least 2 squares, got {0}")]
    TooSmall(u16),
    #[error("Shortcut square {square} is outside the track 1..={size}")]
    OutOfRange { square: u16, size: u16 },
    #[error("Shortcut on square {0} points to itself")]
    SelfLoop(u16),
    #[error("The final square {0} cannot start a shortcut")]
    FinalSquareShortcut(u16),
    #[error("Shortcut destination {0} is itself a shortcut source")]
    Chained(u16),
}

/// Whether a shortcut climbs or descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutKind {
    Ladder,
    Snake,
}

/// An immutable playing board: squares 1..=size and the shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    shortcuts: BTreeMap<u16, u16>,
}

impl Board {
    /// Build a board, validating the shortcut table.
    pub fn new(
        size: u16,
        shortcuts: impl IntoIterator<Item = (u16, u16)>,
    ) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall(size));
        }

        let table: BTreeMap<u16, u16> = shortcuts.into_iter().collect();

        for (&from, &to) in &table {
            for square in [from, to] {
                if square < 1 || square > size {
                    return Err(BoardError::OutOfRange { square, size });
                }
            }
            if from == to {
                return Err(BoardError::SelfLoop(from));
            }
            if from == size {
                return Err(BoardError::FinalSquareShortcut(from));
            }
        }

        // One lookup per move is the rule; a destination that is also a
        // source would make that lookup order-dependent.
        for &to in table.values() {
            if table.contains_key(&to) {
                return Err(BoardError::Chained(to));
            }
        }

        Ok(Self {
            size,
            shortcuts: table,
        })
    }

    /// The classic 50-square board with its 8 shortcuts.
    pub fn classic() -> Self {
        Self {
            size: CLASSIC_SIZE,
            shortcuts: CLASSIC_TABLE.clone(),
        }
    }

    /// Track length.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Destination of the shortcut starting on `square`, if any.
    pub fn shortcut(&self, square: u16) -> Option<u16> {
        self.shortcuts.get(&square).copied()
    }

    /// Ladder or snake, for a square that starts a shortcut.
    pub fn shortcut_kind(&self, square: u16) -> Option<ShortcutKind> {
        self.shortcut(square).map(|to| {
            if to > square {
                ShortcutKind::Ladder
            } else {
                ShortcutKind::Snake
            }
        })
    }

    /// Whether some shortcut ends on `square`.
    pub fn is_shortcut_target(&self, square: u16) -> bool {
        self.shortcuts.values().any(|&to| to == square)
    }

    /// Iterate over all shortcuts as (source, destination) pairs.
    pub fn shortcuts(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.shortcuts.iter().map(|(&from, &to)| (from, to))
    }

    /// Rows in the grid layout.
    pub fn grid_rows(&self) -> u16 {
        (self.size + GRID_COLUMNS - 1) / GRID_COLUMNS
    }

    /// Grid cell of a square in the boustrophedon layout.
    ///
    /// Row 0 holds square 1. Even rows run left to right, odd rows right to
    /// left, so consecutive squares stay adjacent on screen. Pure function of
    /// the square number; renderers derive cell contents from this each frame
    /// rather than storing any grid state.
    pub fn grid_position(&self, square: u16) -> (u16, u16) {
        let index = square - 1;
        let row = index / GRID_COLUMNS;
        let col = if row % 2 == 0 {
            index % GRID_COLUMNS
        } else {
            GRID_COLUMNS - 1 - index % GRID_COLUMNS
        };
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board() {
        let board = Board::classic();
        assert_eq!(board.size(), 50);
        assert_eq!(board.shortcuts().count(), 8);
        assert_eq!(board.shortcut(4), Some(16));
        assert_eq!(board.shortcut(14), Some(7));
        assert_eq!(board.shortcut(5), None);
    }

    #[test]
    fn test_shortcut_kinds() {
        let board = Board::classic();
        assert_eq!(board.shortcut_kind(4), Some(ShortcutKind::Ladder));
        assert_eq!(board.shortcut_kind(38), Some(ShortcutKind::Snake));
        assert_eq!(board.shortcut_kind(10), None);
        assert!(board.is_shortcut_target(16));
        assert!(!board.is_shortcut_target(17));
    }

    #[test]
    fn test_rejects_self_loop() {
        let result = Board::new(50, [(10, 10)]);
        assert_eq!(result.unwrap_err(), BoardError::SelfLoop(10));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let result = Board::new(50, [(4, 51)]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::OutOfRange {
                square: 51,
                size: 50
            }
        );

        let result = Board::new(50, [(0, 5)]);
        assert!(matches!(result, Err(BoardError::OutOfRange { .. })));
    }

    #[test]
    fn test_rejects_final_square_source() {
        let result = Board::new(50, [(50, 10)]);
        assert_eq!(result.unwrap_err(), BoardError::FinalSquareShortcut(50));
    }

    #[test]
    fn test_rejects_chained_shortcuts() {
        let result = Board::new(50, [(4, 16), (16, 30)]);
        assert_eq!(result.unwrap_err(), BoardError::Chained(16));
    }

    #[test]
    fn test_rejects_tiny_board() {
        assert_eq!(Board::new(1, []).unwrap_err(), BoardError::TooSmall(1));
    }

    #[test]
    fn test_grid_positions_snake_across_rows() {
        let board = Board::classic();
        assert_eq!(board.grid_position(1), (0, 0));
        assert_eq!(board.grid_position(10), (0, 9));
        // Row 1 runs right to left, so 11 sits directly above 10.
        assert_eq!(board.grid_position(11), (1, 9));
        assert_eq!(board.grid_position(20), (1, 0));
        assert_eq!(board.grid_position(21), (2, 0));
        assert_eq!(board.grid_position(50), (4, 9));
        assert_eq!(board.grid_rows(), 5);
    }
}
