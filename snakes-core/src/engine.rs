//! The turn engine: one atomic state transition per completed turn.
//!
//! Movement, shortcut lookup, win detection, and turn rotation are all
//! facets of [`GameState::advance_turn`]. The engine performs exactly one
//! shortcut lookup per move and never chases chains (the board guarantees
//! there are none).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::dice::DIE_SIDES;

/// Contract violations surfaced by the engine.
///
/// Neither occurs in normal play: the renderer disables the roll action once
/// a winner exists, and the shipped rollers only produce values in [1, 6].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("The game is over; reset before rolling again")]
    GameOver,
    #[error("Die value {0} is outside 1..=6")]
    InvalidDie(u16),
}

/// What happened on a single completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Plain move forward.
    Moved { player: usize, from: u16, to: u16 },
    /// Landed on a ladder foot and climbed.
    Climbed {
        player: usize,
        from: u16,
        landed: u16,
        to: u16,
    },
    /// Landed on a snake head and slid down.
    Descended {
        player: usize,
        from: u16,
        landed: u16,
        to: u16,
    },
    /// The roll would pass the final square; position unchanged, turn forfeited.
    Overshot { player: usize, at: u16, rolled: u16 },
    /// Landed exactly on the final square.
    Won { player: usize, at: u16 },
}

impl TurnOutcome {
    /// Index of the player who took this turn.
    pub fn player(&self) -> usize {
        match *self {
            TurnOutcome::Moved { player, .. }
            | TurnOutcome::Climbed { player, .. }
            | TurnOutcome::Descended { player, .. }
            | TurnOutcome::Overshot { player, .. }
            | TurnOutcome::Won { player, .. } => player,
        }
    }

    /// Human-readable narration of the outcome.
    pub fn describe(&self) -> String {
        match *self {
            TurnOutcome::Moved { player, to, .. } => {
                format!("Player {} moved to {to}", player + 1)
            }
            TurnOutcome::Climbed {
                player, landed, to, ..
            } => {
                format!("Player {} found a ladder on {landed} and climbed to {to}", player + 1)
            }
            TurnOutcome::Descended {
                player, landed, to, ..
            } => {
                format!("Player {} hit a snake on {landed} and slid down to {to}", player + 1)
            }
            TurnOutcome::Overshot { player, rolled, .. } => {
                format!("Player {} rolled {rolled} and overshot the board; turn skipped", player + 1)
            }
            TurnOutcome::Won { player, at } => {
                format!("Player {} reached {at} and wins the game!", player + 1)
            }
        }
    }
}

/// The mutable state of one game session.
///
/// Created with every position at square 1, mutated exactly once per
/// completed turn, reset by an explicit [`GameState::reset`]. Once set, the
/// winner is cleared only by a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    positions: Vec<u16>,
    current_player: usize,
    last_roll: Option<u16>,
    winner: Option<usize>,
    status: String,
}

impl GameState {
    /// Fresh state for `player_count` players, all on square 1.
    pub fn new(player_count: usize) -> Self {
        Self {
            positions: vec![1; player_count],
            current_player: 0,
            last_roll: None,
            winner: None,
            status: String::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.positions.len()
    }

    /// Current position of every player, indexed by player.
    pub fn positions(&self) -> &[u16] {
        &self.positions
    }

    /// Index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The most recent die value, None before the first roll.
    pub fn last_roll(&self) -> Option<u16> {
        self.last_roll
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether a winner has been declared.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Narration of the last completed turn, empty before the first roll.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Advance one turn for the current player with the given die value.
    ///
    /// Rejects the call outright once a winner exists and for die values
    /// outside [1, 6]; in both cases the state is untouched. On success the
    /// turn rotates to the next player except on a win, where the winner
    /// keeps the current slot and the state becomes terminal until reset.
    pub fn advance_turn(&mut self, board: &Board, die: u16) -> Result<TurnOutcome, TurnError> {
        if self.winner.is_some() {
            return Err(TurnError::GameOver);
        }
        if die < 1 || die > DIE_SIDES {
            return Err(TurnError::InvalidDie(die));
        }

        let player = self.current_player;
        let from = self.positions[player];
        let tentative = from + die;

        let outcome = if tentative > board.size() {
            TurnOutcome::Overshot {
                player,
                at: from,
                rolled: die,
            }
        } else if tentative == board.size() {
            self.positions[player] = tentative;
            self.winner = Some(player);
            TurnOutcome::Won {
                player,
                at: tentative,
            }
        } else if let Some(to) = board.shortcut(tentative) {
            self.positions[player] = to;
            if to > tentative {
                TurnOutcome::Climbed {
                    player,
                    from,
                    landed: tentative,
                    to,
                }
            } else {
                TurnOutcome::Descended {
                    player,
                    from,
                    landed: tentative,
                    to,
                }
            }
        } else {
            self.positions[player] = tentative;
            TurnOutcome::Moved {
                player,
                from,
                to: tentative,
            }
        };

        self.last_roll = Some(die);
        self.status = outcome.describe();
        if !matches!(outcome, TurnOutcome::Won { .. }) {
            self.current_player = (self.current_player + 1) % self.positions.len();
        }

        Ok(outcome)
    }

    /// Reinitialize every field to its start value.
    pub fn reset(&mut self) {
        for position in &mut self.positions {
            *position = 1;
        }
        self.current_player = 0;
        self.last_roll = None;
        self.winner = None;
        self.status.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_board(size: u16) -> Board {
        Board::new(size, []).unwrap()
    }

    #[test]
    fn test_plain_move_rotates_turn() {
        let board = plain_board(20);
        let mut state = GameState::new(3);

        let outcome = state.advance_turn(&board, 4).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                player: 0,
                from: 1,
                to: 5
            }
        );
        assert_eq!(state.positions(), &[5, 1, 1]);
        assert_eq!(state.current_player(), 1);
        assert_eq!(state.last_roll(), Some(4));
        assert_eq!(state.status(), "Player 1 moved to 5");
    }

    #[test]
    fn test_ladder_climb() {
        let board = Board::new(20, [(5, 15)]).unwrap();
        let mut state = GameState::new(2);

        let outcome = state.advance_turn(&board, 4).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Climbed {
                player: 0,
                from: 1,
                landed: 5,
                to: 15
            }
        );
        assert_eq!(state.positions()[0], 15);
        assert_eq!(state.current_player(), 1);
    }

    #[test]
    fn test_snake_descent() {
        let board = Board::new(20, [(6, 2)]).unwrap();
        let mut state = GameState::new(2);

        let outcome = state.advance_turn(&board, 5).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Descended {
                player: 0,
                from: 1,
                landed: 6,
                to: 2
            }
        );
        assert_eq!(state.positions()[0], 2);
    }

    #[test]
    fn test_overshoot_skips_turn() {
        let board = plain_board(5);
        let mut state = GameState::new(2);

        // 1 + 6 = 7 > 5: position unchanged, turn still rotates.
        let outcome = state.advance_turn(&board, 6).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Overshot {
                player: 0,
                at: 1,
                rolled: 6
            }
        );
        assert_eq!(state.positions()[0], 1);
        assert_eq!(state.current_player(), 1);
    }

    #[test]
    fn test_exact_landing_wins() {
        let board = plain_board(5);
        let mut state = GameState::new(2);

        let outcome = state.advance_turn(&board, 4).unwrap();
        assert_eq!(outcome, TurnOutcome::Won { player: 0, at: 5 });
        assert_eq!(state.winner(), Some(0));
        assert!(state.is_over());
        // The winner keeps the current slot; no further rotation happens.
        assert_eq!(state.current_player(), 0);
    }

    #[test]
    fn test_advance_after_win_is_rejected() {
        let board = plain_board(5);
        let mut state = GameState::new(2);
        state.advance_turn(&board, 4).unwrap();

        let snapshot = state.clone();
        assert_eq!(state.advance_turn(&board, 3), Err(TurnError::GameOver));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_invalid_die_is_rejected() {
        let board = plain_board(20);
        let mut state = GameState::new(2);

        assert_eq!(state.advance_turn(&board, 0), Err(TurnError::InvalidDie(0)));
        assert_eq!(state.advance_turn(&board, 7), Err(TurnError::InvalidDie(7)));
        assert_eq!(state.positions(), &[1, 1]);
        assert_eq!(state.last_roll(), None);
    }

    #[test]
    fn test_rotation_wraps_around() {
        let board = plain_board(30);
        let mut state = GameState::new(3);

        for expected in [1, 2, 0, 1] {
            state.advance_turn(&board, 1).unwrap();
            assert_eq!(state.current_player(), expected);
        }
    }

    #[test]
    fn test_reset_restores_start_values() {
        let board = plain_board(5);
        let mut state = GameState::new(3);
        state.advance_turn(&board, 2).unwrap();
        state.advance_turn(&board, 4).unwrap();
        assert!(state.is_over());

        state.reset();
        assert_eq!(state.positions(), &[1, 1, 1]);
        assert_eq!(state.current_player(), 0);
        assert_eq!(state.last_roll(), None);
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), "");
    }
}
