//! GameSession - the primary public API for playing a game.
//!
//! A session wires the board, the turn engine state, and a random source
//! together behind a small surface: roll, reset, and read accessors for
//! renderers.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::dice::{DiceRoller, FairDie};
use crate::engine::{GameState, TurnError, TurnOutcome};

/// A die value paired with the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub rolled: u16,
    pub outcome: TurnOutcome,
}

type WinHook = Box<dyn FnMut(usize) + Send>;

/// A running game.
///
/// Renderers read state through the accessors and must disable the roll
/// action whenever [`GameSession::winner`] is set; the engine also guards
/// against rolls in that state.
pub struct GameSession {
    board: Board,
    state: GameState,
    die: Box<dyn DiceRoller + Send>,
    win_hook: Option<WinHook>,
}

impl GameSession {
    /// Create a session with a fair die.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_die(config, FairDie)
    }

    /// Create a session with a specific random source.
    pub fn with_die(
        config: GameConfig,
        die: impl DiceRoller + Send + 'static,
    ) -> Result<Self, ConfigError> {
        if config.player_count < 2 {
            return Err(ConfigError::NotEnoughPlayers(config.player_count));
        }
        let board = Board::new(config.board_size, config.shortcuts.iter().copied())?;

        Ok(Self {
            state: GameState::new(config.player_count),
            board,
            die: Box::new(die),
            win_hook: None,
        })
    }

    /// Register the celebration hook.
    ///
    /// Invoked exactly once per game, on the transition that declares the
    /// winner; it is never re-invoked because further rolls are rejected
    /// until [`GameSession::reset`].
    pub fn set_win_hook(&mut self, hook: impl FnMut(usize) + Send + 'static) {
        self.win_hook = Some(Box::new(hook));
    }

    /// Draw a die value and advance the turn with it.
    pub fn roll(&mut self) -> Result<TurnRecord, TurnError> {
        let rolled = self.die.roll();
        let outcome = self.state.advance_turn(&self.board, rolled)?;

        if let TurnOutcome::Won { player, .. } = outcome {
            if let Some(hook) = self.win_hook.as_mut() {
                hook(player);
            }
        }

        Ok(TurnRecord { rolled, outcome })
    }

    /// Restart the game: every position back to 1, player 0 to move.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn positions(&self) -> &[u16] {
        self.state.positions()
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player()
    }

    pub fn last_roll(&self) -> Option<u16> {
        self.state.last_roll()
    }

    pub fn winner(&self) -> Option<usize> {
        self.state.winner()
    }

    pub fn status(&self) -> &str {
        self.state.status()
    }

    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDie;

    #[test]
    fn test_rejects_single_player() {
        let config = GameConfig::default().with_player_count(1);
        assert_eq!(
            GameSession::new(config).unwrap_err(),
            ConfigError::NotEnoughPlayers(1)
        );
    }

    #[test]
    fn test_invalid_shortcut_fails_at_construction() {
        let config = GameConfig::default().with_shortcuts([(7, 7)]);
        assert!(matches!(
            GameSession::new(config),
            Err(ConfigError::Board(_))
        ));
    }

    #[test]
    fn test_roll_reports_die_and_outcome() {
        let config = GameConfig::default()
            .with_board_size(20)
            .with_player_count(2)
            .with_shortcuts([]);
        let mut game = GameSession::with_die(config, ScriptedDie::new([3])).unwrap();

        let record = game.roll().unwrap();
        assert_eq!(record.rolled, 3);
        assert_eq!(
            record.outcome,
            TurnOutcome::Moved {
                player: 0,
                from: 1,
                to: 4
            }
        );
        assert_eq!(game.positions(), &[4, 1]);
        assert_eq!(game.last_roll(), Some(3));
        assert_eq!(game.current_player(), 1);
    }

    #[test]
    fn test_win_hook_fires_on_winning_roll() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let config = GameConfig::default()
            .with_board_size(5)
            .with_player_count(2)
            .with_shortcuts([]);
        let mut game = GameSession::with_die(config, ScriptedDie::new([4, 1])).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        game.set_win_hook(move |player| {
            assert_eq!(player, 0);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        game.roll().unwrap();
        assert_eq!(game.winner(), Some(0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Terminal state: the next roll is rejected and the hook stays at one.
        assert_eq!(game.roll(), Err(TurnError::GameOver));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
