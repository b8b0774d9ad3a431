//! Snakes and Ladders game engine.
//!
//! This crate provides:
//! - The board model with a validated shortcut table
//! - The turn engine: dice movement, win detection, turn rotation
//! - A session facade wiring a random source and win notification
//! - Test doubles for deterministic games
//!
//! # Quick Start
//!
//! ```
//! use snakes_core::{GameConfig, GameSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut game = GameSession::new(GameConfig::default())?;
//!
//!     let record = game.roll()?;
//!     println!("{}", record.outcome.describe());
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod dice;
pub mod engine;
pub mod session;
pub mod testing;

// Primary public API
pub use board::{Board, BoardError, ShortcutKind, CLASSIC_SHORTCUTS, CLASSIC_SIZE, GRID_COLUMNS};
pub use config::{ConfigError, GameConfig, CLASSIC_PLAYERS};
pub use dice::{DiceRoller, FairDie, SeededDie, DIE_SIDES};
pub use engine::{GameState, TurnError, TurnOutcome};
pub use session::{GameSession, TurnRecord};
pub use testing::ScriptedDie;
