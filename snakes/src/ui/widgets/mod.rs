//! TUI widgets for the board game

pub mod board;
pub mod celebration;
pub mod die;
pub mod log;
pub mod players;
pub mod status_bar;

pub use board::BoardWidget;
pub use celebration::CelebrationWidget;
pub use die::{DieAnimationState, DieWidget};
pub use log::{JourneyLogWidget, LogItem, LogKind};
pub use players::PlayerRosterWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
