//! Main application state and logic

use snakes_core::{GameSession, TurnRecord};

use crate::ui::theme::GameTheme;
use crate::ui::widgets::{LogItem, LogKind};
use crate::ui::Overlay;

/// Poll tick on which an in-flight roll draws the die and takes the turn.
const ROLL_RESOLVE_FRAMES: u8 = 8;
/// Poll tick on which the result is revealed to the player.
const ROLL_REVEAL_FRAMES: u8 = 10;

/// State for a die roll in progress (for animation)
#[derive(Debug)]
pub struct RollingDie {
    /// Number of animation frames elapsed
    pub frames_elapsed: u8,
    /// The completed turn once taken (after the animation delay)
    pub record: Option<TurnRecord>,
}

/// Main application state
pub struct App {
    pub session: GameSession,

    // UI state
    pub theme: GameTheme,
    overlay: Option<Overlay>,

    // Journey log
    pub log: Vec<LogItem>,
    pub log_scroll: usize,
    pub scroll_locked_to_bottom: bool,

    // Status
    status_message: Option<String>,

    // Animation
    pub animation_frame: u8,
    rolling: Option<RollingDie>,
    celebrating: bool,
}

impl App {
    /// Create the application around a fresh game session
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            theme: GameTheme::default(),
            overlay: None,
            log: Vec::new(),
            log_scroll: 0,
            scroll_locked_to_bottom: true,
            status_message: None,
            animation_frame: 0,
            rolling: None,
            celebrating: false,
        };

        app.add_log("Welcome to Snakes and Ladders!".to_string(), LogKind::System);
        app.add_log(
            "Press 'r' to roll the die, '?' for help.".to_string(),
            LogKind::System,
        );

        app
    }

    /// Whether the roll action is currently available.
    ///
    /// Rolling is a debounce, not concurrency: one roll is in flight at a
    /// time, and a declared winner disables the action until a new game.
    pub fn can_roll(&self) -> bool {
        self.rolling.is_none() && !self.session.is_over()
    }

    /// Request a die roll; ignored while one is in flight or after a win
    pub fn request_roll(&mut self) {
        if !self.can_roll() {
            return;
        }
        self.rolling = Some(RollingDie {
            frames_elapsed: 0,
            record: None,
        });
        self.set_status("Rolling...");
    }

    /// Animation frame of the roll in flight, if any
    pub fn rolling_frame(&self) -> Option<u8> {
        self.rolling.as_ref().map(|_| self.animation_frame)
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling.is_some()
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        let mut resolved = None;
        let mut abandoned = false;

        if let Some(rolling) = self.rolling.as_mut() {
            rolling.frames_elapsed += 1;

            // After ~8 frames (~0.8 sec at 100ms poll), draw the die and
            // take the turn. There is no cancellation past this point.
            if rolling.frames_elapsed >= ROLL_RESOLVE_FRAMES && rolling.record.is_none() {
                match self.session.roll() {
                    Ok(record) => rolling.record = Some(record),
                    // The roll action is disabled whenever this could fail;
                    // drop the stray request.
                    Err(_) => abandoned = true,
                }
            }

            // After ~10 frames, reveal the result
            if rolling.frames_elapsed >= ROLL_REVEAL_FRAMES {
                resolved = rolling.record.take();
            }
        }

        if abandoned {
            self.rolling = None;
            self.clear_status();
        } else if let Some(record) = resolved {
            self.rolling = None;
            self.clear_status();
            crate::effects::process_turn(self, &record);
        }
    }

    /// Start the win celebration
    pub fn start_celebration(&mut self) {
        self.celebrating = true;
    }

    /// Reset everything for a new game
    pub fn new_game(&mut self) {
        self.session.reset();
        self.rolling = None;
        self.celebrating = false;
        self.overlay = None;
        self.log.clear();
        self.log_scroll = 0;
        self.scroll_locked_to_bottom = true;
        self.clear_status();
        self.add_log("New game started. Player 1 to roll.".to_string(), LogKind::System);
    }

    /// Add a journey log entry
    pub fn add_log(&mut self, content: String, kind: LogKind) {
        self.log.push(LogItem { content, kind });
        if self.scroll_locked_to_bottom {
            self.scroll_to_bottom();
        }
    }

    /// Scroll the log to the bottom and lock it there
    pub fn scroll_to_bottom(&mut self) {
        // The widget caps this to the actual maximum.
        self.log_scroll = usize::MAX / 2;
        self.scroll_locked_to_bottom = true;
    }

    /// Scroll the log up (unlocks from bottom)
    pub fn scroll_up(&mut self, lines: usize) {
        if self.log_scroll > self.log.len() {
            self.log_scroll = self.log.len();
        }
        self.log_scroll = self.log_scroll.saturating_sub(lines);
        self.scroll_locked_to_bottom = false;
    }

    /// Scroll the log down
    pub fn scroll_down(&mut self, lines: usize) {
        self.log_scroll = self.log_scroll.saturating_add(lines).min(self.log.len());
    }

    /// Jump to the top of the log
    pub fn scroll_to_top(&mut self) {
        self.log_scroll = 0;
        self.scroll_locked_to_bottom = false;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakes_core::{GameConfig, ScriptedDie};

    fn scripted_app(board_size: u16, rolls: &[u16]) -> App {
        let config = GameConfig::default()
            .with_board_size(board_size)
            .with_player_count(2)
            .with_shortcuts([]);
        let session =
            GameSession::with_die(config, ScriptedDie::new(rolls.iter().copied())).unwrap();
        App::new(session)
    }

    fn tick_until_settled(app: &mut App) {
        for _ in 0..ROLL_REVEAL_FRAMES + 2 {
            app.tick();
        }
    }

    #[test]
    fn test_roll_request_debounce() {
        let mut app = scripted_app(20, &[3]);

        app.request_roll();
        assert!(app.is_rolling());

        // A second request while rolling is ignored, not queued.
        app.tick();
        let frames_before = app.rolling.as_ref().unwrap().frames_elapsed;
        app.request_roll();
        assert_eq!(app.rolling.as_ref().unwrap().frames_elapsed, frames_before);
    }

    #[test]
    fn test_roll_resolves_after_animation() {
        let mut app = scripted_app(20, &[3]);

        app.request_roll();
        tick_until_settled(&mut app);

        assert!(!app.is_rolling());
        assert_eq!(app.session.positions()[0], 4);
        assert_eq!(app.session.last_roll(), Some(3));
        assert!(app.log.iter().any(|item| item.kind == LogKind::Roll));
    }

    #[test]
    fn test_win_disables_rolling_until_new_game() {
        let mut app = scripted_app(4, &[3]);

        app.request_roll();
        tick_until_settled(&mut app);

        assert_eq!(app.session.winner(), Some(0));
        assert!(app.celebrating());
        assert_eq!(app.overlay(), Some(Overlay::Winner));
        assert!(!app.can_roll());

        app.request_roll();
        assert!(!app.is_rolling());

        app.new_game();
        assert!(app.can_roll());
        assert!(!app.celebrating());
        assert_eq!(app.session.winner(), None);
    }
}
