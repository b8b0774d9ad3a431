//! Event handling for the TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::ui::Overlay;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Overlay keys first
    if app.overlay().is_some() {
        return handle_overlay_key(app, key);
    }

    match key.code {
        // Roll the die
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => {
            app.request_roll();
            EventResult::NeedsRedraw
        }

        // New game
        KeyCode::Char('n') => {
            app.new_game();
            EventResult::NeedsRedraw
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') => EventResult::Quit,

        // Journey log navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.scroll_to_top();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle key when an overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        // From the victory overlay, 'n' goes straight into a new game
        KeyCode::Char('n') | KeyCode::Enter
            if matches!(app.overlay(), Some(Overlay::Winner)) =>
        {
            app.new_game();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('?') if matches!(app.overlay(), Some(Overlay::Help)) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakes_core::{GameConfig, GameSession, ScriptedDie};

    fn test_app() -> App {
        let config = GameConfig::default().with_player_count(2);
        let session = GameSession::with_die(config, ScriptedDie::new([3, 4])).unwrap();
        App::new(session)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_roll_key_starts_a_roll() {
        let mut app = test_app();
        assert_eq!(handle_event(&mut app, press(KeyCode::Char('r'))), EventResult::NeedsRedraw);
        assert!(app.is_rolling());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(handle_event(&mut app, press(KeyCode::Char('q'))), EventResult::Quit);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_help_overlay_swallows_roll_keys() {
        let mut app = test_app();
        handle_event(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay(), Some(crate::ui::Overlay::Help));

        handle_event(&mut app, press(KeyCode::Char('r')));
        assert!(!app.is_rolling());

        handle_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay(), None);
    }
}
