//! Outcome-to-UI mapping for completed turns

use snakes_core::{TurnOutcome, TurnRecord};

use crate::app::App;
use crate::ui::widgets::LogKind;
use crate::ui::Overlay;

/// Apply a completed turn to the UI state
pub fn process_turn(app: &mut App, record: &TurnRecord) {
    let player = record.outcome.player();
    app.add_log(
        format!("Player {} rolled a {}", player + 1, record.rolled),
        LogKind::Roll,
    );

    match record.outcome {
        TurnOutcome::Moved { .. } => {
            app.add_log(record.outcome.describe(), LogKind::Move);
        }

        TurnOutcome::Climbed { .. } => {
            app.add_log(record.outcome.describe(), LogKind::Ladder);
        }

        TurnOutcome::Descended { .. } => {
            app.add_log(record.outcome.describe(), LogKind::Snake);
        }

        TurnOutcome::Overshot { .. } => {
            app.add_log(record.outcome.describe(), LogKind::System);
        }

        TurnOutcome::Won { player, .. } => {
            app.add_log(record.outcome.describe(), LogKind::Win);
            app.set_status(format!(
                "Player {} wins! Press 'n' for a new game.",
                player + 1
            ));
            app.start_celebration();
            app.set_overlay(Overlay::Winner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakes_core::{GameConfig, GameSession, ScriptedDie};

    #[test]
    fn test_win_starts_celebration_once() {
        let config = GameConfig::default()
            .with_board_size(4)
            .with_player_count(2)
            .with_shortcuts([]);
        let session = GameSession::with_die(config, ScriptedDie::new([3])).unwrap();
        let mut app = App::new(session);

        let record = app.session.roll().unwrap();
        process_turn(&mut app, &record);

        assert!(app.celebrating());
        assert_eq!(app.overlay(), Some(Overlay::Winner));
        assert!(app
            .log
            .iter()
            .any(|item| item.kind == LogKind::Win && item.content.contains("wins")));
    }

    #[test]
    fn test_overshoot_is_narrated() {
        let config = GameConfig::default()
            .with_board_size(4)
            .with_player_count(2)
            .with_shortcuts([]);
        let session = GameSession::with_die(config, ScriptedDie::new([6])).unwrap();
        let mut app = App::new(session);

        let record = app.session.roll().unwrap();
        process_turn(&mut app, &record);

        assert!(!app.celebrating());
        assert!(app
            .log
            .iter()
            .any(|item| item.content.contains("turn skipped")));
    }
}
