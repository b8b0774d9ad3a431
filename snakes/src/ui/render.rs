//! Render orchestration for the TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout, SidebarLayout};
use crate::ui::widgets::{
    BoardWidget, CelebrationWidget, DieAnimationState, DieWidget, HotkeyBarWidget,
    JourneyLogWidget, PlayerRosterWidget, StatusBarWidget,
};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Winner,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, layout.title_area);

    // Board
    let board_widget = BoardWidget::new(app.session.board(), app.session.positions(), &app.theme)
        .current(app.session.current_player())
        .winner(app.session.winner());
    frame.render_widget(board_widget, layout.board_area);

    // Sidebar: roster, die, journey log
    let sidebar = SidebarLayout::calculate(layout.sidebar_area, app.session.player_count());

    let roster = PlayerRosterWidget::new(app.session.positions(), &app.theme)
        .current(app.session.current_player())
        .winner(app.session.winner());
    frame.render_widget(roster, sidebar.players_area);

    let die_state = match app.rolling_frame() {
        Some(anim_frame) => DieAnimationState::Rolling { frame: anim_frame },
        None => DieAnimationState::Idle,
    };
    let die_widget = DieWidget::new(&app.theme)
        .value(app.session.last_roll())
        .state(die_state)
        .can_roll(app.can_roll());
    frame.render_widget(die_widget, sidebar.die_area);

    let log_widget = JourneyLogWidget::new(&app.log, &app.theme).scroll(app.log_scroll);
    frame.render_widget(log_widget, sidebar.log_area);

    render_status_bar(frame, app, layout.status_bar);

    let hotkeys = HotkeyBarWidget::new(app.can_roll(), app.session.is_over(), &app.theme);
    frame.render_widget(hotkeys, layout.hotkey_bar);

    // Confetti under the overlays, over everything else
    if app.celebrating() {
        frame.render_widget(CelebrationWidget::new(app.animation_frame, &app.theme), area);
    }

    if let Some(overlay) = app.overlay() {
        match overlay {
            Overlay::Help => render_help_overlay(frame, app, area),
            Overlay::Winner => render_winner_overlay(frame, app, area),
        }
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        " Snakes and Ladders ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Transient UI notes win over the engine's turn narration.
    let message = app
        .status_message()
        .map(str::to_string)
        .unwrap_or_else(|| {
            if app.session.status().is_empty() {
                format!(
                    "Player {}'s turn. Reach square {} exactly to win.",
                    app.session.current_player() + 1,
                    app.session.board().size()
                )
            } else {
                app.session.status().to_string()
            }
        });

    let status_widget =
        StatusBarWidget::new(&message, &app.theme).highlight(app.session.is_over());
    frame.render_widget(status_widget, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 16, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Snakes and Ladders - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  r / Space   Roll the die"),
        Line::from("  n           Start a new game"),
        Line::from("  j/k or ↑/↓  Scroll the journey log"),
        Line::from("  g/G         Jump to top/bottom of the log"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl-C  Quit"),
        Line::from(""),
        Line::from("Land exactly on the final square to win."),
        Line::from("Rolls past it are forfeited."),
        Line::from("▲ squares climb a ladder, ▼ squares"),
        Line::from("slide down a snake."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

/// Render the winner overlay
fn render_winner_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(winner) = app.session.winner() else {
        return;
    };

    let popup_area = centered_rect_fixed(34, 9, area);
    frame.render_widget(Clear, popup_area);

    let name_style = app
        .theme
        .player_style(winner)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🏆", app.theme.win_style())),
        Line::from(vec![
            Span::styled(format!("Player {}", winner + 1), name_style),
            Span::styled(" wins the game!", app.theme.win_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press n for a new game",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Victory ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, popup_area);
}
