//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Widget for the status line
pub struct StatusBarWidget<'a> {
    message: &'a str,
    highlight: bool,
    theme: &'a GameTheme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            message,
            highlight: false,
            theme,
        }
    }

    /// Render the message in the win style.
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let style = if self.highlight {
            self.theme.win_style()
        } else {
            Style::default().fg(self.theme.foreground)
        };

        let line = Line::from(Span::styled(self.message, style));
        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Widget for the hotkey hint bar
pub struct HotkeyBarWidget<'a> {
    can_roll: bool,
    game_over: bool,
    theme: &'a GameTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(can_roll: bool, game_over: bool, theme: &'a GameTheme) -> Self {
        Self {
            can_roll,
            game_over,
            theme,
        }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = self.theme.system_style();
        let mut spans = Vec::new();

        if self.can_roll {
            spans.push(Span::styled(" r", Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" roll ", dim));
        }
        if self.game_over {
            spans.push(Span::styled(" n", self.theme.win_style()));
            spans.push(Span::styled(" new game ", dim));
        } else {
            spans.push(Span::styled(" n", Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" new game ", dim));
        }
        spans.push(Span::styled(" j/k", Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" scroll ", dim));
        spans.push(Span::styled(" ?", Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" help ", dim));
        spans.push(Span::styled(" q", Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" quit", dim));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
