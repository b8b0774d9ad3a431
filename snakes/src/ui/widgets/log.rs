//! Journey log widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Kind of a journey log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Roll,
    Move,
    Ladder,
    Snake,
    System,
    Win,
}

/// A single entry in the journey log
#[derive(Debug, Clone)]
pub struct LogItem {
    pub content: String,
    pub kind: LogKind,
}

/// Widget for the scrollable journey log
pub struct JourneyLogWidget<'a> {
    items: &'a [LogItem],
    scroll: usize,
    theme: &'a GameTheme,
}

impl<'a> JourneyLogWidget<'a> {
    pub fn new(items: &'a [LogItem], theme: &'a GameTheme) -> Self {
        Self {
            items,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    fn style_for_kind(&self, kind: LogKind) -> Style {
        match kind {
            LogKind::Roll => self.theme.roll_style(),
            LogKind::Move => Style::default().fg(self.theme.foreground),
            LogKind::Ladder => self.theme.ladder_style(),
            LogKind::Snake => self.theme.snake_style(),
            LogKind::System => self.theme.system_style(),
            LogKind::Win => self.theme.win_style(),
        }
    }
}

impl Widget for JourneyLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Journey [j/k] ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .items
            .iter()
            .map(|item| Line::from(Span::styled(item.content.clone(), self.style_for_kind(item.kind))))
            .collect();

        // Cap the scroll so a huge "jump to bottom" value shows the tail.
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let offset = self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
