//! Player roster widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Widget listing every player with their position
pub struct PlayerRosterWidget<'a> {
    positions: &'a [u16],
    current: usize,
    winner: Option<usize>,
    theme: &'a GameTheme,
}

impl<'a> PlayerRosterWidget<'a> {
    pub fn new(positions: &'a [u16], theme: &'a GameTheme) -> Self {
        Self {
            positions,
            current: 0,
            winner: None,
            theme,
        }
    }

    pub fn current(mut self, player: usize) -> Self {
        self.current = player;
        self
    }

    pub fn winner(mut self, winner: Option<usize>) -> Self {
        self.winner = winner;
        self
    }
}

impl Widget for PlayerRosterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Players ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .positions
            .iter()
            .enumerate()
            .map(|(player, &position)| {
                let is_current = player == self.current && self.winner.is_none();
                let marker = if self.winner == Some(player) {
                    "★"
                } else if is_current {
                    "➤"
                } else {
                    " "
                };

                let mut name_style = self.theme.player_style(player);
                if is_current {
                    name_style = name_style.add_modifier(Modifier::BOLD);
                }

                let mut spans = vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled("●", self.theme.player_style(player)),
                    Span::styled(format!(" Player {}", player + 1), name_style),
                    Span::raw(format!("  on {position:>3}")),
                ];
                if self.winner == Some(player) {
                    spans.push(Span::styled("  WINNER", self.theme.win_style()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
