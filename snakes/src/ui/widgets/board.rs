//! Board grid widget
//!
//! The grid is a pure derived view: cell contents are recomputed from the
//! flat position list on every frame, nothing is cached between draws.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use snakes_core::{Board, ShortcutKind, GRID_COLUMNS};

use crate::ui::theme::GameTheme;

/// Widget for the playing board
pub struct BoardWidget<'a> {
    board: &'a Board,
    positions: &'a [u16],
    current: usize,
    winner: Option<usize>,
    theme: &'a GameTheme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, positions: &'a [u16], theme: &'a GameTheme) -> Self {
        Self {
            board,
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

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.board.grid_rows();
        if inner.width < GRID_COLUMNS * 4 || inner.height < rows {
            let hint = Paragraph::new(Line::from("Terminal too small for the board"))
                .style(self.theme.system_style());
            hint.render(inner, buf);
            return;
        }

        let cell_w = inner.width / GRID_COLUMNS;
        let cell_h = (inner.height / rows).max(1);

        for square in 1..=self.board.size() {
            let (row, col) = self.board.grid_position(square);
            let x = inner.x + col * cell_w;
            let y = inner.y + row * cell_h;
            if y >= inner.y + inner.height {
                continue;
            }

            // Square number, then the shortcut marker if one starts here
            let number_style = if self.board.is_shortcut_target(square) {
                self.theme.border_style(false).add_modifier(Modifier::BOLD)
            } else {
                ratatui::style::Style::default().fg(self.theme.square_number)
            };
            buf.set_string(x, y, format!("{square:>3}"), number_style);

            if let Some(to) = self.board.shortcut(square) {
                let (glyph, style) = match self.board.shortcut_kind(square) {
                    Some(ShortcutKind::Ladder) => ('▲', self.theme.ladder_style()),
                    _ => ('▼', self.theme.snake_style()),
                };
                let marker = format!("{glyph}{to}");
                if 3 + marker.chars().count() as u16 <= cell_w {
                    buf.set_string(x + 3, y, marker, style);
                }
            }

            // Player tokens, on the second cell line when there is one
            let token_y = if cell_h >= 2 { y + 1 } else { y };
            let mut token_x = if cell_h >= 2 { x } else { x + 3 };
            if cell_h >= 2 || self.board.shortcut(square).is_none() {
                for (player, &position) in self.positions.iter().enumerate() {
                    if position != square {
                        continue;
                    }
                    if token_x >= x + cell_w || token_y >= inner.y + inner.height {
                        break;
                    }
                    let token = if self.winner == Some(player) { "★" } else { "●" };
                    let mut style = self.theme.player_style(player);
                    if player == self.current && self.winner.is_none() {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    buf.set_string(token_x, token_y, token, style);
                    token_x += 1;
                }
            }
        }
    }
}
