//! Animated die display widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Animation state for the die
#[derive(Debug, Clone, Copy)]
pub enum DieAnimationState {
    Idle,
    Rolling { frame: u8 },
}

/// Widget for displaying the die with its pip face
pub struct DieWidget<'a> {
    value: Option<u16>,
    state: DieAnimationState,
    can_roll: bool,
    theme: &'a GameTheme,
}

impl<'a> DieWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            value: None,
            state: DieAnimationState::Idle,
            can_roll: true,
            theme,
        }
    }

    pub fn value(mut self, value: Option<u16>) -> Self {
        self.value = value;
        self
    }

    pub fn state(mut self, state: DieAnimationState) -> Self {
        self.state = state;
        self
    }

    pub fn can_roll(mut self, can_roll: bool) -> Self {
        self.can_roll = can_roll;
        self
    }
}

/// Pip rows for a face value, on a 3x3 grid.
fn pip_rows(value: u16) -> [&'static str; 3] {
    match value {
        1 => ["     ", "  ●  ", "     "],
        2 => ["●    ", "     ", "    ●"],
        3 => ["●    ", "  ●  ", "    ●"],
        4 => ["●   ●", "     ", "●   ●"],
        5 => ["●   ●", "  ●  ", "●   ●"],
        _ => ["● ● ●", "     ", "● ● ●"],
    }
}

impl Widget for DieWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Die ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        match self.state {
            DieAnimationState::Rolling { frame } => {
                let spin_chars = ['|', '/', '-', '\\'];
                let spin = spin_chars[(frame as usize) % 4];

                lines.push(Line::from("╭───────╮"));
                lines.push(Line::from(format!("│   {spin}   │")));
                lines.push(Line::from("│       │"));
                lines.push(Line::from("╰───────╯"));
                lines.push(Line::from(Span::styled(
                    "Rolling...",
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
            DieAnimationState::Idle => {
                match self.value {
                    Some(value) => {
                        lines.push(Line::from("╭───────╮"));
                        for row in pip_rows(value) {
                            lines.push(Line::from(vec![
                                Span::raw("│ "),
                                Span::styled(row, self.theme.roll_style()),
                                Span::raw(" │"),
                            ]));
                        }
                        lines.push(Line::from("╰───────╯"));
                        lines.push(Line::from(Span::styled(
                            format!("You rolled a {value}"),
                            self.theme.roll_style(),
                        )));
                    }
                    None => {
                        lines.push(Line::from("╭───────╮"));
                        lines.push(Line::from("│       │"));
                        lines.push(Line::from("│   ?   │"));
                        lines.push(Line::from("│       │"));
                        lines.push(Line::from("╰───────╯"));
                    }
                }

                if self.can_roll {
                    lines.push(Line::from(Span::styled(
                        "Press r to roll",
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                }
            }
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        paragraph.render(inner, buf);
    }
}
