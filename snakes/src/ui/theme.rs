//! Color theme and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Board colors
    pub square_number: Color,
    pub ladder: Color,
    pub snake: Color,

    // Player token colors, one per roster slot
    pub player_colors: [Color; 6],

    // Text colors
    pub roll_text: Color,
    pub system_text: Color,
    pub win_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            square_number: Color::Gray,
            ladder: Color::Green,
            snake: Color::Red,

            // Classic six-player roster colors.
            player_colors: [
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Yellow,
                Color::Magenta,
                Color::LightMagenta,
            ],

            roll_text: Color::Cyan,
            system_text: Color::DarkGray,
            win_text: Color::Yellow,
        }
    }
}

impl GameTheme {
    /// Token color for a player index; wraps past the roster size.
    pub fn player_color(&self, player: usize) -> Color {
        self.player_colors[player % self.player_colors.len()]
    }

    /// Style for a player token or name.
    pub fn player_style(&self, player: usize) -> Style {
        Style::default().fg(self.player_color(player))
    }

    /// Style for ladder markers.
    pub fn ladder_style(&self) -> Style {
        Style::default().fg(self.ladder)
    }

    /// Style for snake markers.
    pub fn snake_style(&self) -> Style {
        Style::default().fg(self.snake)
    }

    /// Style for dice roll narration.
    pub fn roll_style(&self) -> Style {
        Style::default().fg(self.roll_text)
    }

    /// Style for system messages.
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the win announcement.
    pub fn win_style(&self) -> Style {
        Style::default()
            .fg(self.win_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
