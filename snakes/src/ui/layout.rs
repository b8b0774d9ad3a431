//! Layout calculation for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub board_area: Rect,
    pub sidebar_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(12),   // board + sidebar
                Constraint::Length(3), // status bar
                Constraint::Length(1), // hotkey bar
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(44), Constraint::Length(34)])
            .split(vertical[1]);

        Self {
            title_area: vertical[0],
            board_area: main[0],
            sidebar_area: main[1],
            status_bar: vertical[2],
            hotkey_bar: vertical[3],
        }
    }
}

/// Sidebar layout: player roster, die, journey log
pub struct SidebarLayout {
    pub players_area: Rect,
    pub die_area: Rect,
    pub log_area: Rect,
}

impl SidebarLayout {
    pub fn calculate(area: Rect, player_count: usize) -> Self {
        let roster_height = player_count as u16 + 2; // one line per player + borders
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(roster_height),
                Constraint::Length(9), // die face + message
                Constraint::Min(4),    // journey log
            ])
            .split(area);

        Self {
            players_area: vertical[0],
            die_area: vertical[1],
            log_area: vertical[2],
        }
    }
}

/// Get a centered rect of fixed size within the given area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
