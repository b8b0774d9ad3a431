//! Confetti celebration overlay

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::ui::theme::GameTheme;

const CONFETTI_GLYPHS: [char; 5] = ['*', '✦', '•', '◦', '+'];

/// Full-frame confetti shower, advanced by the animation frame counter.
///
/// Each piece gets a fixed column and fall speed from a fixed-seed RNG, so
/// the shower is stable across frames and the pieces fall as the frame
/// counter advances.
pub struct CelebrationWidget<'a> {
    frame: u8,
    theme: &'a GameTheme,
}

impl<'a> CelebrationWidget<'a> {
    pub fn new(frame: u8, theme: &'a GameTheme) -> Self {
        Self { frame, theme }
    }
}

impl Widget for CelebrationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let mut rng = StdRng::seed_from_u64(0x5EED);
        let pieces = (area.width as usize * area.height as usize) / 24;

        for index in 0..pieces {
            let x = area.x + rng.gen_range(0..area.width);
            let start = rng.gen_range(0..area.height);
            let speed = rng.gen_range(1..=3u16);
            let glyph = CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())];

            let y = area.y + (start + self.frame as u16 / speed) % area.height;
            let style = self.theme.player_style(index);
            buf.set_string(x, y, glyph.to_string(), style);
        }
    }
}
