//! Page widget — hero star field plus the scrolled portfolio sections

use crate::tui::starfield::Twinkle;
use crate::tui::state::{TuiState, Visibility};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};
use std::time::Instant;

/// Columns a block slides in from while revealing
const SLIDE_COLUMNS: f32 = 6.0;

pub struct PageWidget<'a> {
    state: &'a TuiState,
    now: Instant,
}

impl<'a> PageWidget<'a> {
    pub fn new(state: &'a TuiState, now: Instant) -> Self {
        Self { state, now }
    }

    fn render_stars(&self, area: Rect, buf: &mut Buffer) {
        let scroll = self.state.page_scroll();
        let hero_height = self.state.page().hero_height() as u32;
        if scroll >= hero_height {
            return;
        }

        for star in self.state.stars().stars() {
            let (x, row) = star.position(area.width, hero_height as u16);
            let row = row as u32;
            if row < scroll || row - scroll >= area.height as u32 {
                continue;
            }
            let twinkle = star.twinkle(self.state.tick);
            let style = match twinkle {
                Twinkle::Dim => Style::default().fg(Color::DarkGray),
                Twinkle::Normal => Style::default().fg(Color::Gray),
                Twinkle::Bright => Style::default().fg(Color::White),
            };
            let y = area.y + (row - scroll) as u16;
            buf[(area.x + x, y)]
                .set_char(twinkle.glyph())
                .set_style(style);
        }
    }

    fn render_line(line: &Line<'_>, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let offset = match line.alignment {
            Some(Alignment::Center) => width.saturating_sub(line.width() as u16) / 2,
            Some(Alignment::Right) => width.saturating_sub(line.width() as u16),
            _ => 0,
        };
        buf.set_line(x + offset, y, line, width.saturating_sub(offset));
    }
}

impl<'a> Widget for PageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.render_stars(area, buf);

        let page = self.state.page();
        let scroll = self.state.page_scroll();
        let bottom = scroll + area.height as u32;

        for (i, block) in page.blocks().iter().enumerate() {
            let top = page.top(i);
            if top >= bottom {
                break;
            }
            if top + block.lines.len() as u32 <= scroll {
                continue;
            }

            let (shift, faded) = match self.state.visibility(&block.id, self.now) {
                Visibility::Hidden => continue,
                Visibility::Revealing(p) => (((1.0 - p) * SLIDE_COLUMNS) as u16, p < 0.5),
                Visibility::Shown => (0, false),
            };

            for (j, line) in block.lines.iter().enumerate() {
                let row = top + j as u32;
                if row < scroll || row >= bottom {
                    continue;
                }
                let y = area.y + (row - scroll) as u16;
                let x = area.x + shift.min(area.width);
                let width = area.width.saturating_sub(shift);

                if faded {
                    let dim = line
                        .clone()
                        .patch_style(Style::default().fg(Color::DarkGray));
                    Self::render_line(&dim, x, y, width, buf);
                } else {
                    Self::render_line(line, x, y, width, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::section::Section;
    use crate::tui::state::TuiSettings;
    use twin_domain::Profile;

    fn screen(state: &TuiState, now: Instant) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PageWidget::new(state, now).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn state() -> TuiState {
        let mut state = TuiState::new(Profile::default(), TuiSettings::default()).unwrap();
        state.fit(80, 20);
        state
    }

    #[test]
    fn test_hero_shows_name_centered() {
        let state = state();
        let rows = screen(&state, Instant::now());
        let name_row = rows
            .iter()
            .find(|r| r.contains("Kaustav Dey"))
            .expect("name rendered");
        let col = name_row.find("Kaustav Dey").unwrap();
        assert!(col > 20, "name should be centered, found at {}", col);
    }

    #[test]
    fn test_revealed_section_slides_in() {
        let mut state = state();
        let top = state.page().section_top(Section::Certificates);
        let before = Instant::now();
        state.scroll_to(top);

        // Animation start: heading shifted right
        let rows = screen(&state, before);
        assert_eq!(rows[0].find("Certificates"), Some(2 + SLIDE_COLUMNS as usize));

        // Settled: heading at its resting column
        let later = Instant::now() + std::time::Duration::from_secs(10);
        let rows = screen(&state, later);
        assert_eq!(rows[0].find("Certificates"), Some(2));
    }

    #[test]
    fn test_unrevealed_blocks_not_drawn() {
        let state = state();
        let rows = screen(&state, Instant::now());
        assert!(!rows.iter().any(|r| r.contains("About Me")));
    }
}
