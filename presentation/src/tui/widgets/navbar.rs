//! Navbar widget — brand, section links, scroll-dependent style

use crate::tui::section::Section;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct NavbarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NavbarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn base_style(&self) -> Style {
        if self.state.nav_scrolled() {
            Style::default().bg(Color::Rgb(17, 24, 39)).fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn links(&self) -> Vec<Span<'static>> {
        let active = self.state.active_section();
        let base = self.base_style();
        let mut spans = Vec::new();
        for section in Section::ALL {
            let style = if section == active {
                base.fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(section.key().to_string(), base.fg(Color::DarkGray)));
            spans.push(Span::styled(format!(" {}  ", section.label()), style));
        }
        spans
    }
}

impl<'a> Widget for NavbarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = self.base_style();
        buf.set_style(area, base);

        let brand = Span::styled(
            format!(" {} ", self.state.profile().brand()),
            base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        let brand_width = brand.width() as u16;
        buf.set_line(area.x, area.y, &Line::from(brand), area.width);

        let links = Line::from(self.links());
        let links_width = links.width() as u16;
        let x = if area.width > brand_width + links_width {
            area.right() - links_width
        } else {
            area.x + brand_width
        };
        buf.set_line(x, area.y, &links, area.right().saturating_sub(x));
    }
}
