//! Status bar widget — focus indicator + session status + key hints

use crate::tui::mode::Focus;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use twin_domain::SessionStatus;

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
    status: SessionStatus,
    model: &'a str,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState, status: SessionStatus, model: &'a str) -> Self {
        Self {
            state,
            status,
            model,
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Focus::Page if self.state.chat_open => {
                "j/k:scroll  1-7:jump  Tab:chat  c:chat  q:quit"
            }
            Focus::Page => "j/k:scroll  1-7:jump  c:chat  q:quit",
            Focus::Chat => "Enter:send  ↑/↓:scroll  Tab:page  Esc:close  Ctrl+C:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        buf.set_style(area, bg_style);

        let focus = self.state.focus;
        let focus_span = Span::styled(
            format!(" {} ", focus.indicator()),
            Style::default()
                .fg(Color::Black)
                .bg(focus.color())
                .add_modifier(Modifier::BOLD),
        );

        let status_span = if self.status.is_sending() {
            Span::styled(
                format!(" ● {} · {} ", self.model, self.status),
                bg_style.fg(Color::Yellow),
            )
        } else {
            Span::styled(format!(" {} · {} ", self.model, self.status), bg_style)
        };

        let left = Line::from(vec![focus_span, status_span]);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => self.hints().to_string(),
        };
        let right_width = Line::from(right_text.as_str()).width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
