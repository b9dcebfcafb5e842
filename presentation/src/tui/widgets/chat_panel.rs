//! Chat panel widget — transcript bubbles, typing indicator, input line

use crate::tui::mode::Focus;
use crate::tui::page::wrap_text;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use twin_application::ChatSessionController;
use twin_domain::{DraftInput, Role};

const INPUT_HEIGHT: u16 = 3;
const USER_BUBBLE: Color = Color::Rgb(124, 58, 237);
const ASSISTANT_BUBBLE: Color = Color::Rgb(31, 41, 55);
const TYPING_FRAMES: [&str; 3] = ["● ∙ ∙", "∙ ● ∙", "∙ ∙ ●"];

pub struct ChatPanelWidget<'a> {
    controller: &'a ChatSessionController,
    state: &'a TuiState,
}

impl<'a> ChatPanelWidget<'a> {
    pub fn new(controller: &'a ChatSessionController, state: &'a TuiState) -> Self {
        Self { controller, state }
    }

    /// Transcript and input areas inside the panel border
    pub fn regions(area: Rect) -> (Rect, Rect) {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let input_height = INPUT_HEIGHT.min(inner.height);
        let transcript = Rect {
            height: inner.height - input_height,
            ..inner
        };
        let input = Rect {
            y: transcript.bottom(),
            height: input_height,
            ..inner
        };
        (transcript, input)
    }

    /// Terminal cursor position for the draft
    pub fn cursor_position(area: Rect, draft: &DraftInput) -> Position {
        let (_, input) = Self::regions(area);
        let inner_width = input.width.saturating_sub(2);
        let (_, col) = visible_draft(draft, inner_width);
        Position::new(input.x + 1 + col, input.y + 1)
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(" Chat with ", Style::default().fg(Color::White)),
            Span::styled(
                format!("AI {} ", self.state.profile().first_name()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    pub fn transcript_lines(&self, width: u16) -> Vec<Line<'static>> {
        let bubble_width = ((width as usize) * 4 / 5).max(8).saturating_sub(2);
        let mut lines: Vec<Line<'static>> = Vec::new();

        for message in self.controller.transcript() {
            let (style, alignment) = match message.role() {
                Role::User => (
                    Style::default().fg(Color::White).bg(USER_BUBBLE),
                    ratatui::layout::Alignment::Right,
                ),
                Role::Assistant => (
                    Style::default().fg(Color::Gray).bg(ASSISTANT_BUBBLE),
                    ratatui::layout::Alignment::Left,
                ),
            };
            for text_line in message.text().lines() {
                let wrapped = wrap_text(text_line, bubble_width);
                if wrapped.is_empty() {
                    lines.push(Line::from(Span::styled("  ", style)).alignment(alignment));
                }
                for chunk in wrapped {
                    lines.push(
                        Line::from(Span::styled(format!(" {} ", chunk), style))
                            .alignment(alignment),
                    );
                }
            }
            lines.push(Line::from(""));
        }

        if self.controller.status().is_sending() {
            let frame = TYPING_FRAMES[(self.state.tick % TYPING_FRAMES.len() as u64) as usize];
            lines.push(Line::from(Span::styled(
                format!(" {} ", frame),
                Style::default().fg(Color::Magenta).bg(ASSISTANT_BUBBLE),
            )));
        }

        lines
    }

    fn render_transcript(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.transcript_lines(area.width);
        let total = lines.len() as u16;

        // chat_scroll = 0 means "show bottom"
        let scroll = if total > area.height {
            let max_scroll = total - area.height;
            max_scroll - self.state.chat_scroll.min(max_scroll)
        } else {
            0
        };

        Paragraph::new(Text::from(lines))
            .scroll((scroll, 0))
            .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Chat;
        let sending = self.controller.status().is_sending();
        let can_send = self.controller.can_submit();

        let affordance = if sending {
            Span::styled(" sending… ", Style::default().fg(Color::DarkGray))
        } else if can_send {
            Span::styled(
                " ⏎ send ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" ⏎ send ", Style::default().fg(Color::DarkGray))
        };

        let border = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title_top(Line::from(affordance).right_aligned());

        let draft = self.controller.draft();
        let inner_width = area.width.saturating_sub(2);
        let content = if draft.text().is_empty() {
            Span::styled("Ask me anything...", Style::default().fg(Color::DarkGray))
        } else {
            let (visible, _) = visible_draft(draft, inner_width);
            Span::raw(visible)
        };

        Paragraph::new(Line::from(content))
            .block(block)
            .render(area, buf);
    }
}

impl<'a> Widget for ChatPanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < INPUT_HEIGHT + 3 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(self.title())
            .style(Style::default().bg(Color::Rgb(17, 24, 39)));
        block.render(area, buf);

        let (transcript, input) = Self::regions(area);
        self.render_transcript(transcript, buf);
        self.render_input(input, buf);
    }
}

/// Tail of the draft that fits in `width` columns, and the cursor column
fn visible_draft(draft: &DraftInput, width: u16) -> (String, u16) {
    let text = draft.text();
    let cursor_col = text[..draft.cursor()].chars().count();
    let width = width.max(1) as usize;
    let skip = (cursor_col + 1).saturating_sub(width);
    let visible: String = text.chars().skip(skip).take(width).collect();
    (visible, (cursor_col - skip) as u16)
}
