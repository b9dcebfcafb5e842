//! TUI widgets — ratatui components for the portfolio screen
//!
//! Layout:
//! ┌── Navbar (1) ─────────────────────────────────────┐
//! │                                                   │
//! │   Page (flex)                  ┌── Chat (float) ──┤
//! │                                │                  │
//! ├── StatusBar (1) ───────────────┴──────────────────┘

pub mod chat_panel;
pub mod navbar;
pub mod page;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Largest chat panel size
const CHAT_MAX_WIDTH: u16 = 56;
const CHAT_MAX_HEIGHT: u16 = 22;

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub navbar: Rect,
    pub page: Rect,
    pub status_bar: Rect,
    /// Floating chat panel, anchored bottom-right over the page
    pub chat: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let page = vertical[1];
        Self {
            navbar: vertical[0],
            page,
            status_bar: vertical[2],
            chat: Self::chat_overlay(page),
        }
    }

    /// Bottom-right rectangle inside `page`, one cell off the edges
    pub fn chat_overlay(page: Rect) -> Rect {
        let width = CHAT_MAX_WIDTH.min(page.width.saturating_sub(2));
        let height = CHAT_MAX_HEIGHT.min(page.height.saturating_sub(1));
        Rect {
            x: page.right().saturating_sub(width + 1),
            y: page.bottom().saturating_sub(height),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.navbar, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.page, Rect::new(0, 1, 100, 38));
        assert_eq!(layout.status_bar, Rect::new(0, 39, 100, 1));
    }

    #[test]
    fn test_chat_floats_bottom_right() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.chat.width, CHAT_MAX_WIDTH);
        assert_eq!(layout.chat.height, CHAT_MAX_HEIGHT);
        assert_eq!(layout.chat.right(), 99);
        assert_eq!(layout.chat.bottom(), layout.page.bottom());
    }

    #[test]
    fn test_chat_shrinks_on_small_terminal() {
        let layout = MainLayout::compute(Rect::new(0, 0, 30, 12));
        assert!(layout.chat.width <= 28);
        assert!(layout.chat.height <= layout.page.height);
        assert!(layout.chat.x >= layout.page.x);
        assert!(layout.chat.y >= layout.page.y);
    }
}
