//! TUI state
//!
//! Everything the widgets need that is not chat session state: page scroll,
//! reveal bookkeeping, chat panel visibility, focus, animation tick. Owned by
//! the TUI loop; the chat transcript and draft live in the controller.

use super::mode::Focus;
use super::page::{BlockId, Page};
use super::section::Section;
use super::starfield::StarField;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use twin_domain::{DomainError, Extent, Profile, RevealTracker};

/// Delay added per block position within a section
const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Seed for the hero star field
const STAR_SEED: u64 = 0x4b44_2e41_49;

/// TUI tunables (the `[tui]` config section)
#[derive(Debug, Clone)]
pub struct TuiSettings {
    pub tick: Duration,
    pub reveal_threshold: f32,
    pub reveal_duration: Duration,
    pub nav_scroll_threshold: u16,
    pub star_count: usize,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
            reveal_threshold: twin_domain::DEFAULT_THRESHOLD,
            reveal_duration: Duration::from_millis(1000),
            nav_scroll_threshold: 3,
            star_count: 50,
        }
    }
}

/// How a block should be drawn right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Hidden,
    /// Animation progress in `[0, 1)`
    Revealing(f32),
    Shown,
}

pub struct TuiState {
    pub focus: Focus,
    pub chat_open: bool,
    /// Transcript rows scrolled up from the newest turn (0 = follow latest)
    pub chat_scroll: u16,
    pub should_quit: bool,
    pub tick: u64,
    pub flash_message: Option<(String, Instant)>,

    page_scroll: u32,
    viewport_height: u16,
    profile: Profile,
    page: Page,
    reveal: RevealTracker<BlockId>,
    revealed_at: HashMap<BlockId, Instant>,
    stars: StarField,
    settings: TuiSettings,
}

impl TuiState {
    pub fn new(profile: Profile, settings: TuiSettings) -> Result<Self, DomainError> {
        let reveal = RevealTracker::with_threshold(settings.reveal_threshold)?;
        let page = Page::build(&profile, 80, 12);
        let stars = StarField::new(settings.star_count, STAR_SEED);

        let mut state = Self {
            focus: Focus::Page,
            chat_open: false,
            chat_scroll: 0,
            should_quit: false,
            tick: 0,
            flash_message: None,
            page_scroll: 0,
            viewport_height: 24,
            profile,
            page,
            reveal,
            revealed_at: HashMap::new(),
            stars,
            settings,
        };
        state.observe_blocks();
        Ok(state)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn settings(&self) -> &TuiSettings {
        &self.settings
    }

    pub fn page_scroll(&self) -> u32 {
        self.page_scroll
    }

    // ==================== Layout ====================

    /// Fit the page to the area it is drawn in.
    ///
    /// Rebuilds the page when the width or height changed; pending blocks
    /// move with the new layout, revealed blocks stay revealed.
    pub fn fit(&mut self, width: u16, height: u16) {
        let hero_height = height.max(8);
        if width != self.page.width() || hero_height != self.page.hero_height() {
            self.page = Page::build(&self.profile, width, hero_height);
            self.observe_blocks();
        }
        self.viewport_height = height;
        self.page_scroll = self.page_scroll.min(self.max_scroll());
        self.refresh_reveal();
    }

    fn observe_blocks(&mut self) {
        for (i, block) in self.page.blocks().iter().enumerate() {
            let id = block.id;
            // The hero is on screen from the start
            if id.section == Section::Home {
                continue;
            }
            let extent = self.page.extent(i);
            if self.reveal.is_observing(&id) {
                self.reveal.relocate(&id, extent);
            } else {
                self.reveal.observe(id, extent, |id| {
                    debug!(section = ?id.section, index = id.index, "Block revealed");
                });
            }
        }
    }

    fn refresh_reveal(&mut self) {
        let viewport = Extent::new(self.page_scroll, self.viewport_height as u32);
        let now = Instant::now();
        for id in self.reveal.update(viewport) {
            self.revealed_at.insert(id, now);
        }
    }

    pub fn visibility(&self, id: &BlockId, now: Instant) -> Visibility {
        if id.section == Section::Home {
            return Visibility::Shown;
        }
        let Some(revealed) = self.revealed_at.get(id) else {
            return Visibility::Hidden;
        };

        let start = *revealed + STAGGER_STEP * id.index as u32;
        let duration = self.settings.reveal_duration;
        if duration.is_zero() || now >= start + duration {
            return Visibility::Shown;
        }
        let elapsed = now.saturating_duration_since(start);
        Visibility::Revealing(elapsed.as_secs_f32() / duration.as_secs_f32())
    }

    /// Whether any block is still animating (drives redraws)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed_at
            .keys()
            .any(|id| matches!(self.visibility(id, now), Visibility::Revealing(_)))
    }

    // ==================== Page scrolling ====================

    fn max_scroll(&self) -> u32 {
        self.page.height().saturating_sub(self.viewport_height as u32)
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.page_scroll = offset.min(self.max_scroll());
        self.refresh_reveal();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_to(self.page_scroll.saturating_add(1));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_to(self.page_scroll.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        let step = (self.viewport_height as u32).saturating_sub(2).max(1);
        self.scroll_to(self.page_scroll.saturating_add(step));
    }

    pub fn page_up(&mut self) {
        let step = (self.viewport_height as u32).saturating_sub(2).max(1);
        self.scroll_to(self.page_scroll.saturating_sub(step));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(u32::MAX);
    }

    pub fn jump_to(&mut self, section: Section) {
        self.scroll_to(self.page.section_top(section));
    }

    /// Navbar switches to its solid style past the threshold
    pub fn nav_scrolled(&self) -> bool {
        self.page_scroll > self.settings.nav_scroll_threshold as u32
    }

    pub fn active_section(&self) -> Section {
        self.page.section_at(self.page_scroll)
    }

    // ==================== Chat panel ====================

    pub fn open_chat(&mut self) {
        self.chat_open = true;
        self.focus = Focus::Chat;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
        self.focus = Focus::Page;
    }

    pub fn toggle_chat(&mut self) {
        if self.chat_open && self.focus == Focus::Chat {
            self.close_chat();
        } else {
            self.open_chat();
        }
    }

    /// Move focus between page and an open chat panel
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Page if self.chat_open => Focus::Chat,
            _ => Focus::Page,
        };
    }

    pub fn chat_scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn chat_scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn chat_scroll_to_latest(&mut self) {
        self.chat_scroll = 0;
    }

    // ==================== Flash / tick ====================

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.expire_flash(Duration::from_secs(4));
    }
}
