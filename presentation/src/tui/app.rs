//! TUI application — main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop, owns the controller)
//!   ├─ crossterm EventStream ── keys ──> controller.begin_submit_draft()
//!   │                                          │
//!   │                                          └─ PendingTurn ──spawn──> JoinSet
//!   ├─ pending.join_next() ── TurnOutcome ──> controller.complete()
//!   ├─ events_rx (ChatEvent from controller)
//!   └─ tick_interval (twinkle, typing dots, reveal fades)
//! ```

use super::mode::{self, Focus, KeyAction};
use super::section::Section;
use super::state::{TuiSettings, TuiState};
use super::widgets::{
    MainLayout, chat_panel::ChatPanelWidget, navbar::NavbarWidget, page::PageWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};
use twin_application::{
    ChatEvent, ChatSessionController, GatewayError, SubmitRejected, TurnOutcome,
};
use twin_domain::{DomainError, Profile, Role};

/// Redraw interval while a reveal animation is running
const ANIMATION_FRAME: Duration = Duration::from_millis(40);

/// Main TUI application
pub struct TuiApp {
    controller: ChatSessionController,
    events_rx: mpsc::UnboundedReceiver<ChatEvent>,

    /// At most one resolving turn (the controller rejects a second submit)
    pending: JoinSet<TurnOutcome>,
    pending_turn: Option<u64>,

    state: TuiState,
}

impl TuiApp {
    /// Create a new TUI application around a controller
    pub fn new(
        controller: ChatSessionController,
        profile: Profile,
        settings: TuiSettings,
    ) -> Result<Self, DomainError> {
        let (events_tx, events_rx) = mpsc::unbounded_channel::<ChatEvent>();
        let controller = controller.with_events(events_tx);
        let state = TuiState::new(profile, settings)?;

        Ok(Self {
            controller,
            events_rx,
            pending: JoinSet::new(),
            pending_turn: None,
            state,
        })
    }

    pub fn controller(&self) -> &ChatSessionController {
        &self.controller
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        info!(model = %self.controller.model_name(), "TUI started");

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.state.settings().tick);

        loop {
            let size = terminal.size()?;
            let layout = MainLayout::compute(Rect::new(0, 0, size.width, size.height));
            self.state.fit(layout.page.width, layout.page.height);

            // Render
            let now = Instant::now();
            let animating = self.state.is_animating(now);
            terminal.draw(|frame| {
                Self::render(frame, layout, &self.controller, &self.state, now);
            })?;

            if self.state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event, layout);
                }

                // Settled network call
                Some(joined) = self.pending.join_next(), if !self.pending.is_empty() => {
                    self.on_turn_settled(joined);
                }

                // ChatEvents from the controller
                Some(event) = self.events_rx.recv() => {
                    self.apply_chat_event(event);
                }

                // Tick for star twinkle, typing dots, reveal fades, flash expiry
                _ = tick.tick() => {
                    self.state.on_tick();
                }

                // Smooth frames for slide/fade, without advancing the tick
                _ = tokio::time::sleep(ANIMATION_FRAME), if animating => {}
            }
        }

        if !self.pending.is_empty() {
            debug!("Abandoning in-flight chat turn on quit");
        }
        self.pending.abort_all();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(
        frame: &mut ratatui::Frame,
        layout: MainLayout,
        controller: &ChatSessionController,
        state: &TuiState,
        now: Instant,
    ) {
        frame.render_widget(NavbarWidget::new(state), layout.navbar);
        frame.render_widget(PageWidget::new(state, now), layout.page);
        frame.render_widget(
            StatusBarWidget::new(state, controller.status(), controller.model_name()),
            layout.status_bar,
        );

        if state.chat_open {
            frame.render_widget(ChatPanelWidget::new(controller, state), layout.chat);
            if state.focus == Focus::Chat {
                frame.set_cursor_position(ChatPanelWidget::cursor_position(
                    layout.chat,
                    controller.draft(),
                ));
            }
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event, layout: MainLayout) {
        match event {
            Event::Key(key) => {
                let action = mode::handle_key_event(self.state.focus, key);
                self.handle_action(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse, layout),
            Event::Resize(_, _) => {
                // Layout is recomputed on next draw
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, layout: MainLayout) {
        let over_chat = self.state.chat_open
            && layout
                .chat
                .contains(ratatui::layout::Position::new(mouse.column, mouse.row));
        match (mouse.kind, over_chat) {
            (MouseEventKind::ScrollUp, true) => self.state.chat_scroll_up(),
            (MouseEventKind::ScrollDown, true) => self.state.chat_scroll_down(),
            (MouseEventKind::ScrollUp, false) => self.state.scroll_up(),
            (MouseEventKind::ScrollDown, false) => self.state.scroll_down(),
            _ => {}
        }
    }

    /// Handle a semantic key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.state.should_quit = true,

            // Page navigation
            KeyAction::ScrollUp => self.state.scroll_up(),
            KeyAction::ScrollDown => self.state.scroll_down(),
            KeyAction::PageUp => self.state.page_up(),
            KeyAction::PageDown => self.state.page_down(),
            KeyAction::ScrollToTop => self.state.scroll_to_top(),
            KeyAction::ScrollToBottom => self.state.scroll_to_bottom(),
            KeyAction::JumpTo(key) => {
                if let Some(section) = Section::from_key(key) {
                    self.state.jump_to(section);
                }
            }

            // Chat panel
            KeyAction::ToggleChat => self.state.toggle_chat(),
            KeyAction::CloseChat => self.state.close_chat(),
            KeyAction::SwitchFocus => self.state.switch_focus(),
            KeyAction::InsertChar(c) => self.controller.draft_mut().insert_char(c),
            KeyAction::Backspace => self.controller.draft_mut().backspace(),
            KeyAction::Delete => self.controller.draft_mut().delete(),
            KeyAction::CursorLeft => self.controller.draft_mut().cursor_left(),
            KeyAction::CursorRight => self.controller.draft_mut().cursor_right(),
            KeyAction::CursorHome => self.controller.draft_mut().cursor_home(),
            KeyAction::CursorEnd => self.controller.draft_mut().cursor_end(),
            KeyAction::Submit => self.submit(),
            KeyAction::ChatScrollUp => self.state.chat_scroll_up(),
            KeyAction::ChatScrollDown => self.state.chat_scroll_down(),
        }
    }

    /// Start a turn from the draft and resolve it in the background
    fn submit(&mut self) {
        match self.controller.begin_submit_draft() {
            Ok(pending) => {
                self.pending_turn = Some(pending.turn());
                self.pending.spawn(pending.resolve());
            }
            // Send affordance is disabled in both cases
            Err(SubmitRejected::EmptyInput) | Err(SubmitRejected::AlreadySending) => {}
        }
    }

    /// Feed a settled turn back into the controller
    fn on_turn_settled(&mut self, joined: Result<TurnOutcome, JoinError>) {
        let turn = self.pending_turn.take();
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Chat turn task failed: {}", e);
                match turn {
                    Some(turn) => TurnOutcome::new(
                        turn,
                        Err(GatewayError::Transport(format!("task failed: {}", e))),
                    ),
                    None => return,
                }
            }
        };
        self.controller.complete(outcome);
    }

    /// Apply a ChatEvent to the view state
    fn apply_chat_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::ScrollToLatest => self.state.chat_scroll_to_latest(),
            ChatEvent::MessageAppended { message, .. } => {
                if message.role() == Role::Assistant && !self.state.chat_open {
                    self.state.set_flash(format!(
                        "New reply from AI {} (press c)",
                        self.state.profile().first_name()
                    ));
                }
            }
            ChatEvent::StatusChanged(status) => {
                debug!(%status, "Chat status changed");
            }
        }
    }

    /// Apply every queued ChatEvent
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_chat_event(event);
        }
    }

    /// Wait for the in-flight turn, if any, and complete it
    pub async fn settle_pending(&mut self) {
        if let Some(joined) = self.pending.join_next().await {
            self.on_turn_settled(joined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use twin_application::{ChatSettings, GenerationGateway, GenerationRequest};
    use twin_domain::{PersonaContext, SessionStatus};

    struct CountingGateway {
        calls: AtomicUsize,
        reply: Result<String, GatewayError>,
    }

    #[async_trait]
    impl GenerationGateway for CountingGateway {
        fn model_name(&self) -> &str {
            "counting"
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn app(reply: Result<String, GatewayError>) -> (TuiApp, Arc<CountingGateway>) {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
            reply,
        });
        let controller = ChatSessionController::new(
            gateway.clone(),
            PersonaContext::new("persona"),
            ChatSettings::default().with_fallback_reply("offline"),
        );
        let app = TuiApp::new(controller, Profile::default(), TuiSettings::default()).unwrap();
        (app, gateway)
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_action(KeyAction::InsertChar(c));
        }
    }

    #[tokio::test]
    async fn test_full_turn_through_event_loop() {
        let (mut app, gateway) = app(Ok("Hello there".into()));
        app.handle_action(KeyAction::ToggleChat);
        type_text(&mut app, "hi");
        app.handle_action(KeyAction::Submit);

        assert_eq!(app.controller().status(), SessionStatus::Sending);
        assert_eq!(app.controller().draft().text(), "");

        app.settle_pending().await;
        app.drain_events();

        let transcript = app.controller().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().unwrap().text(), "Hello there");
        assert_eq!(app.controller().status(), SessionStatus::Idle);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_sending_is_ignored() {
        let (mut app, gateway) = app(Ok("one".into()));
        app.handle_action(KeyAction::ToggleChat);
        type_text(&mut app, "first");
        app.handle_action(KeyAction::Submit);
        type_text(&mut app, "second");
        app.handle_action(KeyAction::Submit);

        // Draft kept, nothing else queued
        assert_eq!(app.controller().draft().text(), "second");
        assert_eq!(app.controller().transcript().len(), 2);

        app.settle_pending().await;
        assert_eq!(app.controller().transcript().len(), 3);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_spawns_nothing() {
        let (mut app, gateway) = app(Ok("unused".into()));
        app.handle_action(KeyAction::ToggleChat);
        type_text(&mut app, "   ");
        app.handle_action(KeyAction::Submit);

        assert!(app.pending.is_empty());
        assert_eq!(app.controller().transcript().len(), 1);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_shows_fallback() {
        let (mut app, _) = app(Err(GatewayError::MissingApiKey));
        app.handle_action(KeyAction::ToggleChat);
        type_text(&mut app, "hi");
        app.handle_action(KeyAction::Submit);
        app.settle_pending().await;

        assert_eq!(app.controller().transcript().last().unwrap().text(), "offline");
        assert_eq!(app.controller().status(), SessionStatus::Idle);
    }

    #[tokio::test]
    async fn test_reply_scrolls_chat_to_latest() {
        let (mut app, _) = app(Ok("reply".into()));
        app.handle_action(KeyAction::ToggleChat);
        app.handle_action(KeyAction::ChatScrollUp);
        app.handle_action(KeyAction::ChatScrollUp);
        assert_eq!(app.state().chat_scroll, 2);

        type_text(&mut app, "hi");
        app.handle_action(KeyAction::Submit);
        app.settle_pending().await;
        app.drain_events();
        assert_eq!(app.state().chat_scroll, 0);
    }

    #[tokio::test]
    async fn test_reply_while_closed_flashes() {
        let (mut app, _) = app(Ok("reply".into()));
        app.handle_action(KeyAction::ToggleChat);
        type_text(&mut app, "hi");
        app.handle_action(KeyAction::Submit);
        app.handle_action(KeyAction::CloseChat);

        app.settle_pending().await;
        app.drain_events();
        let flash = app.state().flash_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(flash, Some("New reply from AI Kaustav (press c)"));
    }

    #[test]
    fn test_page_keys_do_not_type_into_chat() {
        let (mut app, _) = app(Ok("unused".into()));
        app.handle_action(mode::handle_key_event(
            app.state().focus,
            crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char('j'),
                crossterm::event::KeyModifiers::NONE,
            ),
        ));
        assert_eq!(app.controller().draft().text(), "");
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app(Ok("unused".into()));
        app.handle_action(KeyAction::Quit);
        assert!(app.state().should_quit);
    }
}
