//! Chat Session Controller
//!
//! Owns the transcript, the draft input and the Idle/Sending status of one
//! chat widget, and turns each accepted submission into exactly one call to
//! the [`GenerationGateway`].
//!
//! A turn has three steps so an event loop can keep drawing while the
//! request is in flight:
//!
//! ```text
//! begin_submit(text)  ──► PendingTurn ──resolve().await──► TurnOutcome ──► complete(outcome)
//!   (Idle → Sending,        (owns gateway + request,          (Sending → Idle,
//!    user turn appended)     touches no session state)          assistant turn appended)
//! ```
//!
//! [`ChatSessionController::submit`] runs all three back to back.

use crate::config::ChatSettings;
use crate::ports::chat_event::ChatEvent;
use crate::ports::generation_gateway::{GatewayError, GenerationGateway, GenerationRequest};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use twin_domain::util::log_preview;
use twin_domain::{DraftInput, Message, PersonaContext, SessionStatus, Transcript};

/// Why a submission was ignored
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("Nothing to send")]
    EmptyInput,

    #[error("A reply is still pending")]
    AlreadySending,
}

/// An accepted turn whose request has not been sent yet.
pub struct PendingTurn {
    turn: u64,
    gateway: Arc<dyn GenerationGateway>,
    request: GenerationRequest,
}

impl PendingTurn {
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Perform the single outbound call.
    pub async fn resolve(self) -> TurnOutcome {
        let result = self.gateway.generate(&self.request).await;
        TurnOutcome {
            turn: self.turn,
            result,
        }
    }
}

/// Settled result of a [`PendingTurn`]
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    turn: u64,
    result: Result<String, GatewayError>,
}

impl TurnOutcome {
    pub fn new(turn: u64, result: Result<String, GatewayError>) -> Self {
        Self { turn, result }
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn result(&self) -> &Result<String, GatewayError> {
        &self.result
    }
}

/// Controller for one mounted chat widget.
pub struct ChatSessionController {
    gateway: Arc<dyn GenerationGateway>,
    persona: PersonaContext,
    settings: ChatSettings,
    transcript: Transcript,
    draft: DraftInput,
    status: SessionStatus,
    /// Turn id of the request in flight, if any
    in_flight: Option<u64>,
    next_turn: u64,
    /// Channel sender for chat events
    events: Option<mpsc::UnboundedSender<ChatEvent>>,
}

impl ChatSessionController {
    /// Create a controller; the transcript starts with the greeting.
    pub fn new(
        gateway: Arc<dyn GenerationGateway>,
        persona: PersonaContext,
        settings: ChatSettings,
    ) -> Self {
        let transcript = Transcript::with_greeting(settings.greeting.clone());
        Self {
            gateway,
            persona,
            settings,
            transcript,
            draft: DraftInput::new(),
            status: SessionStatus::Idle,
            in_flight: None,
            next_turn: 1,
            events: None,
        }
    }

    /// Create with an event channel.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<ChatEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        &mut self.draft
    }

    pub fn persona(&self) -> &PersonaContext {
        &self.persona
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn model_name(&self) -> &str {
        self.gateway.model_name()
    }

    /// Whether the send affordance should be enabled
    pub fn can_submit(&self) -> bool {
        self.status.is_idle() && !self.draft.is_blank()
    }

    /// Accept a user turn and prepare its request.
    ///
    /// On success the user message is in the transcript, the draft is
    /// cleared and the session is `Sending`. Rejections change nothing.
    pub fn begin_submit(&mut self, text: &str) -> Result<PendingTurn, SubmitRejected> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat submission");
            return Err(SubmitRejected::EmptyInput);
        }
        if self.status.is_sending() {
            debug!("Ignoring chat submission while a reply is pending");
            return Err(SubmitRejected::AlreadySending);
        }

        let turn = self.next_turn;
        self.next_turn += 1;

        info!(turn, "Chat turn: {}", log_preview(text, 80));

        self.append(Message::user(text));
        self.draft.clear();
        self.set_status(SessionStatus::Sending);
        self.in_flight = Some(turn);

        Ok(PendingTurn {
            turn,
            gateway: self.gateway.clone(),
            request: GenerationRequest::new(self.persona.as_str(), text),
        })
    }

    /// Submit whatever is in the draft.
    pub fn begin_submit_draft(&mut self) -> Result<PendingTurn, SubmitRejected> {
        let text = self.draft.text().to_string();
        self.begin_submit(&text)
    }

    /// Record the settled call and return to `Idle`.
    ///
    /// Returns the appended assistant turn, or `None` when the outcome does
    /// not belong to the request in flight.
    pub fn complete(&mut self, outcome: TurnOutcome) -> Option<&Message> {
        if self.in_flight != Some(outcome.turn) {
            warn!(
                turn = outcome.turn,
                in_flight = ?self.in_flight,
                "Discarding outcome for a turn that is not in flight"
            );
            return None;
        }

        let text = match outcome.result {
            Ok(reply) if !reply.is_empty() => reply,
            Ok(_) => {
                warn!(
                    turn = outcome.turn,
                    kind = "shape-failure",
                    "Empty reply, using fallback"
                );
                self.settings.fallback_reply.clone()
            }
            Err(e) => {
                warn!(
                    turn = outcome.turn,
                    kind = e.kind(),
                    "Generation failed, using fallback: {}",
                    e
                );
                self.settings.fallback_reply.clone()
            }
        };

        self.in_flight = None;
        let index = self.append(Message::assistant(text));
        self.set_status(SessionStatus::Idle);
        self.transcript.messages().get(index)
    }

    /// Full turn: begin, resolve, complete.
    pub async fn submit(&mut self, text: &str) -> Result<&Message, SubmitRejected> {
        let pending = self.begin_submit(text)?;
        let outcome = pending.resolve().await;
        let index = self.transcript.len();
        self.complete(outcome);
        // complete() always appends for the turn we just started
        Ok(&self.transcript.messages()[index])
    }

    /// Full turn from the draft.
    pub async fn submit_draft(&mut self) -> Result<&Message, SubmitRejected> {
        let text = self.draft.text().to_string();
        self.submit(&text).await
    }

    fn append(&mut self, message: Message) -> usize {
        let index = self.transcript.len();
        let appended = self.transcript.append(message).clone();
        self.emit(ChatEvent::MessageAppended {
            index,
            message: appended,
        });
        self.emit(ChatEvent::ScrollToLatest);
        index
    }

    fn set_status(&mut self, status: SessionStatus) {
        if self.status != status {
            self.status = status;
            self.emit(ChatEvent::StatusChanged(status));
        }
    }

    fn emit(&self, event: ChatEvent) {
        if let Some(tx) = &self.events {
            // Receiver gone means the widget is unmounting
            let _ = tx.send(event);
        }
    }
}
