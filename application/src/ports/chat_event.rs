//! Chat events emitted by the session controller
//!
//! These events form the output port from the application layer to the
//! presentation layer, which uses them to redraw and auto-scroll.

use twin_domain::{Message, SessionStatus};

/// Events emitted by ChatSessionController for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A turn was appended to the transcript
    MessageAppended {
        /// Index of the new turn in the transcript
        index: usize,
        message: Message,
    },
    /// The transcript view should jump to the newest turn
    ScrollToLatest,
    /// Idle ↔ Sending transition
    StatusChanged(SessionStatus),
}
