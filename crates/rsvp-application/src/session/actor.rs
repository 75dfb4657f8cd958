//! Session actor: one task per conversation.

use std::sync::Arc;

use rsvp_core::catalog::{Catalog, TemplateVars, keys};
use rsvp_core::error::Result;
use rsvp_core::session::{EntryPoint, OutboundMessage, SessionState, TranscriptEntry, TurnInput};
use rsvp_core::{Locale, RsvpError};
use rsvp_interaction::{DialogueEngine, Turn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::SessionEvent;
use super::idle_timer::IdleTimer;

const EVENT_QUEUE: usize = 32;
const OUTBOUND_QUEUE: usize = 32;

/// How a session starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Locale chosen up front. `None` makes the session ask for a language
    /// before the conversation begins.
    pub locale: Option<Locale>,
    pub entry: EntryPoint,
}

/// What a session leaves behind once its handle is closed.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// `None` if no language was ever chosen.
    pub state: Option<SessionState>,
    pub transcript: Vec<TranscriptEntry>,
}

/// Caller side of a running session.
pub struct SessionHandle {
    events: mpsc::Sender<SessionEvent>,
    task: JoinHandle<SessionSummary>,
}

impl SessionHandle {
    /// Queues a line typed by the invitee.
    pub async fn send(&self, text: impl Into<String>) -> Result<()> {
        self.events
            .send(SessionEvent::Utterance(text.into()))
            .await
            .map_err(|_| RsvpError::internal("session task has stopped"))
    }

    /// Copy of the transcript so far.
    pub async fn transcript(&self) -> Result<Vec<TranscriptEntry>> {
        let (reply, response) = oneshot::channel();
        self.events
            .send(SessionEvent::Transcript(reply))
            .await
            .map_err(|_| RsvpError::internal("session task has stopped"))?;
        response
            .await
            .map_err(|_| RsvpError::internal("session task dropped the transcript request"))
    }

    /// Closes the queue and waits for the session task to finish.
    pub async fn close(self) -> Result<SessionSummary> {
        drop(self.events);
        self.task
            .await
            .map_err(|e| RsvpError::internal(format!("session task failed: {}", e)))
    }
}

/// The session task's own state.
pub struct RsvpSession {
    engine: Arc<DialogueEngine>,
    entry: EntryPoint,
    state: Option<SessionState>,
    transcript: Vec<TranscriptEntry>,
    outbound: mpsc::Sender<OutboundMessage>,
    timer: IdleTimer,
}

impl RsvpSession {
    /// Starts a session task.
    ///
    /// Returns the handle for sending input and the stream of bot messages.
    /// The task runs until the handle is closed or dropped.
    pub fn spawn(
        engine: Arc<DialogueEngine>,
        options: SessionOptions,
    ) -> (SessionHandle, mpsc::Receiver<OutboundMessage>) {
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE);
        let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_QUEUE);

        let session = RsvpSession {
            engine,
            entry: options.entry,
            state: None,
            transcript: Vec::new(),
            outbound: outbound_tx,
            timer: IdleTimer::new(events_tx.downgrade()),
        };

        let task = tokio::spawn(session.run(options.locale, events_rx));
        (
            SessionHandle {
                events: events_tx,
                task,
            },
            outbound_rx,
        )
    }

    async fn run(
        mut self,
        locale: Option<Locale>,
        mut events: mpsc::Receiver<SessionEvent>,
    ) -> SessionSummary {
        match locale {
            Some(locale) => self.begin(locale).await,
            None => self.ask_for_language().await,
        }

        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::Utterance(text) => self.on_utterance(text).await,
                SessionEvent::IdleElapsed { generation } => self.on_idle(generation).await,
                SessionEvent::Transcript(reply) => {
                    let _ = reply.send(self.transcript.clone());
                }
            }
        }

        self.timer.cancel();
        if let Some(state) = &self.state {
            tracing::info!(session_id = %state.id, phase = %state.phase, "session closed");
        }
        SessionSummary {
            state: self.state,
            transcript: self.transcript,
        }
    }

    async fn begin(&mut self, locale: Locale) {
        let turn = self.engine.start(locale, self.entry);
        self.apply(turn).await;
    }

    async fn ask_for_language(&mut self) {
        let text = Catalog::builtin().render(keys::CHOOSE_LANGUAGE, Locale::FALLBACK, &TemplateVars::new());
        self.emit(OutboundMessage::new(keys::CHOOSE_LANGUAGE, text)).await;
    }

    async fn on_utterance(&mut self, text: String) {
        self.transcript.push(TranscriptEntry::user(text.clone()));

        let Some(state) = self.state.take() else {
            match Locale::from_choice(&text) {
                Some(locale) => {
                    tracing::debug!(%locale, "language chosen");
                    self.begin(locale).await;
                }
                None => self.ask_for_language().await,
            }
            return;
        };

        let turn = self.engine.handle(state, TurnInput::Utterance(text)).await;
        self.apply(turn).await;
    }

    async fn on_idle(&mut self, generation: u64) {
        if !self.timer.is_current(generation) {
            tracing::debug!(generation, "stale idle timer fire dropped");
            return;
        }
        self.timer.mark_fired();

        let Some(state) = self.state.take() else {
            return;
        };
        let turn = self.engine.handle(state, TurnInput::IdleElapsed).await;
        self.apply(turn).await;
    }

    async fn apply(&mut self, turn: Turn) {
        self.timer.apply(turn.timer);
        self.state = Some(turn.state);
        for message in turn.messages {
            self.emit(message).await;
        }
    }

    async fn emit(&mut self, message: OutboundMessage) {
        self.transcript.push(TranscriptEntry::bot(&message));
        if self.outbound.send(message).await.is_err() {
            tracing::debug!("outbound receiver dropped");
        }
    }
}
