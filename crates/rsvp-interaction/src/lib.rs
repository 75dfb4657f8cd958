//! Dialogue engine for the RSVP chat.
//!
//! [`DialogueEngine::handle`] is the single turn handler: it takes the
//! current [`SessionState`] and one [`TurnInput`], and returns the next state
//! together with the messages to show and what the idle timer should do.
//! Genuine utterances and idle timer fires go through the same handler.

pub mod keywords;

use std::sync::Arc;

use rsvp_core::catalog::{Catalog, TemplateVars, keys, numbered_list};
use rsvp_core::error::Result;
use rsvp_core::guest::{NameValidator, Validation, contains_name, format_name};
use rsvp_core::idle::{IdleEscalation, IdleSettings, IdleStrike, TimerDirective};
use rsvp_core::registry::{RegistryGateway, merge_names};
use rsvp_core::session::{
    EntryPoint, OutboundMessage, Phase, SeatLimit, SessionState, TurnInput,
};
use rsvp_core::Locale;
use tracing::Instrument;

use keywords::{is_affirmative, is_negative, parse_seat_count};

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The session after the turn.
    pub state: SessionState,
    /// Messages to deliver, in order.
    pub messages: Vec<OutboundMessage>,
    /// What the idle timer should do next.
    pub timer: TimerDirective,
}

impl Turn {
    /// Catalog keys of the messages, handy for logging and assertions.
    pub fn message_keys(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.key.as_str()).collect()
    }
}

/// Drives one RSVP conversation.
///
/// The engine is stateless between turns; everything about the conversation
/// lives in the [`SessionState`] passed to [`DialogueEngine::handle`].
pub struct DialogueEngine {
    registry: Arc<dyn RegistryGateway>,
    validator: NameValidator,
    catalog: &'static Catalog,
    idle: IdleSettings,
}

impl DialogueEngine {
    /// Creates an engine with the built-in catalog, default idle intervals
    /// and no pre-approved names.
    pub fn new(registry: Arc<dyn RegistryGateway>) -> Self {
        Self {
            registry,
            validator: NameValidator::new(),
            catalog: Catalog::builtin(),
            idle: IdleSettings::default(),
        }
    }

    pub fn with_validator(mut self, validator: NameValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_idle_settings(mut self, idle: IdleSettings) -> Self {
        self.idle = idle;
        self
    }

    pub fn idle_settings(&self) -> IdleSettings {
        self.idle
    }

    /// Opens a session and produces the first bot message.
    ///
    /// Authorized sessions get the greeting and arm the idle timer.
    /// Unauthorized ones get the entry-point redirect and no timer.
    pub fn start(&self, locale: Locale, entry: EntryPoint) -> Turn {
        let state = SessionState::new(locale, entry.is_authorized());
        tracing::info!(
            session_id = %state.id,
            %locale,
            authorized = state.entry_authorized,
            "RSVP session started"
        );

        if state.entry_authorized {
            let greeting = self.message(keys::GREETING, locale, &TemplateVars::new());
            Turn {
                state,
                messages: vec![greeting],
                timer: self.idle.on_activity(),
            }
        } else {
            let redirect = self.message(keys::MUST_USE_RSVP, locale, &TemplateVars::new());
            Turn {
                state,
                messages: vec![redirect],
                timer: TimerDirective::Cancel,
            }
        }
    }

    /// Processes one input as an atomic step.
    pub async fn handle(&self, state: SessionState, input: TurnInput) -> Turn {
        let span = tracing::info_span!(
            "turn",
            session_id = %state.id,
            phase = %state.phase,
            genuine = input.is_genuine()
        );

        async move {
            let turn = match input {
                TurnInput::IdleElapsed => self.on_idle(state),
                TurnInput::Utterance(text) => self.on_utterance(state, &text).await,
            };
            tracing::debug!(
                phase = %turn.state.phase,
                names = turn.state.collected_names.len(),
                messages = ?turn.message_keys(),
                "turn complete"
            );
            turn
        }
        .instrument(span)
        .await
    }

    // ============================================================================
    // Idle escalation
    // ============================================================================

    fn on_idle(&self, mut state: SessionState) -> Turn {
        if state.phase.is_ended() || !state.entry_authorized {
            return self.quiet(state, TimerDirective::Cancel);
        }

        match self.idle.on_fire(state.idle_strikes) {
            IdleEscalation::CheckIn { rearm } => {
                state.idle_strikes = IdleStrike::CheckedIn;
                tracing::info!("user idle, sending check-in");
                let msg = self.message(keys::IDLE_CHECK_IN, state.locale, &TemplateVars::new());
                Turn {
                    state,
                    messages: vec![msg],
                    timer: TimerDirective::Arm(rearm),
                }
            }
            IdleEscalation::Timeout => {
                state.idle_strikes = IdleStrike::TimedOut;
                state.phase = Phase::Ended;
                tracing::info!("user idle after check-in, ending session");
                let msg = self.message(keys::IDLE_TIMEOUT, state.locale, &TemplateVars::new());
                Turn {
                    state,
                    messages: vec![msg],
                    timer: TimerDirective::Cancel,
                }
            }
            IdleEscalation::Ignore => self.quiet(state, TimerDirective::Cancel),
        }
    }

    // ============================================================================
    // Utterances
    // ============================================================================

    async fn on_utterance(&self, mut state: SessionState, text: &str) -> Turn {
        if !state.entry_authorized || state.phase.is_ended() {
            let msg = self.message(keys::MUST_USE_RSVP, state.locale, &TemplateVars::new());
            return Turn {
                state,
                messages: vec![msg],
                timer: TimerDirective::Cancel,
            };
        }

        let text = text.trim();
        if text.is_empty() {
            return self.quiet(state, TimerDirective::Keep);
        }

        state.idle_strikes = IdleStrike::Active;

        let (state, messages) = match state.phase {
            Phase::AwaitingSeatCount => self.on_seat_count(state, text),
            Phase::CollectingNames => self.on_collecting(state, text).await,
            Phase::AwaitingListConfirmation => self.on_confirmation(state, text).await,
            Phase::Ended => (state, Vec::new()),
        };

        let timer = if state.phase.is_ended() {
            TimerDirective::Cancel
        } else {
            self.idle.on_activity()
        };

        Turn {
            state,
            messages,
            timer,
        }
    }

    fn on_seat_count(
        &self,
        mut state: SessionState,
        text: &str,
    ) -> (SessionState, Vec<OutboundMessage>) {
        let limit = parse_seat_count(text).and_then(|n| SeatLimit::try_from(n).ok());
        let Some(limit) = limit else {
            let msg = self.message(keys::INVALID_SEAT_COUNT, state.locale, &TemplateVars::new());
            return (state, vec![msg]);
        };

        state.seat_limit = Some(limit);
        state.phase = Phase::CollectingNames;
        tracing::info!(seat_limit = limit.get(), "seat limit set");

        let vars = TemplateVars::new().with("count", limit.get());
        let confirmed = self.message(keys::SEAT_COUNT_CONFIRMED, state.locale, &vars);
        let instructions_key = if limit.get() == 1 {
            keys::GUEST_INSTRUCTIONS_SINGLE
        } else {
            keys::GUEST_INSTRUCTIONS_MULTIPLE
        };
        let instructions = self.catalog.render(instructions_key, state.locale, &vars);

        let combined = OutboundMessage::new(
            keys::SEAT_COUNT_CONFIRMED,
            format!("{}\n\n{}", confirmed.text, instructions),
        );
        (state, vec![combined])
    }

    async fn on_collecting(
        &self,
        mut state: SessionState,
        text: &str,
    ) -> (SessionState, Vec<OutboundMessage>) {
        let locale = state.locale;

        if is_negative(text, locale) {
            return self.on_decline(state).await;
        }

        let Some(limit) = state.seat_limit else {
            // Cannot collect without a limit; ask for it again.
            state.phase = Phase::AwaitingSeatCount;
            let msg = self.message(keys::INVALID_SEAT_COUNT, locale, &TemplateVars::new());
            return (state, vec![msg]);
        };

        if state.collected_names.len() >= limit.as_usize() {
            let vars = TemplateVars::new().with("count", limit.get());
            let msg = self.message(keys::MAX_NAMES_REACHED, locale, &vars);
            return (state, vec![msg]);
        }

        if let Validation::Rejected(reason) = self.validator.validate(text) {
            tracing::debug!(?reason, "name rejected");
            let msg = self.message(keys::INVALID_NAME, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }

        let name = format_name(text);
        if state.has_name(&name) || self.registry_contains(&name).await {
            tracing::info!("duplicate guest name");
            let msg = self.message(keys::DUPLICATE_NAME, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }

        if let Err(e) = state.push_name(name) {
            tracing::warn!(error = %e, "name not added");
            let msg = self.message(keys::DUPLICATE_NAME, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }
        state.partial_summary_shown = false;

        let count = state.collected_names.len();
        tracing::info!(count, seat_limit = limit.get(), "guest name added");

        if state.is_full() {
            state.phase = Phase::AwaitingListConfirmation;
            let vars = TemplateVars::new()
                .with("count", count)
                .with("names", numbered_list(&state.collected_names));
            let msg = self.message(keys::ALL_NAMES_COLLECTED, locale, &vars);
            return (state, vec![msg]);
        }

        let remaining = limit.as_usize() - count;
        let vars = TemplateVars::new()
            .with("remaining", remaining)
            .with("seats", self.catalog.plural(keys::SEAT, locale, remaining));
        let msg = self.message(keys::MORE_NAMES_PROMPT, locale, &vars);
        (state, vec![msg])
    }

    async fn on_decline(&self, mut state: SessionState) -> (SessionState, Vec<OutboundMessage>) {
        let locale = state.locale;
        let count = state.collected_names.len();
        let limit = state.seat_limit.map(|l| l.as_usize()).unwrap_or(0);

        if count == 0 {
            state.phase = Phase::Ended;
            tracing::info!("invitee declined without names");
            let msg = self.message(keys::NO_RSVP, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }

        if count < limit && !state.partial_summary_shown {
            let remaining = limit - count;
            let vars = TemplateVars::new()
                .with("names", numbered_list(&state.collected_names))
                .with("remaining", remaining)
                .with("seats", self.catalog.plural(keys::SEAT, locale, remaining))
                .with("needed", self.catalog.plural(keys::MORE_NAMES, locale, remaining));
            state.partial_summary_shown = true;
            let msg = self.message(keys::PARTIAL_LIST, locale, &vars);
            return (state, vec![msg]);
        }

        if count < limit {
            return self.finalize(state).await;
        }

        // A full list is only declined here if the confirmation step was
        // skipped; treat it like rejecting the list.
        state.clear_names();
        state.phase = Phase::CollectingNames;
        let msg = self.message(keys::REENTER_NAMES, locale, &TemplateVars::new());
        (state, vec![msg])
    }

    async fn on_confirmation(
        &self,
        mut state: SessionState,
        text: &str,
    ) -> (SessionState, Vec<OutboundMessage>) {
        let locale = state.locale;

        if is_affirmative(text, locale) {
            return self.finalize(state).await;
        }

        if is_negative(text, locale) {
            tracing::info!("collected list rejected, re-entering names");
            state.clear_names();
            state.phase = Phase::CollectingNames;
            let msg = self.message(keys::REENTER_NAMES, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }

        let msg = self.message(keys::CONFIRM_PROMPT, locale, &TemplateVars::new());
        (state, vec![msg])
    }

    // ============================================================================
    // Registry
    // ============================================================================

    /// Merges the session's names into the registry and ends the session.
    ///
    /// If the write fails the state comes back unchanged so a later
    /// confirmation retries with a fresh fetch.
    async fn finalize(&self, mut state: SessionState) -> (SessionState, Vec<OutboundMessage>) {
        let locale = state.locale;

        if let Err(e) = self.merge_into_registry(&state.collected_names).await {
            tracing::warn!(error = %e, "saving RSVP failed");
            let msg = self.message(keys::RSVP_SAVE_ERROR, locale, &TemplateVars::new());
            return (state, vec![msg]);
        }

        let count = state.collected_names.len();
        state.phase = Phase::Ended;
        state.partial_summary_shown = false;
        tracing::info!(count, "RSVP recorded");

        let vars = TemplateVars::new()
            .with("count", count)
            .with("plural", self.catalog.plural(keys::NAME_SUFFIX, locale, count));
        let msg = self.message(keys::RSVP_SAVED, locale, &vars);
        (state, vec![msg])
    }

    /// A failed fetch merges into an empty registry; only the write can fail.
    async fn merge_into_registry(&self, names: &[String]) -> Result<()> {
        let existing = match self.registry.fetch_all().await {
            Ok(existing) => existing,
            Err(e) => {
                tracing::warn!(error = %e, "registry fetch failed, saving session names only");
                Vec::new()
            }
        };
        let merged = merge_names(existing, names);
        self.registry.replace_all(&merged).await
    }

    /// Duplicate check against the registry. A failed fetch counts as an
    /// empty registry.
    async fn registry_contains(&self, name: &str) -> bool {
        match self.registry.fetch_all().await {
            Ok(existing) => contains_name(&existing, name),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "registry fetch failed, duplicate check limited to this session"
                );
                false
            }
        }
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn message(&self, key: &str, locale: Locale, vars: &TemplateVars) -> OutboundMessage {
        OutboundMessage::new(key, self.catalog.render(key, locale, vars))
    }

    fn quiet(&self, state: SessionState, timer: TimerDirective) -> Turn {
        Turn {
            state,
            messages: Vec::new(),
            timer,
        }
    }
}
