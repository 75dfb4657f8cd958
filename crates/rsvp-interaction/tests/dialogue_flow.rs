//! End-to-end conversations through the dialogue engine.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rsvp_core::catalog::keys;
use rsvp_core::error::Result;
use rsvp_core::idle::{IdleStrike, TimerDirective};
use rsvp_core::registry::RegistryGateway;
use rsvp_core::session::{EntryPoint, Phase, SessionState, TurnInput};
use rsvp_core::{Locale, RsvpError};
use rsvp_interaction::{DialogueEngine, Turn};

/// Registry double that records writes and can be told to fail reads or writes.
#[derive(Default)]
struct RecordingRegistry {
    names: Mutex<Vec<String>>,
    writes: Mutex<Vec<Vec<String>>>,
    fetches: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingRegistry {
    fn with_names(names: &[&str]) -> Self {
        let registry = Self::default();
        *registry.names.lock().unwrap() = names.iter().map(|n| n.to_string()).collect();
        registry
    }

    fn writes(&self) -> Vec<Vec<String>> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryGateway for RecordingRegistry {
    async fn fetch_all(&self) -> Result<Vec<String>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RsvpError::registry("read timed out"));
        }
        Ok(self.names.lock().unwrap().clone())
    }

    async fn replace_all(&self, names: &[String]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RsvpError::registry("write rejected"));
        }
        self.writes.lock().unwrap().push(names.to_vec());
        *self.names.lock().unwrap() = names.to_vec();
        Ok(())
    }
}

async fn say(engine: &DialogueEngine, state: SessionState, text: &str) -> Turn {
    engine.handle(state, TurnInput::utterance(text)).await
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn full_rsvp_merges_with_existing_registry() {
    let registry = Arc::new(RecordingRegistry::with_names(&["Ana Reyes"]));
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let turn = say(&engine, state, "3").await;
    assert_eq!(turn.state.phase, Phase::CollectingNames);
    assert_eq!(turn.state.seat_limit.map(|l| l.get()), Some(3));

    let turn = say(&engine, turn.state, "Juan Dela Cruz").await;
    assert_eq!(turn.message_keys(), vec![keys::MORE_NAMES_PROMPT]);
    assert_eq!(turn.state.remaining_seats(), Some(2));

    let turn = say(&engine, turn.state, "Juan Dela Cruz").await;
    assert_eq!(turn.message_keys(), vec![keys::DUPLICATE_NAME]);
    assert_eq!(turn.state.remaining_seats(), Some(2));

    let turn = say(&engine, turn.state, "maria santos").await;
    assert_eq!(turn.state.remaining_seats(), Some(1));

    let turn = say(&engine, turn.state, "Pedro Reyes").await;
    assert_eq!(turn.state.phase, Phase::AwaitingListConfirmation);
    assert_eq!(turn.message_keys(), vec![keys::ALL_NAMES_COLLECTED]);
    let summary = &turn.messages[0].text;
    assert!(summary.contains("1. Juan Dela Cruz<br>2. Maria Santos<br>3. Pedro Reyes"));

    let turn = say(&engine, turn.state, "Yes").await;
    assert_eq!(turn.state.phase, Phase::Ended);
    assert_eq!(turn.timer, TimerDirective::Cancel);
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVED]);
    assert!(turn.messages[0].text.contains("recorded 3 guest names"));

    assert_eq!(
        registry.writes(),
        vec![names(&[
            "Ana Reyes",
            "Juan Dela Cruz",
            "Maria Santos",
            "Pedro Reyes"
        ])]
    );
}

#[tokio::test]
async fn failed_write_keeps_confirmation_open_for_retry() {
    let registry = Arc::new(RecordingRegistry::default());
    registry.fail_writes.store(true, Ordering::SeqCst);
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::Tl, EntryPoint::authorized()).state;

    let state = say(&engine, state, "1").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;
    assert_eq!(state.phase, Phase::AwaitingListConfirmation);

    let turn = say(&engine, state, "oo").await;
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVE_ERROR]);
    assert_eq!(turn.state.phase, Phase::AwaitingListConfirmation);
    assert_eq!(turn.state.collected_names, names(&["Juan Dela Cruz"]));
    assert!(registry.writes().is_empty());

    registry.fail_writes.store(false, Ordering::SeqCst);
    let fetches_before = registry.fetches.load(Ordering::SeqCst);

    let turn = say(&engine, turn.state, "Tama").await;
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVED]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert_eq!(registry.writes(), vec![names(&["Juan Dela Cruz"])]);
    // the retry reads the registry again
    assert!(registry.fetches.load(Ordering::SeqCst) > fetches_before);
}

#[tokio::test]
async fn declining_twice_saves_partial_list_once() {
    let registry = Arc::new(RecordingRegistry::default());
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = say(&engine, state, "3").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;

    let turn = say(&engine, state, "no").await;
    assert_eq!(turn.message_keys(), vec![keys::PARTIAL_LIST]);
    assert!(turn.state.partial_summary_shown);
    assert_eq!(turn.state.phase, Phase::CollectingNames);
    assert!(turn.messages[0].text.contains("You still have 2 seats left"));
    assert!(turn.messages[0].text.contains("2 more names"));
    assert!(registry.writes().is_empty());

    let turn = say(&engine, turn.state, "No").await;
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVED]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert!(turn.messages[0].text.contains("recorded 1 guest name."));
    assert_eq!(registry.writes(), vec![names(&["Juan Dela Cruz"])]);
}

#[tokio::test]
async fn unreadable_registry_still_saves_on_confirmation() {
    let registry = Arc::new(RecordingRegistry::with_names(&["Ana Reyes"]));
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = say(&engine, state, "1").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;
    assert_eq!(state.phase, Phase::AwaitingListConfirmation);

    registry.fail_reads.store(true, Ordering::SeqCst);
    let turn = say(&engine, state, "Yes").await;
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVED]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert_eq!(turn.timer, TimerDirective::Cancel);
    assert_eq!(registry.writes(), vec![names(&["Juan Dela Cruz"])]);
}

#[tokio::test]
async fn unreadable_registry_still_saves_after_second_decline() {
    let registry = Arc::new(RecordingRegistry::default());
    registry.fail_reads.store(true, Ordering::SeqCst);
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = say(&engine, state, "3").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;
    assert_eq!(state.collected_names, names(&["Juan Dela Cruz"]));

    let state = say(&engine, state, "no").await.state;
    assert!(state.partial_summary_shown);

    let turn = say(&engine, state, "no").await;
    assert_eq!(turn.message_keys(), vec![keys::RSVP_SAVED]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert_eq!(registry.writes(), vec![names(&["Juan Dela Cruz"])]);
}

#[tokio::test]
async fn new_name_after_partial_summary_shows_it_again() {
    let engine = DialogueEngine::new(Arc::new(RecordingRegistry::default()));
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = say(&engine, state, "3").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;
    let state = say(&engine, state, "no").await.state;
    let state = say(&engine, state, "Maria Santos").await.state;
    assert!(!state.partial_summary_shown);

    let turn = say(&engine, state, "none").await;
    assert_eq!(turn.message_keys(), vec![keys::PARTIAL_LIST]);
    assert!(turn.messages[0].text.contains("one more name"));
}

#[tokio::test]
async fn declining_without_names_ends_without_writing() {
    let registry = Arc::new(RecordingRegistry::default());
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::Bis, EntryPoint::authorized()).state;

    let state = say(&engine, state, "duha").await.state;
    let turn = say(&engine, state, "dili").await;
    assert_eq!(turn.message_keys(), vec![keys::NO_RSVP]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert!(registry.writes().is_empty());
}

#[tokio::test]
async fn rejecting_full_list_starts_over() {
    let registry = Arc::new(RecordingRegistry::default());
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = say(&engine, state, "2").await.state;
    let state = say(&engine, state, "Juan Dela Cruz").await.state;
    let state = say(&engine, state, "Maria Santos").await.state;

    let turn = say(&engine, state, "No").await;
    assert_eq!(turn.message_keys(), vec![keys::REENTER_NAMES]);
    assert_eq!(turn.state.phase, Phase::CollectingNames);
    assert!(turn.state.collected_names.is_empty());
    assert_eq!(turn.state.seat_limit.map(|l| l.get()), Some(2));

    let turn = say(&engine, turn.state, "Pedro Reyes").await;
    assert_eq!(turn.state.collected_names, names(&["Pedro Reyes"]));
    assert!(registry.writes().is_empty());
}

#[tokio::test]
async fn idle_check_in_then_timeout_ends_session() {
    let engine = DialogueEngine::new(Arc::new(RecordingRegistry::default()));
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;
    let state = say(&engine, state, "2").await.state;

    let turn = engine.handle(state, TurnInput::IdleElapsed).await;
    assert_eq!(turn.message_keys(), vec![keys::IDLE_CHECK_IN]);
    assert_eq!(turn.state.idle_strikes, IdleStrike::CheckedIn);
    assert_eq!(turn.timer, TimerDirective::Arm(Duration::from_secs(180)));

    let turn = engine.handle(turn.state, TurnInput::IdleElapsed).await;
    assert_eq!(turn.message_keys(), vec![keys::IDLE_TIMEOUT]);
    assert_eq!(turn.state.phase, Phase::Ended);
    assert_eq!(turn.timer, TimerDirective::Cancel);

    let turn = say(&engine, turn.state, "Juan Dela Cruz").await;
    assert_eq!(turn.message_keys(), vec![keys::MUST_USE_RSVP]);
    assert!(turn.state.collected_names.is_empty());
}

#[tokio::test]
async fn activity_after_check_in_resets_strikes() {
    let engine = DialogueEngine::new(Arc::new(RecordingRegistry::default()));
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;
    let state = say(&engine, state, "2").await.state;

    let state = engine.handle(state, TurnInput::IdleElapsed).await.state;
    let turn = say(&engine, state, "Juan Dela Cruz").await;
    assert_eq!(turn.state.idle_strikes, IdleStrike::Active);
    assert_eq!(turn.timer, TimerDirective::Arm(Duration::from_secs(120)));

    // a fresh idle period starts with a check-in again
    let turn = engine.handle(turn.state, TurnInput::IdleElapsed).await;
    assert_eq!(turn.message_keys(), vec![keys::IDLE_CHECK_IN]);
}

#[tokio::test]
async fn declining_at_seat_count_after_check_in_reprompts() {
    let registry = Arc::new(RecordingRegistry::default());
    let engine = DialogueEngine::new(registry.clone());
    let state = engine.start(Locale::En, EntryPoint::authorized()).state;

    let state = engine.handle(state, TurnInput::IdleElapsed).await.state;
    assert_eq!(state.idle_strikes, IdleStrike::CheckedIn);

    let turn = say(&engine, state, "No").await;
    assert_eq!(turn.message_keys(), vec![keys::INVALID_SEAT_COUNT]);
    assert_eq!(turn.state.phase, Phase::AwaitingSeatCount);
    assert_eq!(turn.state.idle_strikes, IdleStrike::Active);
    assert_eq!(turn.timer, TimerDirective::Arm(Duration::from_secs(120)));
    assert!(registry.writes().is_empty());
}

#[tokio::test]
async fn unauthorized_entry_only_redirects() {
    let registry = Arc::new(RecordingRegistry::default());
    let engine = DialogueEngine::new(registry.clone());
    let turn = engine.start(Locale::En, EntryPoint::from_query("utm=fb"));
    assert_eq!(turn.message_keys(), vec![keys::MUST_USE_RSVP]);

    let mut state = turn.state;
    for reply in ["3", "Juan Dela Cruz", "yes"] {
        let turn = say(&engine, state, reply).await;
        assert_eq!(turn.message_keys(), vec![keys::MUST_USE_RSVP]);
        assert_eq!(turn.timer, TimerDirective::Cancel);
        state = turn.state;
    }
    assert_eq!(state.phase, Phase::AwaitingSeatCount);
    assert!(registry.writes().is_empty());
    assert_eq!(registry.fetches.load(Ordering::SeqCst), 0);
}
