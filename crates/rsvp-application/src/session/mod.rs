//! Session runtime.
//!
//! Each conversation is one tokio task that owns its [`SessionState`]
//! (`rsvp_core::session::SessionState`) and handles events from a single
//! queue, so a user reply and an idle timer fire never race.

mod actor;
mod idle_timer;

pub use actor::{RsvpSession, SessionHandle, SessionOptions, SessionSummary};
pub use idle_timer::IdleTimer;

use rsvp_core::session::TranscriptEntry;
use tokio::sync::oneshot;

/// Everything the session task reacts to.
#[derive(Debug)]
pub enum SessionEvent {
    /// A line typed by the invitee.
    Utterance(String),
    /// The idle timer armed as `generation` ran out.
    IdleElapsed { generation: u64 },
    /// Request for a copy of the transcript so far.
    Transcript(oneshot::Sender<Vec<TranscriptEntry>>),
}
