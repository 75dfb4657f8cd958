//! Session domain module.
//!
//! This module contains the record of one RSVP conversation and the values
//! that flow in and out of a turn.
//!
//! # Module Structure
//!
//! - `phase`: dialogue phases (`Phase`)
//! - `model`: the session record (`SessionState`, `SeatLimit`)
//! - `message`: outbound messages and transcript entries
//! - `input`: turn inputs (`TurnInput`)
//! - `entry`: the entry-point signal (`EntryPoint`)

mod entry;
mod input;
mod message;
mod model;
mod phase;

// Re-export public API
pub use entry::EntryPoint;
pub use input::TurnInput;
pub use message::{MessageRole, OutboundMessage, TranscriptEntry};
pub use model::{MAX_SEATS, MIN_SEATS, SeatLimit, SessionState};
pub use phase::Phase;
