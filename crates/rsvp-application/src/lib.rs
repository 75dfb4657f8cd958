//! Application layer for the RSVP chat.
//!
//! Wires the dialogue engine to its configured registry and runs each
//! conversation as a session actor with its own idle timer.

pub mod engine_factory;
pub mod session;

pub use engine_factory::build_engine;
pub use session::{RsvpSession, SessionHandle, SessionOptions};
