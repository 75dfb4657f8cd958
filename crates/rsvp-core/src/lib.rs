//! Domain layer for the RSVP chat.
//!
//! Everything in this crate is free of I/O: the guest name rules, the message
//! catalog, the session record, the idle escalation state machine and the
//! registry gateway contract that infrastructure crates implement.

pub mod catalog;
pub mod config;
pub mod error;
pub mod guest;
pub mod idle;
pub mod locale;
pub mod registry;
pub mod session;

// Re-export common error type
pub use error::RsvpError;
pub use locale::Locale;
