//! Session domain model.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::error::{Result, RsvpError};
use crate::guest::contains_name;
use crate::idle::IdleStrike;
use crate::locale::Locale;

/// Fewest seats an invitation can hold.
pub const MIN_SEATS: u32 = 1;
/// Most seats an invitation can hold.
pub const MAX_SEATS: u32 = 10;

/// Number of guest names one invitee may register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SeatLimit(u32);

impl SeatLimit {
    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for SeatLimit {
    type Error = RsvpError;

    fn try_from(value: u32) -> Result<Self> {
        if (MIN_SEATS..=MAX_SEATS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RsvpError::validation(format!(
                "seat limit must be between {MIN_SEATS} and {MAX_SEATS}, got {value}"
            )))
        }
    }
}

impl From<SeatLimit> for u32 {
    fn from(limit: SeatLimit) -> Self {
        limit.0
    }
}

/// The record of one RSVP conversation.
///
/// A session is created when the invitee picks a language and is dropped when
/// the conversation ends. The dialogue engine takes it by value and hands back
/// the next one; nothing else mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier (UUID format)
    pub id: String,
    pub phase: Phase,
    /// Set once in `AwaitingSeatCount`, never changed afterwards.
    pub seat_limit: Option<SeatLimit>,
    /// Formatted names in the order they were given.
    pub collected_names: Vec<String>,
    pub idle_strikes: IdleStrike,
    /// Whether the "you still have N seats" recap was shown since the last
    /// accepted name.
    pub partial_summary_shown: bool,
    pub locale: Locale,
    /// Whether the invitee arrived through the RSVP entry point.
    pub entry_authorized: bool,
}

impl SessionState {
    /// Starts a session in `AwaitingSeatCount`.
    pub fn new(locale: Locale, entry_authorized: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            phase: Phase::AwaitingSeatCount,
            seat_limit: None,
            collected_names: Vec::new(),
            idle_strikes: IdleStrike::Active,
            partial_summary_shown: false,
            locale,
            entry_authorized,
        }
    }

    /// Seats still open, or `None` before the seat count is known.
    pub fn remaining_seats(&self) -> Option<usize> {
        self.seat_limit
            .map(|limit| limit.as_usize().saturating_sub(self.collected_names.len()))
    }

    /// Whether every seat has a name.
    pub fn is_full(&self) -> bool {
        self.remaining_seats() == Some(0)
    }

    /// Whether `name` is already in the list, ignoring case and surrounding
    /// whitespace.
    pub fn has_name(&self, name: &str) -> bool {
        contains_name(&self.collected_names, name)
    }

    /// Appends a formatted name.
    ///
    /// Fails when there is no seat limit yet, the list is full, or the name
    /// is already present, so the list invariants hold whatever the caller
    /// checked beforehand.
    pub fn push_name(&mut self, name: String) -> Result<()> {
        let limit = self
            .seat_limit
            .ok_or_else(|| RsvpError::validation("seat limit not set"))?;
        if self.collected_names.len() >= limit.as_usize() {
            return Err(RsvpError::validation("all seats are already taken"));
        }
        if self.has_name(&name) {
            return Err(RsvpError::validation(format!("duplicate name: {name}")));
        }
        self.collected_names.push(name);
        Ok(())
    }

    /// Drops every collected name and re-opens the list.
    pub fn clear_names(&mut self) {
        self.collected_names.clear();
        self.partial_summary_shown = false;
    }
}
