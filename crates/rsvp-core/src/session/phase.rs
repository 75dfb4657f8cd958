//! Dialogue phases.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where a conversation stands.
///
/// Phases only move forward, except that rejecting the collected list sends
/// the session back to `CollectingNames` with an empty list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for the number of seats.
    #[default]
    AwaitingSeatCount,
    /// Receiving guest names one at a time.
    CollectingNames,
    /// The list is full and waits for a yes/no.
    AwaitingListConfirmation,
    /// Finalized, declined or timed out. Terminal.
    Ended,
}

impl Phase {
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}
