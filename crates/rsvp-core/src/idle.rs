//! Idle escalation state machine.
//!
//! The monitor itself never touches a session. It describes what the timer
//! should do next (`TimerDirective`) and which strike level follows a fire;
//! the runtime owns the actual timer and feeds fires back in as turns.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default silence before the check-in message.
pub const DEFAULT_CHECK_IN_AFTER: Duration = Duration::from_secs(2 * 60);
/// Default further silence, after the check-in, before the session ends.
pub const DEFAULT_TIMEOUT_AFTER: Duration = Duration::from_secs(3 * 60);

/// Escalation level of user inactivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleStrike {
    /// The user is active (strike 0).
    #[default]
    Active,
    /// A check-in message was sent (strike 1).
    CheckedIn,
    /// The session was closed for inactivity (strike 2). Terminal.
    TimedOut,
}

/// What the idle timer should do after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// Cancel any pending timer and start a new one.
    Arm(Duration),
    /// Cancel any pending timer and arm nothing.
    Cancel,
    /// Leave the pending timer alone.
    Keep,
}

/// What happens when the idle timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEscalation {
    /// Send the check-in message and wait the second interval.
    CheckIn { rearm: Duration },
    /// Send the timeout message and end the session.
    Timeout,
    /// Nothing left to escalate.
    Ignore,
}

/// Timer intervals of the idle monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleSettings {
    pub check_in_after: Duration,
    pub timeout_after: Duration,
}

impl Default for IdleSettings {
    fn default() -> Self {
        Self {
            check_in_after: DEFAULT_CHECK_IN_AFTER,
            timeout_after: DEFAULT_TIMEOUT_AFTER,
        }
    }
}

impl IdleSettings {
    /// Directive for session start and for every genuine utterance.
    pub fn on_activity(&self) -> TimerDirective {
        TimerDirective::Arm(self.check_in_after)
    }

    /// Escalation for a timer fire at strike level `current`.
    pub fn on_fire(&self, current: IdleStrike) -> IdleEscalation {
        match current {
            IdleStrike::Active => IdleEscalation::CheckIn {
                rearm: self.timeout_after,
            },
            IdleStrike::CheckedIn => IdleEscalation::Timeout,
            IdleStrike::TimedOut => IdleEscalation::Ignore,
        }
    }
}
