//! Turn inputs.

/// One input to the dialogue engine.
///
/// Genuine utterances and idle timer fires travel through the same turn
/// handler so they can never interleave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// Text typed by the invitee.
    Utterance(String),
    /// The idle timer fired; the engine decides between check-in and timeout.
    IdleElapsed,
}

impl TurnInput {
    pub fn utterance(text: impl Into<String>) -> Self {
        Self::Utterance(text.into())
    }

    /// Whether this input came from the user rather than the idle timer.
    pub fn is_genuine(&self) -> bool {
        matches!(self, Self::Utterance(_))
    }
}
