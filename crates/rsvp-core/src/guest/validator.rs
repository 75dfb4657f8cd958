//! Full name validation.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::format::normalize_key;

/// Shortest accepted name, in characters, after trimming.
pub const MIN_NAME_CHARS: usize = 2;
/// Longest accepted name, in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 120;

// Latin letters (ASCII, Latin-1 letters without × and ÷, Extended-A/B),
// whitespace, period, straight and curly apostrophe, hyphen.
static ALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{024F}\s.'\x{2019}\-]+$")
        .expect("allowed-character pattern is valid")
});

static CONSONANT_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[bcdfghjklmnpqrstvwxyz]{7,}").expect("consonant-run pattern is valid")
});

/// Why a name was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Shorter than [`MIN_NAME_CHARS`] or longer than [`MAX_NAME_CHARS`].
    Length,
    /// A single token that is not on the allow-list.
    NotFullName,
    /// Contains a character outside the accepted set.
    Characters,
    /// Seven or more consonants in a row.
    Gibberish,
}

/// Outcome of [`NameValidator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected(RejectReason),
}

/// Judges whether free text is an acceptable guest full name.
///
/// Rules run in order and the first failure wins:
///
/// 1. trimmed length within [`MIN_NAME_CHARS`]..=[`MAX_NAME_CHARS`]
/// 2. at least two whitespace-separated tokens, unless the name is on the
///    allow-list, which accepts it outright
/// 3. only Latin letters, whitespace, `.`, `'`, `’` and `-`
/// 4. no run of seven consonants
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    allow_list: HashSet<String>,
}

impl NameValidator {
    /// Creates a validator without pre-approved names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that accepts the given exact names (compared
    /// case-insensitively) even when they are a single token.
    pub fn with_allow_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allow_list: names
                .into_iter()
                .map(|n| normalize_key(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn validate(&self, raw: &str) -> Validation {
        let cleaned = raw.trim();

        let length = cleaned.chars().count();
        if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&length) {
            return Validation::Rejected(RejectReason::Length);
        }

        if self.allow_list.contains(&normalize_key(cleaned)) {
            return Validation::Accepted;
        }

        if cleaned.split_whitespace().count() < 2 {
            return Validation::Rejected(RejectReason::NotFullName);
        }

        if !ALLOWED_CHARS.is_match(cleaned) {
            return Validation::Rejected(RejectReason::Characters);
        }

        if CONSONANT_RUN.is_match(cleaned) {
            return Validation::Rejected(RejectReason::Gibberish);
        }

        Validation::Accepted
    }
}
