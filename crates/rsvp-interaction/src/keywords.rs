//! Keyword and number-word matching for user replies.
//!
//! Matching is exact on a normalized reply (lowercase, single spaces, no
//! trailing `.`, `!` or `?`). English keywords are understood in every
//! locale, since invitees often answer in English regardless of the chosen
//! language.

use rsvp_core::Locale;

const AFFIRMATIVE_EN: &[&str] = &["yes", "yep", "yeah", "correct", "right", "sure", "ok", "okay"];
const AFFIRMATIVE_TL: &[&str] = &["oo", "opo", "oo nga", "tama", "tama po", "sige", "okay"];
const AFFIRMATIVE_BIS: &[&str] = &["oo", "u-o", "sakto", "tama", "sige", "okay"];

const NEGATIVE_EN: &[&str] = &["no", "nope", "none", "nah", "not going", "not attending"];
const NEGATIVE_TL: &[&str] = &["hindi", "wala", "ayoko", "mali", "hindi gusto", "hindi na"];
const NEGATIVE_BIS: &[&str] = &["dili", "wala", "ayaw", "mali", "dili gusto", "dili na"];

// Shared across locales: "lima", "pito", "walo" and "siyam" are the same
// word in Tagalog and Bisaya.
const NUMBER_WORDS: &[(&str, u32)] = &[
    // English
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    // Tagalog
    ("isa", 1),
    ("dalawa", 2),
    ("tatlo", 3),
    ("apat", 4),
    ("lima", 5),
    ("anim", 6),
    ("pito", 7),
    ("walo", 8),
    ("siyam", 9),
    ("sampu", 10),
    // Bisaya
    ("usa", 1),
    ("duha", 2),
    ("tulo", 3),
    ("upat", 4),
    ("unom", 6),
    ("napulo", 10),
];

/// Lowercases, collapses whitespace and strips trailing punctuation.
pub fn normalize_reply(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .trim_end_matches(['.', '!', '?'])
        .trim_end()
        .to_string()
}

fn affirmative_words(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => AFFIRMATIVE_EN,
        Locale::Tl => AFFIRMATIVE_TL,
        Locale::Bis => AFFIRMATIVE_BIS,
    }
}

fn negative_words(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => NEGATIVE_EN,
        Locale::Tl => NEGATIVE_TL,
        Locale::Bis => NEGATIVE_BIS,
    }
}

fn matches_any(reply: &str, locale: Locale, words: fn(Locale) -> &'static [&'static str]) -> bool {
    let reply = normalize_reply(reply);
    words(Locale::En).contains(&reply.as_str()) || words(locale).contains(&reply.as_str())
}

/// "Yes" in the session locale or in English.
pub fn is_affirmative(reply: &str, locale: Locale) -> bool {
    matches_any(reply, locale, affirmative_words)
}

/// "No / none / not attending" in the session locale or in English.
pub fn is_negative(reply: &str, locale: Locale) -> bool {
    matches_any(reply, locale, negative_words)
}

/// Reads a seat count from the first word of a reply: digits or a number
/// word in any supported language. Range checking is left to the caller.
pub fn parse_seat_count(reply: &str) -> Option<u32> {
    let reply = normalize_reply(reply);
    let first = reply.split(' ').next()?;

    if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        return first.parse().ok();
    }

    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == first)
        .map(|(_, value)| *value)
}
