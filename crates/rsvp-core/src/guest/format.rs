//! Name formatting and comparison keys.

/// Formats an accepted name for storage and display.
///
/// Whitespace runs collapse to a single space and every word is lowercased
/// with its first letter capitalized: `"  juan  DELA cruz "` becomes
/// `"Juan Dela Cruz"`. A letter after `-`, `'` or `.` also starts a word, so
/// `"o'neil-cruz"` becomes `"O'Neil-Cruz"`. Only call this after the
/// validator has accepted the raw input.
pub fn format_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(token: &str) -> String {
    let mut formatted = String::with_capacity(token.len());
    let mut word_start = true;
    for c in token.chars() {
        if word_start {
            formatted.extend(c.to_uppercase());
        } else {
            formatted.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }
    formatted
}

/// The key two names are compared by: trimmed and lowercased.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns true when `names` holds an entry equal to `candidate` under
/// [`normalize_key`].
pub fn contains_name<S: AsRef<str>>(names: &[S], candidate: &str) -> bool {
    let key = normalize_key(candidate);
    names.iter().any(|n| normalize_key(n.as_ref()) == key)
}
