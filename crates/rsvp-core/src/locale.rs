//! Supported conversation locales.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A language the chat can be held in.
///
/// Chosen once before the first substantive turn and fixed for the rest of
/// the session. English is the fallback for any catalog entry a locale lacks.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Tagalog.
    Tl,
    /// Bisaya (Cebuano).
    Bis,
}

impl Locale {
    /// The locale used when a catalog entry is missing for the requested one.
    pub const FALLBACK: Locale = Locale::En;

    /// Human readable name, used by the language picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tl => "Tagalog",
            Self::Bis => "Bisaya",
        }
    }

    /// Resolves a language picker answer: a locale code, a display name or
    /// the 1-based position in the picker list.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        match choice {
            "1" => return Some(Self::En),
            "2" => return Some(Self::Tl),
            "3" => return Some(Self::Bis),
            _ => {}
        }
        if let Ok(locale) = choice.parse::<Locale>() {
            return Some(locale);
        }
        use strum::IntoEnumIterator;
        Locale::iter().find(|l| l.display_name().eq_ignore_ascii_case(choice))
    }
}
