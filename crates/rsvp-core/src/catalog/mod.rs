//! Message catalog.
//!
//! Maps `(key, locale, vars)` to user-facing text. The catalog holds no
//! session state; every call is a lookup plus formatting.
//!
//! # Module Structure
//!
//! - `keys`: names of every catalog entry
//! - `template`: `{placeholder}` substitution (`TemplateVars`)
//! - `entries`: the built-in texts for each locale

mod entries;
mod template;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::locale::Locale;
use entries::{LocaleTable, Template};

pub use template::{TemplateVars, substitute};

/// Catalog entry names.
pub mod keys {
    pub const GREETING: &str = "greeting";
    pub const MUST_USE_RSVP: &str = "must_use_rsvp";
    pub const CHOOSE_LANGUAGE: &str = "choose_language";
    pub const SEAT_COUNT_CONFIRMED: &str = "seat_count_confirmed";
    pub const GUEST_INSTRUCTIONS_SINGLE: &str = "guest_instructions_single";
    pub const GUEST_INSTRUCTIONS_MULTIPLE: &str = "guest_instructions_multiple";
    pub const INVALID_SEAT_COUNT: &str = "invalid_seat_count";
    pub const INVALID_NAME: &str = "invalid_name";
    pub const DUPLICATE_NAME: &str = "duplicate_name";
    pub const ALL_NAMES_COLLECTED: &str = "all_names_collected";
    pub const CONFIRM_PROMPT: &str = "confirm_prompt";
    pub const RSVP_SAVED: &str = "rsvp_saved";
    pub const RSVP_SAVE_ERROR: &str = "rsvp_save_error";
    pub const REENTER_NAMES: &str = "reenter_names";
    pub const MAX_NAMES_REACHED: &str = "max_names_reached";
    pub const IDLE_CHECK_IN: &str = "idle_check_in";
    pub const IDLE_TIMEOUT: &str = "idle_timeout";
    pub const PARTIAL_LIST: &str = "partial_list";
    pub const MORE_NAMES_PROMPT: &str = "more_names_prompt";
    pub const NO_RSVP: &str = "no_rsvp";

    // Plural forms
    pub const SEAT: &str = "seat";
    pub const NAME_SUFFIX: &str = "name_suffix";
    pub const MORE_NAMES: &str = "more_names";
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    entries: entries::builtin(),
});

/// Keyed, locale-aware message texts.
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<&'static str, LocaleTable>,
}

impl Catalog {
    /// The catalog with every built-in message.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Renders `key` for `locale`, picking variant phrasings with the thread
    /// RNG.
    ///
    /// Unknown keys render as an empty string.
    pub fn render(&self, key: &str, locale: Locale, vars: &TemplateVars) -> String {
        self.render_with_rng(key, locale, vars, &mut rand::thread_rng())
    }

    /// Like [`Catalog::render`], with a caller-supplied RNG for the variant
    /// choice.
    pub fn render_with_rng<R: Rng + ?Sized>(
        &self,
        key: &str,
        locale: Locale,
        vars: &TemplateVars,
        rng: &mut R,
    ) -> String {
        let Some(template) = self.lookup(key, locale) else {
            tracing::debug!(key, %locale, "unknown catalog key");
            return String::new();
        };

        let raw = match template {
            Template::Text(text) => *text,
            Template::Weighted(variants) => pick_weighted(*variants, rng),
            Template::Plural { one, many } => {
                if vars.get("count").map(str::trim) == Some("1") {
                    *one
                } else {
                    *many
                }
            }
        };

        substitute(raw, vars)
    }

    /// Singular or plural form of a count-sensitive entry.
    ///
    /// `{count}` inside the chosen form is replaced with `count`.
    pub fn plural(&self, key: &str, locale: Locale, count: usize) -> String {
        let vars = TemplateVars::new().with("count", count);
        match self.lookup(key, locale) {
            Some(Template::Plural { one, many }) => {
                substitute(if count == 1 { one } else { many }, &vars)
            }
            Some(_) => self.render(key, locale, &vars),
            None => {
                tracing::debug!(key, %locale, "unknown plural key");
                String::new()
            }
        }
    }

    /// Every phrasing `key` can render to with `vars`, in catalog order.
    ///
    /// Single-template entries yield one element; unknown keys yield none.
    pub fn variants(&self, key: &str, locale: Locale, vars: &TemplateVars) -> Vec<String> {
        match self.lookup(key, locale) {
            Some(Template::Weighted(variants)) => variants
                .iter()
                .map(|(_, text)| substitute(text, vars))
                .collect(),
            Some(Template::Text(text)) => vec![substitute(text, vars)],
            Some(Template::Plural { one, many }) => {
                vec![substitute(one, vars), substitute(many, vars)]
            }
            None => Vec::new(),
        }
    }

    fn lookup(&self, key: &str, locale: Locale) -> Option<&Template> {
        let table = self.entries.get(key)?;
        table.get(&locale).or_else(|| table.get(&Locale::FALLBACK))
    }
}

fn pick_weighted<R: Rng + ?Sized>(variants: &'static [(u32, &'static str)], rng: &mut R) -> &'static str {
    match WeightedIndex::new(variants.iter().map(|(weight, _)| *weight)) {
        Ok(index) => variants[index.sample(rng)].1,
        // Empty list or all-zero weights
        Err(_) => variants.first().map(|(_, text)| *text).unwrap_or(""),
    }
}

/// Renders names as a numbered list, one per line, for the HTML-lite chat.
pub fn numbered_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name.as_ref()))
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    const ALL_KEYS: &[&str] = &[
        keys::GREETING,
        keys::MUST_USE_RSVP,
        keys::SEAT_COUNT_CONFIRMED,
        keys::GUEST_INSTRUCTIONS_SINGLE,
        keys::GUEST_INSTRUCTIONS_MULTIPLE,
        keys::INVALID_SEAT_COUNT,
        keys::INVALID_NAME,
        keys::DUPLICATE_NAME,
        keys::ALL_NAMES_COLLECTED,
        keys::CONFIRM_PROMPT,
        keys::RSVP_SAVED,
        keys::RSVP_SAVE_ERROR,
        keys::REENTER_NAMES,
        keys::MAX_NAMES_REACHED,
        keys::IDLE_CHECK_IN,
        keys::IDLE_TIMEOUT,
        keys::PARTIAL_LIST,
        keys::MORE_NAMES_PROMPT,
        keys::NO_RSVP,
    ];

    #[test]
    fn test_every_key_renders_in_every_locale() {
        let catalog = Catalog::builtin();
        for key in ALL_KEYS {
            for locale in Locale::iter() {
                let text = catalog.render(key, locale, &TemplateVars::new());
                assert!(!text.is_empty(), "{key} is empty for {locale}");
            }
        }
    }

    #[test]
    fn test_unknown_key_renders_empty() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.render("no_such_key", Locale::Tl, &TemplateVars::new()),
            ""
        );
        assert_eq!(catalog.plural("no_such_key", Locale::En, 2), "");
        assert!(catalog.variants("no_such_key", Locale::En, &TemplateVars::new()).is_empty());
    }

    #[test]
    fn test_missing_locale_falls_back_to_english() {
        let catalog = Catalog::builtin();
        let en = catalog.render(keys::CHOOSE_LANGUAGE, Locale::En, &TemplateVars::new());
        let bis = catalog.render(keys::CHOOSE_LANGUAGE, Locale::Bis, &TemplateVars::new());
        assert!(!en.is_empty());
        assert_eq!(en, bis);
    }

    #[test]
    fn test_seat_confirmation_uses_inline_plural() {
        let catalog = Catalog::builtin();
        let one = catalog.render(
            keys::SEAT_COUNT_CONFIRMED,
            Locale::En,
            &TemplateVars::new().with("count", 1),
        );
        assert_eq!(one, "Great! You may now RSVP up to 1 guest.");

        let three = catalog.render(
            keys::SEAT_COUNT_CONFIRMED,
            Locale::Tl,
            &TemplateVars::new().with("count", 3),
        );
        assert!(three.ends_with("3 mga bisita."));
    }

    #[test]
    fn test_plural_forms_differ_per_locale() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.plural(keys::SEAT, Locale::En, 1), "seat");
        assert_eq!(catalog.plural(keys::SEAT, Locale::En, 2), "seats");
        assert_eq!(catalog.plural(keys::SEAT, Locale::Tl, 2), "upuan");
        assert_eq!(catalog.plural(keys::NAME_SUFFIX, Locale::En, 1), "");
        assert_eq!(catalog.plural(keys::NAME_SUFFIX, Locale::En, 3), "s");
        assert_eq!(
            catalog.plural(keys::NAME_SUFFIX, Locale::Bis, 3),
            " ka mga pangalan"
        );
        assert_eq!(catalog.plural(keys::MORE_NAMES, Locale::En, 1), "one more name");
        assert_eq!(catalog.plural(keys::MORE_NAMES, Locale::En, 4), "4 more names");
        assert_eq!(catalog.plural(keys::MORE_NAMES, Locale::Tl, 2), "2 pang pangalan");
    }

    #[test]
    fn test_rsvp_saved_count_and_suffix() {
        let catalog = Catalog::builtin();
        let vars = TemplateVars::new()
            .with("count", 3)
            .with("plural", catalog.plural(keys::NAME_SUFFIX, Locale::En, 3));
        let text = catalog.render(keys::RSVP_SAVED, Locale::En, &vars);
        assert!(text.contains("We've recorded 3 guest names."));
    }

    #[test]
    fn test_weighted_variants_are_members_of_the_list() {
        let catalog = Catalog::builtin();
        let vars = TemplateVars::new()
            .with("remaining", 2)
            .with("seats", "seats");
        let allowed = catalog.variants(keys::MORE_NAMES_PROMPT, Locale::En, &vars);
        assert_eq!(allowed.len(), 5);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let text = catalog.render_with_rng(keys::MORE_NAMES_PROMPT, Locale::En, &vars, &mut rng);
            assert!(allowed.contains(&text), "unexpected variant: {text}");
            assert!(!text.contains('{'));
        }
    }

    #[test]
    fn test_weighted_selection_reaches_several_variants() {
        let catalog = Catalog::builtin();
        let vars = TemplateVars::new().with("remaining", 1).with("seats", "seat");
        let mut rng = StdRng::seed_from_u64(42);
        let seen: std::collections::HashSet<String> = (0..200)
            .map(|_| catalog.render_with_rng(keys::MORE_NAMES_PROMPT, Locale::Bis, &vars, &mut rng))
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_numbered_list() {
        let names = vec!["Juan Dela Cruz", "Maria Santos"];
        assert_eq!(numbered_list(&names), "1. Juan Dela Cruz<br>2. Maria Santos");
        assert_eq!(numbered_list::<&str>(&[]), "");
    }
}
