//! `{placeholder}` substitution.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Substitution variables for a template.
///
/// Values are stored pre-rendered; numbers go in through [`TemplateVars::with`]
/// like any other `Display` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    values: BTreeMap<String, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The `count` variable as a number, used by inline `{many|one}` choices.
    fn count(&self) -> Option<i64> {
        self.get("count").and_then(|c| c.trim().parse().ok())
    }
}

/// Replaces every `{name}` in `template` with its value from `vars`.
///
/// A placeholder of the form `{many|one}` is an inline count choice: the
/// `one` side is used when the `count` variable equals 1, the `many` side
/// otherwise. Placeholders without a matching variable are left as written.
pub fn substitute(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let inner = &after_open[..close];
        match resolve(inner, vars) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(inner);
                out.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve(inner: &str, vars: &TemplateVars) -> Option<String> {
    if let Some((many, one)) = inner.split_once('|') {
        let count = vars.count()?;
        return Some(if count == 1 { one } else { many }.to_string());
    }
    vars.get(inner).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_all_occurrences() {
        let vars = TemplateVars::new().with("count", 2);
        assert_eq!(substitute("{count} and {count}", &vars), "2 and 2");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let vars = TemplateVars::new().with("count", 2);
        assert_eq!(substitute("{count} {missing}", &vars), "2 {missing}");
    }

    #[test]
    fn test_inline_count_choice() {
        let one = TemplateVars::new().with("count", 1);
        let many = TemplateVars::new().with("count", 4);
        assert_eq!(substitute("{count} {guests|guest}", &one), "1 guest");
        assert_eq!(substitute("{count} {guests|guest}", &many), "4 guests");
        assert_eq!(
            substitute("{count} {mga bisita|bisita}", &many),
            "4 mga bisita"
        );
    }

    #[test]
    fn test_inline_choice_without_count_is_kept() {
        assert_eq!(
            substitute("{guests|guest}", &TemplateVars::new()),
            "{guests|guest}"
        );
    }

    #[test]
    fn test_unclosed_brace_is_copied() {
        let vars = TemplateVars::new().with("a", "x");
        assert_eq!(substitute("{a} {oops", &vars), "x {oops");
    }

    #[test]
    fn test_multibyte_text_survives() {
        let vars = TemplateVars::new().with("names", "• José");
        assert_eq!(substitute("🎉 {names} 😊", &vars), "🎉 • José 😊");
    }
}
