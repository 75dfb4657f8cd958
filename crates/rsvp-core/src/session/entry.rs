//! Entry-point signal.

/// Query parameter the RSVP button adds to the chat link.
pub const RSVP_QUERY_PARAM: &str = "rsvp";

/// Whether the invitee reached the chat through the RSVP button.
///
/// Unauthorized sessions never leave the greeting: every utterance is
/// answered with a redirect to the entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryPoint {
    authorized: bool,
}

impl EntryPoint {
    pub fn authorized() -> Self {
        Self { authorized: true }
    }

    pub fn unauthorized() -> Self {
        Self { authorized: false }
    }

    /// Reads the `rsvp` flag from a URL query string such as
    /// `"?lang=tl&rsvp=1"`. Accepted values are `1` and `true`.
    pub fn from_query(query: &str) -> Self {
        let authorized = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(name, value)| {
                name == RSVP_QUERY_PARAM && (value == "1" || value.eq_ignore_ascii_case("true"))
            });
        Self { authorized }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert!(EntryPoint::from_query("?rsvp=1").is_authorized());
        assert!(EntryPoint::from_query("lang=tl&rsvp=true").is_authorized());
        assert!(!EntryPoint::from_query("?rsvp=0").is_authorized());
        assert!(!EntryPoint::from_query("?rsvp").is_authorized());
        assert!(!EntryPoint::from_query("").is_authorized());
        assert!(!EntryPoint::from_query("?xrsvp=1").is_authorized());
    }
}
