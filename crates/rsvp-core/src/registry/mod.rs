//! Guest registry gateway.
//!
//! The registry is the list of every guest name accepted so far, shared by
//! all sessions. Sessions only ever read the whole list and replace the whole
//! list; backends live in `rsvp-infrastructure`.

use async_trait::async_trait;

use crate::error::Result;
use crate::guest::normalize_key;

/// An abstract store for the shared guest list.
///
/// This trait decouples the dialogue from the storage mechanism (a JSONBin
/// document, a local TOML file, memory in tests).
///
/// # Implementation Notes
///
/// No locking across sessions is expected: two sessions replacing the list
/// concurrently is last-write-wins.
#[async_trait]
pub trait RegistryGateway: Send + Sync {
    /// Fetches every registered name.
    ///
    /// # Returns
    ///
    /// - `Ok(names)`: the current list, possibly empty
    /// - `Err(_)`: the store could not be read
    async fn fetch_all(&self) -> Result<Vec<String>>;

    /// Replaces the stored list with `names`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the store now holds exactly `names`
    /// - `Err(_)`: the write failed; the stored list is unspecified
    async fn replace_all(&self, names: &[String]) -> Result<()>;
}

/// Appends every name in `additions` whose key is not already in `existing`.
///
/// Existing entries keep their order and spelling; additions keep their
/// order. Additions are also deduplicated against each other.
pub fn merge_names<S: AsRef<str>>(existing: Vec<String>, additions: &[S]) -> Vec<String> {
    let mut seen: std::collections::HashSet<String> =
        existing.iter().map(|n| normalize_key(n)).collect();
    let mut merged = existing;
    for name in additions {
        let name = name.as_ref();
        if seen.insert(normalize_key(name)) {
            merged.push(name.to_string());
        }
    }
    merged
}
