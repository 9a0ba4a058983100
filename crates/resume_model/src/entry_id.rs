//! Session-local entry identifiers

use serde::{Deserialize, Serialize};

/// Identifier of an entry within one collection.
///
/// Identifiers are small sequential integers, not stable UUIDs. A new entry
/// receives `max(existing) + 1`, or `1` when the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Identifier given to the first entry of an empty collection
    pub const FIRST: EntryId = EntryId(1);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Compute the identifier for an entry appended after `existing`
    pub fn next_after(existing: impl IntoIterator<Item = EntryId>) -> Self {
        existing
            .into_iter()
            .max()
            .map(|max| EntryId(max.0.saturating_add(1)))
            .unwrap_or(Self::FIRST)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
