//! The append-only per-session choice history.

use serde::{Deserialize, Serialize};

use crate::scene::Label;

/// One accepted choice: the scene it was made on and what came of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Identifier of the scene the choice was made on.
    pub scene: String,
    /// The chosen label.
    pub label: Label,
    /// The choice text the player picked.
    pub choice: String,
    /// The narrative outcome text.
    pub outcome: String,
}

/// The ordered record of every accepted choice in a session.
///
/// Entries are only ever appended during play; [`History::clear`] exists for
/// session reset and nothing else removes entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded choices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no choice has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Drop all entries. Used by session reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize the history as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
