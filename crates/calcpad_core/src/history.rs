//! Bounded, most-recent-first log of evaluated expressions.

use crate::constants::{HISTORY_CAPACITY, HISTORY_KEY};
use crate::store::DurableStore;
use serde::{Deserialize, Serialize};

/// One evaluated expression with its display-formatted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "expr", alias = "expression")]
    pub expression: String,
    #[serde(rename = "res", alias = "result")]
    pub result: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "t", alias = "timestamp")]
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Build an entry from its parts.
    pub fn new(expression: impl Into<String>, result: impl Into<String>, timestamp: i64) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }
}

/// Newest-first history, never longer than [`HISTORY_CAPACITY`].
///
/// Every mutation writes the whole log back to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Load the persisted log, falling back to an empty one.
    pub fn load(store: &DurableStore) -> Self {
        let mut entries: Vec<HistoryEntry> = store.get(HISTORY_KEY, Vec::new());
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `index` (0 is the newest).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend an entry, evict beyond capacity, and persist.
    pub fn record(&mut self, store: &DurableStore, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist(store);
    }

    /// Remove every entry and persist.
    pub fn clear(&mut self, store: &DurableStore) {
        self.entries.clear();
        self.persist(store);
    }

    /// Write the current log to the store.
    pub fn persist(&self, store: &DurableStore) {
        store.set(HISTORY_KEY, &self.entries);
    }
}
