//! Bounded, newest-first calculation history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;
use uuid::Uuid;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Capacity used by the compact widget layout
pub const COMPACT_HISTORY_CAPACITY: usize = 20;

/// Largest capacity a configuration may ask for
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

/// One successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub expression: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory log, newest entry first. Once `capacity` is reached the oldest
/// entry is dropped for every new one.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend an entry, evicting from the back past capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(id = %evicted.id, "history entry evicted");
            }
        }
    }

    /// Entry by position, 0 being the newest
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = HistoryLog::new(5);
        log.push(HistoryEntry::new("1+1", "2"));
        log.push(HistoryEntry::new("2+2", "4"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().result, "4");
        assert_eq!(log.get(1).unwrap().expression, "1+1");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = HistoryLog::new(3);
        for i in 0..10 {
            log.push(HistoryEntry::new(format!("{}+0", i), i.to_string()));
            assert!(log.len() <= 3);
        }

        let results: Vec<&str> = log.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["9", "8", "7"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = HistoryEntry::new("1", "1");
        let b = HistoryEntry::new("1", "1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut log = HistoryLog::new(usize::MAX);
        log.push(HistoryEntry::new("1+1", "2"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), usize::MAX);
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::default();
        log.push(HistoryEntry::new("3×3", "9"));
        assert_eq!(log.latest().unwrap().result, "9");

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_entry_serializes() {
        let entry = HistoryEntry::new("√(9)", "3");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["expression"], "√(9)");
        assert_eq!(json["result"], "3");
        assert!(json["timestamp"].is_string());
    }
}
