//! Waiting pool for a single game
//!
//! Entries are kept in insertion order. Order only decides which
//! compatible candidate wins a tie; eligibility is the rule set's call.

use types::entry::Entry;
use types::ids::PlayerId;

/// Ordered collection of searching entries
///
/// Holds at most one entry per identity.
#[derive(Debug, Clone, Default)]
pub struct WaitingPool {
    entries: Vec<Entry>,
}

impl WaitingPool {
    /// Create a new empty pool
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry, dropping any previous entry with the same identity
    ///
    /// Returns the replaced entry, if there was one.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        let replaced = self.remove_by_identity(&entry.identity);
        self.entries.push(entry);
        replaced
    }

    /// Remove the entry for `identity`, if present
    pub fn remove_by_identity(&mut self, identity: &PlayerId) -> Option<Entry> {
        let position = self.entries.iter().position(|e| &e.identity == identity)?;
        Some(self.entries.remove(position))
    }

    /// Look up the entry for `identity`
    pub fn find(&self, identity: &PlayerId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.identity == identity)
    }

    /// Entries in insertion order
    pub fn scan(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Swap the whole pool contents
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use types::params::{EloParams, GameParams};

    fn entry(id: &str, elo: f64) -> Entry {
        Entry::new(
            PlayerId::new(id),
            GameParams::Cs2(EloParams { elo: Some(elo) }),
            [],
            Utc::now(),
        )
    }

    fn ids(pool: &WaitingPool) -> Vec<&str> {
        pool.scan().map(|e| e.identity.as_str()).collect()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut pool = WaitingPool::new();
        pool.insert(entry("a", 1000.0));
        pool.insert(entry("b", 1100.0));
        pool.insert(entry("c", 1200.0));

        assert_eq!(ids(&pool), vec!["a", "b", "c"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_reinsert_replaces_and_moves_to_back() {
        let mut pool = WaitingPool::new();
        pool.insert(entry("a", 1000.0));
        pool.insert(entry("b", 1100.0));

        let mut newer = entry("a", 1500.0);
        newer.enqueued_at = Utc::now() + Duration::seconds(1);
        let replaced = pool.insert(newer.clone());

        assert!(replaced.is_some());
        assert_eq!(ids(&pool), vec!["b", "a"]);
        assert_eq!(pool.find(&PlayerId::new("a")), Some(&newer));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut pool = WaitingPool::new();
        pool.insert(entry("a", 1000.0));

        assert!(pool.remove_by_identity(&PlayerId::new("zzz")).is_none());
        assert_eq!(pool.len(), 1);

        assert!(pool.remove_by_identity(&PlayerId::new("a")).is_some());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut pool = WaitingPool::new();
        pool.insert(entry("a", 1000.0));
        pool.insert(entry("b", 1100.0));
        pool.insert(entry("c", 1200.0));

        let kept = pool.scan().filter(|e| e.identity.as_str() == "b").cloned().collect();
        pool.replace_all(kept);

        assert_eq!(ids(&pool), vec!["b"]);
    }
}
