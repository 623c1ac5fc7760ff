//! Pending delivery buffer
//!
//! One-shot mailbox for the non-initiating side of a pairing. A result is
//! removed in the same operation that reads it, so it is delivered at most
//! once.

use dashmap::DashMap;
use types::entry::MatchResult;
use types::ids::PlayerId;

/// Undelivered match results keyed by owning identity
#[derive(Debug, Default)]
pub struct PendingDeliveries {
    slots: DashMap<PlayerId, MatchResult>,
}

impl PendingDeliveries {
    pub fn new() -> Self {
        Self { slots: DashMap::new() }
    }

    /// Park a result for `owner`, returning any result it displaced
    pub fn store(&self, owner: PlayerId, result: MatchResult) -> Option<MatchResult> {
        self.slots.insert(owner, result)
    }

    /// Remove and return the result for `owner`
    pub fn take(&self, owner: &str) -> Option<MatchResult> {
        self.slots.remove(owner).map(|(_, result)| result)
    }

    /// Drop the result for `owner` without delivering it
    pub fn discard(&self, owner: &str) -> bool {
        self.slots.remove(owner).is_some()
    }

    pub fn contains(&self, owner: &str) -> bool {
        self.slots.contains_key(owner)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
