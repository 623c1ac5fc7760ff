//! Matchmaking engine core
//!
//! Main coordinator for the waiting pools, compatibility rules and pending
//! deliveries.
//!
//! Each pool sits behind its own mutex, held for the whole of a join, leave
//! or poll against that pool. The find-scan-rewrite sequence of a poll is
//! therefore a single critical section and two concurrent polls can never
//! claim the same partner. Pending deliveries use a sharded map whose
//! remove is the consuming read.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use types::entry::{Entry, MatchResult};
use types::errors::MatchmakingError;
use types::game::GameKey;
use types::ids::PlayerId;
use types::params::GameParams;

use crate::pool::{PendingDeliveries, WaitingPool};
use crate::rules;

/// Main matchmaking engine
///
/// Process-scoped: created at startup, never persisted.
pub struct MatchmakingEngine {
    /// One pool per supported game
    pools: HashMap<GameKey, Mutex<WaitingPool>>,
    /// Results awaiting pickup by the non-initiating side
    pending: PendingDeliveries,
}

/// Searching-player counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolCounts {
    pub total: usize,
    pub games: BTreeMap<GameKey, usize>,
}

impl MatchmakingEngine {
    /// Create an engine with an empty pool for every game
    pub fn new() -> Self {
        Self {
            pools: GameKey::ALL
                .into_iter()
                .map(|game| (game, Mutex::new(WaitingPool::new())))
                .collect(),
            pending: PendingDeliveries::new(),
        }
    }

    /// Start searching in `game`
    pub fn join(
        &self,
        identity: &str,
        game: &str,
        params: Value,
        ignored: impl IntoIterator<Item = String>,
    ) -> Result<(), MatchmakingError> {
        self.join_at(identity, game, params, ignored, Utc::now())
    }

    /// Start searching in `game`, enqueued at `now`
    ///
    /// Replaces any previous entry for the identity in that pool and voids
    /// an undelivered match the identity may still have pending.
    pub fn join_at(
        &self,
        identity: &str,
        game: &str,
        params: Value,
        ignored: impl IntoIterator<Item = String>,
        now: DateTime<Utc>,
    ) -> Result<(), MatchmakingError> {
        let identity = parse_identity(identity)?;
        let game: GameKey = game.parse()?;

        let params = GameParams::decode(game, params).unwrap_or_else(|e| {
            warn!(player = %identity, %game, error = %e, "Undecodable params, entry will not match");
            GameParams::absent(game)
        });
        let ignored = ignored.into_iter().filter_map(PlayerId::try_new);
        let entry = Entry::new(identity.clone(), params, ignored, now);

        let mut pool = self.lock_pool(game);
        let rejoined = pool.insert(entry).is_some();
        if self.pending.discard(identity.as_str()) {
            debug!(player = %identity, %game, "Discarded undelivered match on rejoin");
        }

        info!(player = %identity, %game, rejoined, searching = pool.len(), "Player joined");
        Ok(())
    }

    /// Stop searching
    ///
    /// Always succeeds, including for identities that were never present
    /// and for unknown games. Any pending result is discarded.
    pub fn leave(&self, identity: &str, game: &str) {
        let (removed, discarded) = match game.parse::<GameKey>() {
            Ok(key) => {
                // Discard under the pool lock so a concurrent poll cannot
                // park a result for this player after it is gone
                let mut pool = self.lock_pool(key);
                let removed = PlayerId::try_new(identity)
                    .is_some_and(|id| pool.remove_by_identity(&id).is_some());
                (removed, self.pending.discard(identity))
            }
            Err(_) => (false, self.pending.discard(identity)),
        };

        if removed || discarded {
            info!(player = %identity, %game, removed, discarded, "Player left");
        }
    }

    /// Check for a match
    pub fn poll(&self, identity: &str, game: &str) -> Result<Option<MatchResult>, MatchmakingError> {
        self.poll_at(identity, game, Utc::now())
    }

    /// Check for a match as of `now`
    ///
    /// A pending result is returned first, whatever `game` says. Otherwise
    /// the caller's pool is scanned in insertion order and the first
    /// compatible entry is paired with the caller. The caller gets its
    /// result directly; the partner's is parked until it polls.
    pub fn poll_at(
        &self,
        identity: &str,
        game: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<MatchResult>, MatchmakingError> {
        if let Some(result) = self.pending.take(identity) {
            debug!(player = %identity, opponent = %result.opponent_id, "Delivered pending match");
            return Ok(Some(result));
        }

        let game: GameKey = game.parse()?;
        let identity = parse_identity(identity)?;

        let mut pool = self.lock_pool(game);
        let Some(me) = pool.find(&identity) else {
            debug!(player = %identity, %game, "Poll from player not searching");
            return Ok(None);
        };

        let search_time = me.search_time_secs(now);
        let Some(other) = pool
            .scan()
            .filter(|other| other.identity != identity)
            .find(|other| rules::is_compatible(me, other, search_time))
        else {
            debug!(player = %identity, %game, search_time, "No compatible opponent");
            return Ok(None);
        };

        let (for_me, for_other) = MatchResult::pair(me, other);
        let other_id = other.identity.clone();

        let remaining = pool
            .scan()
            .filter(|e| e.identity != identity && e.identity != other_id)
            .cloned()
            .collect();
        pool.replace_all(remaining);
        if let Some(stale) = self.pending.store(other_id.clone(), for_other) {
            warn!(
                player = %other_id,
                replaced_match_id = %stale.match_id,
                "Replaced undelivered match for player searching in several games"
            );
        }

        info!(
            match_id = %for_me.match_id,
            %game,
            player = %identity,
            opponent = %other_id,
            search_time,
            "Match found"
        );
        Ok(Some(for_me))
    }

    /// Number of players searching in `game`
    pub fn count_by_game(&self, game: &str) -> Result<usize, MatchmakingError> {
        let game: GameKey = game.parse()?;
        Ok(self.lock_pool(game).len())
    }

    /// Number of players searching across all games
    pub fn count_total(&self) -> usize {
        GameKey::ALL.into_iter().map(|game| self.lock_pool(game).len()).sum()
    }

    /// Per-game counts plus the total
    pub fn counts(&self) -> PoolCounts {
        let games: BTreeMap<GameKey, usize> = GameKey::ALL
            .into_iter()
            .map(|game| (game, self.lock_pool(game).len()))
            .collect();
        PoolCounts {
            total: games.values().sum(),
            games,
        }
    }

    /// Number of matches awaiting pickup
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn lock_pool(&self, game: GameKey) -> MutexGuard<'_, WaitingPool> {
        // Every GameKey gets a pool in `new`
        self.pools[&game]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MatchmakingEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_identity(identity: &str) -> Result<PlayerId, MatchmakingError> {
    PlayerId::try_new(identity).ok_or_else(|| MatchmakingError::invalid_request("missing uid"))
}
