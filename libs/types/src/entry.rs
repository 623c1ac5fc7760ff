//! Search records and match results
//!
//! An [`Entry`] lives in a waiting pool while its player searches. A formed
//! pairing produces two symmetric [`MatchResult`] values, one per side.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::game::GameKey;
use crate::ids::{MatchId, PlayerId};
use crate::params::GameParams;

/// A player's active search record
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub identity: PlayerId,
    pub params: GameParams,
    /// Identities this player refuses to be matched with
    pub ignored: HashSet<PlayerId>,
    pub enqueued_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        identity: PlayerId,
        params: GameParams,
        ignored: impl IntoIterator<Item = PlayerId>,
        enqueued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identity,
            params,
            ignored: ignored.into_iter().collect(),
            enqueued_at,
        }
    }

    pub fn game(&self) -> GameKey {
        self.params.game()
    }

    /// True if either side blocks the other
    pub fn mutually_blocked(&self, other: &Entry) -> bool {
        self.ignored.contains(&other.identity) || other.ignored.contains(&self.identity)
    }

    /// Seconds spent searching as of `now`, never negative
    pub fn search_time_secs(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = (now - self.enqueued_at).num_milliseconds() as f64 / 1000.0;
        elapsed.max(0.0)
    }
}

/// One side's view of a formed match
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_id: MatchId,
    pub game: GameKey,
    pub opponent_id: PlayerId,
    pub opponent_params: GameParams,
    /// `[self, opponent]`
    pub players: [PlayerId; 2],
}

impl MatchResult {
    /// Build the two symmetric results for a pairing
    ///
    /// Returns `(me's result, other's result)`.
    pub fn pair(me: &Entry, other: &Entry) -> (MatchResult, MatchResult) {
        let match_id = MatchId::new();
        let game = me.game();

        let for_me = MatchResult {
            match_id,
            game,
            opponent_id: other.identity.clone(),
            opponent_params: other.params.clone(),
            players: [me.identity.clone(), other.identity.clone()],
        };
        let for_other = MatchResult {
            match_id,
            game,
            opponent_id: me.identity.clone(),
            opponent_params: me.params.clone(),
            players: [other.identity.clone(), me.identity.clone()],
        };

        (for_me, for_other)
    }
}
