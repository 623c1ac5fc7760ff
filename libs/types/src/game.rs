//! Supported games
//!
//! The set of games is closed: every pool, rule and ladder is keyed by a
//! [`GameKey`], and unknown wire names are rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MatchmakingError;

/// Game discriminator for pools, params and rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKey {
    Deadlock,
    Dota2,
    Cs2,
    Valorant,
    Rust,
    Pubg,
}

impl GameKey {
    /// Every supported game, in a fixed order
    pub const ALL: [GameKey; 6] = [
        GameKey::Deadlock,
        GameKey::Dota2,
        GameKey::Cs2,
        GameKey::Valorant,
        GameKey::Rust,
        GameKey::Pubg,
    ];

    /// Wire name of the game
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKey::Deadlock => "deadlock",
            GameKey::Dota2 => "dota2",
            GameKey::Cs2 => "cs2",
            GameKey::Valorant => "valorant",
            GameKey::Rust => "rust",
            GameKey::Pubg => "pubg",
        }
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameKey {
    type Err = MatchmakingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKey::ALL
            .into_iter()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| MatchmakingError::UnknownGame { game: s.to_string() })
    }
}
