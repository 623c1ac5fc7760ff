//! Error types for the matchmaking engine
//!
//! Only caller mistakes are errors. An unsuccessful scan is a `None`
//! result, and an attribute that cannot be compared makes a pair
//! incompatible rather than failing the call.

use thiserror::Error;

/// Top-level matchmaking error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchmakingError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Unknown game: {game}")]
    UnknownGame { game: String },
}

impl MatchmakingError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        MatchmakingError::InvalidRequest { reason: reason.into() }
    }

    /// Whether the transport should report this as a client error
    ///
    /// Every variant belongs to the InvalidRequest class; an unknown game
    /// is kept separate only for a more specific message.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            MatchmakingError::InvalidRequest { .. } | MatchmakingError::UnknownGame { .. }
        )
    }
}
