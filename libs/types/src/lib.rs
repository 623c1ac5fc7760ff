//! Types library for the matchmaking service
//!
//! Core type definitions shared by the matchmaking engine and its HTTP
//! gateway.
//!
//! # Modules
//! - `ids`: Identifiers (PlayerId, MatchId)
//! - `game`: The closed set of supported games
//! - `params`: Per-game search attributes
//! - `entry`: Search records and match results
//! - `errors`: Error taxonomy

pub mod ids;
pub mod game;
pub mod params;
pub mod entry;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::game::*;
    pub use crate::params::*;
    pub use crate::entry::*;
    pub use crate::errors::*;
}
