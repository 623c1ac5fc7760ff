//! Matchmaking Engine
//!
//! Pairs waiting players two at a time across independent per-game pools.
//! Players join a pool, poll for a result, and are removed once a
//! compatibility rule accepts a partner.
//!
//! **Key Invariants:**
//! - An identity appears at most once per pool
//! - A pool is scanned and rewritten under one lock, so no entry is paired twice
//! - The non-initiating side of a pairing receives its result exactly once
//! - Tolerance only widens as search time grows

pub mod ranks;
pub mod rules;
pub mod pool;
pub mod engine;

pub use engine::{MatchmakingEngine, PoolCounts};
