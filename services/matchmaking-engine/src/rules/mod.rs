//! Compatibility rules
//!
//! A pair is compatible when neither side ignores the other and the game's
//! distance between their params is within the game's tolerance for the
//! initiator's search time. A distance that cannot be computed (missing
//! attribute, unknown rank label, zero Rust hours) makes the pair
//! incompatible; it is never an error.

pub mod schedule;

use types::entry::Entry;
use types::params::GameParams;

use crate::ranks;

pub use schedule::{Step, ToleranceSchedule};

/// Whether `me` may be paired with `other` after `search_time_secs`
pub fn is_compatible(me: &Entry, other: &Entry, search_time_secs: f64) -> bool {
    if me.mutually_blocked(other) {
        return false;
    }

    match distance(&me.params, &other.params) {
        Some(d) => d <= ToleranceSchedule::for_game(me.game()).tolerance(search_time_secs),
        None => false,
    }
}

/// Game-specific distance between two params, None if they cannot be compared
///
/// Params from different games never compare.
pub fn distance(a: &GameParams, b: &GameParams) -> Option<f64> {
    match (a, b) {
        (GameParams::Deadlock(a), GameParams::Deadlock(b)) => {
            ranks::DEADLOCK.distance(a.rank.as_deref()?, b.rank.as_deref()?).map(f64::from)
        }
        (GameParams::Valorant(a), GameParams::Valorant(b)) => {
            ranks::VALORANT.distance(a.rank.as_deref()?, b.rank.as_deref()?).map(f64::from)
        }
        (GameParams::Dota2(a), GameParams::Dota2(b)) => absolute(a.rating?, b.rating?),
        (GameParams::Cs2(a), GameParams::Cs2(b)) => absolute(a.elo?, b.elo?),
        (GameParams::Pubg(a), GameParams::Pubg(b)) => absolute(a.kd?, b.kd?),
        (GameParams::Rust(a), GameParams::Rust(b)) => relative(a.hours?, b.hours?),
        _ => None,
    }
}

fn absolute(a: f64, b: f64) -> Option<f64> {
    Some((a - b).abs())
}

/// `|a - b| / max(a, b)`; both sides must be nonzero
fn relative(a: f64, b: f64) -> Option<f64> {
    if a <= 0.0 || b <= 0.0 {
        return None;
    }
    Some((a - b).abs() / a.max(b))
}
